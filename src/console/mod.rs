//! # Console Engine
//!
//! This module defines the generic building blocks for lesson input/output.
//!
//! ## Key Types
//!
//! - [`Console`]: The object-safe trait every lesson talks to.
//! - [`ConsoleExt`]: Generic helpers (`prompt`, `prompt_parsed`) layered on
//!   top of [`Console`].
//! - [`StdConsole`]: The real stdin/stdout implementation.
//! - [`mock::MockConsole`]: Scripted input and a captured transcript for tests.
//! - [`ConsoleError`]: Common errors (end of input, I/O failure).

pub mod core;
pub mod mock;

pub use self::core::{Console, ConsoleError, ConsoleExt, StdConsole};
