//! # OOP Recipe
//!
//! > **A recipe for introductory object-oriented console programs in Rust.**
//!
//! This crate is a sequence of didactic console lessons: variables and
//! casting, control flow, loops, arrays and vectors, functions, and basic
//! encapsulation with a `Person` and a `BankAccount`. Every lesson reads
//! lines of text, performs one linear transformation, and prints prompts
//! and results.
//!
//! ## 🗺️ Module Tour
//!
//! The codebase is organized into four layers. Here is your map:
//!
//! ### 1. The Engine ([`console`])
//! Line-oriented input/output behind a small trait, so the same lesson code
//! runs against a real terminal or a scripted test double.
//! - **Role**: Separates the *lesson logic* from the *plumbing* (stdin,
//!   stdout, parsing user text).
//! - **Key items**: [`Console`](console::Console),
//!   [`ConsoleExt`](console::ConsoleExt),
//!   [`MockConsole`](console::mock::MockConsole).
//!
//! ### 2. The Data ([`model`])
//! Pure domain types with their invariants enforced at the boundary.
//! - **Role**: Demonstrates encapsulation — private fields, accessor
//!   methods, and operations that validate before mutating.
//! - **Key items**: [`Person`](model::Person),
//!   [`BankAccount`](model::BankAccount), [`Money`](model::Money).
//!
//! ### 3. The Implementation ([`lessons`])
//! One module per lesson, each implementing the [`Lesson`](lessons::Lesson)
//! trait.
//! - **Role**: The actual classroom programs, built on the engine and the
//!   data layers.
//!
//! ### 4. The Orchestrator ([`curriculum`])
//! Lessons don't exist in a vacuum. The curriculum wires them into an
//! ordered sequence.
//! - **Role**: Registry, lookup by name, and sequenced execution with
//!   structured logging around each lesson.
//! - **Key items**: [`Curriculum`](curriculum::Curriculum),
//!   [`setup_tracing`](curriculum::tracing::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the whole curriculum with info logs
//! RUST_LOG=info cargo run -- all
//!
//! # Run a single lesson
//! cargo run -- run bank
//!
//! # See what is available
//! cargo run -- list
//! ```
//!
//! ## 🧪 Testing
//!
//! See [`console::mock`] for utilities to drive lessons with scripted input
//! and assert on the printed transcript.

pub mod console;
pub mod curriculum;
pub mod lessons;
pub mod model;
