//! # The Lessons
//!
//! One module per classroom program. Each lesson is a small type
//! implementing [`Lesson`], so the [`Curriculum`](crate::curriculum::Curriculum)
//! can hold them behind `Box<dyn Lesson>` and run them by name.
//!
//! ## Lesson Plan
//!
//! | Name           | Topic                                        |
//! |----------------|----------------------------------------------|
//! | `hello`        | Variables, input, and output                 |
//! | `casting`      | Type conversion, widening and truncating     |
//! | `control-flow` | if/else, nested checks, logical operators    |
//! | `switch`       | `match` on values and ranges                 |
//! | `loops`        | for, while, `loop`, break, continue          |
//! | `lists`        | Arrays and growable vectors                  |
//! | `methods`      | Functions, parameters, return values         |
//! | `objects`      | Structs and methods with [`Person`]          |
//! | `bank`         | Encapsulation with [`BankAccount`]           |
//!
//! [`Person`]: crate::model::Person
//! [`BankAccount`]: crate::model::BankAccount

pub mod bank;
pub mod basics;
pub mod casting;
pub mod collections;
pub mod control_flow;
pub mod loops;
pub mod methods;
pub mod objects;
pub mod switching;

use thiserror::Error;

use crate::console::{Console, ConsoleError};

/// Errors that can occur while running a lesson.
///
/// Invalid *user input* is not an error: lessons report it and recover, the
/// same way the console helpers return `Ok(None)` for unparsable text. Only
/// a broken console (I/O failure, exhausted input) fails a lesson.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// A single console lesson.
///
/// # Architecture Note
/// Taking `&mut dyn Console` instead of `std::io` directly is what makes
/// every lesson testable: the integration tests run lessons against a
/// [`MockConsole`](crate::console::mock::MockConsole) with scripted input
/// and assert on the transcript.
pub trait Lesson {
    /// Short name used to select the lesson from the command line.
    fn name(&self) -> &'static str;

    /// Human-readable title shown in listings and banners.
    fn title(&self) -> &'static str;

    /// Runs the lesson from start to finish.
    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError>;
}
