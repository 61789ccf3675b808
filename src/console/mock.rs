//! # Mock Console
//!
//! Utilities for testing lessons in isolation.
//!
//! Use [`MockConsole::script`] to queue up the lines a user would type,
//! run a lesson against it, then assert on [`MockConsole::transcript`].
//!
//! # Example
//! ```
//! use oop_recipe::console::mock::MockConsole;
//! use oop_recipe::console::{Console, ConsoleExt};
//!
//! let mut console = MockConsole::script(["42"]);
//! console.write_line("The answer?").unwrap();
//! let answer: Option<i64> = console.prompt_parsed("Enter it:").unwrap();
//! assert_eq!(answer, Some(42));
//! assert!(console.transcript().contains("The answer?"));
//! ```

use std::collections::VecDeque;

use super::core::{Console, ConsoleError};

/// A console with scripted input and a captured output transcript.
///
/// Testing interactive programs is usually painful because they block on
/// stdin. `MockConsole` removes the pain: input comes from a queue prepared
/// by the test, and everything the lesson prints accumulates in a
/// transcript string the test can inspect afterwards.
#[derive(Debug, Default)]
pub struct MockConsole {
    input: VecDeque<String>,
    transcript: String,
}

impl MockConsole {
    /// Creates a mock console with no scripted input.
    ///
    /// Good enough for lessons that only print.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock console preloaded with the given input lines.
    pub fn script<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Queues one more input line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything written so far, newlines included.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Asserts that the transcript contains the given text.
    ///
    /// # Panics
    /// Panics with the full transcript when the text is missing, so a
    /// failing test shows exactly what the lesson printed.
    #[track_caller]
    pub fn assert_printed(&self, needle: &str) {
        assert!(
            self.transcript.contains(needle),
            "expected transcript to contain {needle:?}, got:\n{}",
            self.transcript
        );
    }
}

impl Console for MockConsole {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push_str(line);
        self.transcript.push('\n');
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.input.pop_front().ok_or(ConsoleError::Eof)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_come_back_in_order() {
        let mut console = MockConsole::script(["first", "second"]);
        assert_eq!(console.read_line().unwrap(), "first");
        assert_eq!(console.read_line().unwrap(), "second");
    }

    #[test]
    fn transcript_captures_written_lines() {
        let mut console = MockConsole::new();
        console.write_line("Hello, World!").unwrap();
        console.write_line("Goodbye.").unwrap();
        assert_eq!(console.transcript(), "Hello, World!\nGoodbye.\n");
        console.assert_printed("Hello");
    }
}
