//! The line-oriented console abstraction and its standard implementation.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Errors that can occur while talking to a console.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The input source has no more lines to give.
    #[error("input exhausted: no more lines to read")]
    Eof,

    /// An underlying I/O error occurred.
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A line-oriented console: write lines out, read lines in.
///
/// # Architecture Note
/// Why a trait instead of calling `println!` and `stdin` directly?
/// Lessons written against this contract can run unchanged against the real
/// terminal ([`StdConsole`]) or a scripted test double
/// ([`mock::MockConsole`](super::mock::MockConsole)). The trait is kept
/// object-safe on purpose so a lesson can take `&mut dyn Console`; the
/// generic conveniences live in [`ConsoleExt`].
pub trait Console {
    /// Writes one line of output, terminated by a newline.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Reads the next line of input, without the trailing newline.
    ///
    /// # Errors
    /// Returns [`ConsoleError::Eof`] when the input source is exhausted.
    fn read_line(&mut self) -> Result<String, ConsoleError>;
}

/// Generic helpers available on every [`Console`].
///
/// This is a blanket extension trait: it is implemented for every console,
/// including `dyn Console`, so lessons get these methods for free.
pub trait ConsoleExt: Console {
    /// Prints a prompt, then reads and trims the answer.
    ///
    /// Trimming makes comparisons robust against answers like `" YES "`.
    fn prompt(&mut self, message: &str) -> Result<String, ConsoleError> {
        self.write_line(message)?;
        Ok(self.read_line()?.trim().to_string())
    }

    /// Prints a prompt, reads the answer, and tries to parse it.
    ///
    /// This is the safe-parsing pattern: instead of failing on bad input,
    /// it returns `Ok(None)` so the caller can report the problem and
    /// decide what to do next. Unpredictable user input never becomes an
    /// error on this path.
    fn prompt_parsed<T: FromStr>(&mut self, message: &str) -> Result<Option<T>, ConsoleError> {
        let answer = self.prompt(message)?;
        Ok(answer.parse().ok())
    }

    /// Prints a prompt and interprets the answer as a yes/no question.
    ///
    /// Anything other than a case-insensitive `yes` counts as no.
    fn prompt_yes_no(&mut self, message: &str) -> Result<bool, ConsoleError> {
        let answer = self.prompt(message)?;
        Ok(answer.eq_ignore_ascii_case("yes"))
    }
}

impl<C: Console + ?Sized> ConsoleExt for C {}

/// The real console: blocking reads from stdin, writes to stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buffer = String::new();
        let bytes_read = io::stdin().lock().read_line(&mut buffer)?;
        if bytes_read == 0 {
            return Err(ConsoleError::Eof);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn prompt_parsed_returns_none_for_non_numeric_text() {
        let mut console = MockConsole::script(["ABC"]);
        let parsed: Option<i64> = console
            .prompt_parsed("Enter a number:")
            .expect("prompt should succeed");
        assert_eq!(parsed, None);
    }

    #[test]
    fn prompt_parsed_returns_value_for_numeric_text() {
        let mut console = MockConsole::script(["  123 "]);
        let parsed: Option<i64> = console
            .prompt_parsed("Enter a number:")
            .expect("prompt should succeed");
        assert_eq!(parsed, Some(123));
    }

    #[test]
    fn prompt_yes_no_ignores_case_and_whitespace() {
        let mut console = MockConsole::script([" YES ", "no", "maybe"]);
        assert!(console.prompt_yes_no("Q1:").unwrap());
        assert!(!console.prompt_yes_no("Q2:").unwrap());
        assert!(!console.prompt_yes_no("Q3:").unwrap());
    }

    #[test]
    fn reading_past_the_script_is_an_eof_error() {
        let mut console = MockConsole::script(["only line"]);
        console.read_line().expect("first line should be there");
        assert!(matches!(console.read_line(), Err(ConsoleError::Eof)));
    }
}
