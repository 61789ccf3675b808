//! Lesson `casting`: type conversion, widening and truncating.
//!
//! Rust never converts numeric types silently. Widening goes through
//! `From`, truncating goes through an explicit `as` cast, and text goes
//! through `parse`, which returns a `Result` instead of crashing.

use crate::console::Console;
use crate::model::Money;

use super::{Lesson, LessonError};

/// Truncates a float to an integer, discarding the fractional part.
///
/// `123.45 as i64` is `123`; the `.45` is gone. This is the explicit-cast
/// counterpart to the lossless `f64::from(i32)` widening.
pub(crate) fn truncate(value: f64) -> i64 {
    value as i64
}

/// Tries to read an integer out of text, tolerating surrounding whitespace.
///
/// Returns `None` instead of panicking on junk — the safe pattern for
/// unpredictable user input.
pub(crate) fn parse_int(text: &str) -> Option<i32> {
    text.trim().parse().ok()
}

/// Demonstrates conversions between numbers, text, bools, and [`Money`].
pub struct CastingLesson;

impl Lesson for CastingLesson {
    fn name(&self) -> &'static str {
        "casting"
    }

    fn title(&self) -> &'static str {
        "Type casting and conversion"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("** Casting Demo **")?;

        // Widening: i32 -> f64 is lossless, so `From` exists for it.
        let int_val: i32 = 100;
        let double_val = f64::from(int_val);
        console.write_line(&format!("Widening (i32 -> f64): {int_val} ==> {double_val}"))?;

        // Truncating: f64 -> i64 can lose data, so it must be spelled out.
        let large_double = 123.45;
        console.write_line(&format!(
            "Truncating (f64 -> i64): {large_double} ==> {}",
            truncate(large_double)
        ))?;

        // Parsing text that is a number.
        let numeric_text = "123";
        match parse_int(numeric_text) {
            Some(number) => {
                console.write_line(&format!("Parsed {numeric_text:?} ==> {number}"))?;
            }
            None => {
                console.write_line(&format!("Failed to parse {numeric_text:?}."))?;
            }
        }

        // Parsing text that is not a number: no crash, just a None.
        let invalid_text = "ABC";
        match parse_int(invalid_text) {
            Some(number) => {
                console.write_line(&format!("Parsed {invalid_text:?} ==> {number}"))?;
            }
            None => {
                console.write_line(&format!(
                    "Failed to parse: {invalid_text:?} is not a valid integer."
                ))?;
            }
        }

        // Bool to text and back.
        let is_available = true;
        let bool_text = is_available.to_string();
        let parsed_bool: bool = bool_text.parse().unwrap_or(false);
        console.write_line(&format!(
            "Bool to text and back: {is_available} ==> {bool_text:?} ==> {parsed_bool}"
        ))?;

        // Same truncation story for f32.
        let float_val: f32 = 9.99;
        console.write_line(&format!(
            "Float to integer: {float_val} ==> {}",
            float_val as i32
        ))?;

        // Money: exact cents instead of floating point, with its own
        // parsing and formatting.
        let money = Money::from_cents(1975);
        console.write_line(&format!("Money to text: {money}"))?;
        console.write_line(&format!(
            "Money to whole dollars: {money} ==> {}",
            money.whole_dollars()
        ))?;
        match "12.50".parse::<Money>() {
            Ok(parsed) => console.write_line(&format!("Parsed \"12.50\" ==> {parsed}"))?,
            Err(error) => console.write_line(&error.to_string())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn truncate_discards_the_fraction() {
        assert_eq!(truncate(123.45), 123);
        assert_eq!(truncate(9.99), 9);
        assert_eq!(truncate(-2.7), -2);
    }

    #[test]
    fn parse_int_accepts_numbers_and_rejects_junk() {
        assert_eq!(parse_int("123"), Some(123));
        assert_eq!(parse_int("  -7 "), Some(-7));
        assert_eq!(parse_int("ABC"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn lesson_reports_the_failed_parse() {
        let mut console = MockConsole::new();
        CastingLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed("Widening (i32 -> f64): 100 ==> 100");
        console.assert_printed("Truncating (f64 -> i64): 123.45 ==> 123");
        console.assert_printed("\"ABC\" is not a valid integer.");
        console.assert_printed("Money to text: $19.75");
        console.assert_printed("Money to whole dollars: $19.75 ==> 19");
    }
}
