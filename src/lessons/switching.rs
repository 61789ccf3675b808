//! Lesson `switch`: matching one value against many cases.
//!
//! Rust's `match` replaces the switch statement, with two upgrades: arms
//! never fall through, and the compiler checks that every case is covered.

use tracing::debug;

use crate::console::{Console, ConsoleExt};

use super::{Lesson, LessonError};

/// The word for a number between 1 and 5, or `None` outside that range.
pub(crate) fn number_word(number: i64) -> Option<&'static str> {
    match number {
        1 => Some("ONE"),
        2 => Some("TWO"),
        3 => Some("THREE"),
        4 => Some("FOUR"),
        5 => Some("FIVE"),
        _ => None,
    }
}

/// Classifies an average using match guards over ranges.
pub(crate) fn average_band(avg: f64) -> String {
    match avg {
        a if a < 50.0 => format!("Your average {a}, too low."),
        a if a > 80.0 => format!("Your average {a}, too high."),
        a if a > 70.0 => format!("Your average {a}, good."),
        a if a >= 60.0 => format!("Your average {a}, Not bad."),
        a if a >= 50.0 => format!("Your average {a}, Just Passing."),
        // Only NaN reaches this arm.
        a => format!("Invalid {a} value!"),
    }
}

/// Reads a number 1-5 and names it, then bands a fixed average two ways.
pub struct SwitchLesson;

impl Lesson for SwitchLesson {
    fn name(&self) -> &'static str {
        "switch"
    }

    fn title(&self) -> &'static str {
        "Matching on values and ranges"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("** Match Demo **")?;

        let Some(number) = console.prompt_parsed::<i64>("Enter a number from 1 to 5:")? else {
            debug!("number input rejected, ending lesson early");
            console.write_line("That wasn't a valid number.")?;
            return Ok(());
        };
        console.write_line(&format!("You entered the number: {number}"))?;

        match number_word(number) {
            Some(word) => console.write_line(&format!("You entered {word}."))?,
            None => console.write_line("You entered a number outside the 1-5 range.")?,
        }

        // The same classification written twice: once as an if/else ladder,
        // once as a match with guards.
        let avg = 50.0;
        console.write_line("IF-ELSE Example:")?;
        if avg >= 80.0 {
            console.write_line("Well Done!")?;
        } else if avg >= 70.0 {
            console.write_line("Good Job!")?;
        } else {
            console.write_line("Never give up! You can try again")?;
        }

        console.write_line("MATCH Example:")?;
        console.write_line(&average_band(avg))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn words_cover_one_through_five() {
        assert_eq!(number_word(1), Some("ONE"));
        assert_eq!(number_word(3), Some("THREE"));
        assert_eq!(number_word(5), Some("FIVE"));
        assert_eq!(number_word(0), None);
        assert_eq!(number_word(6), None);
    }

    #[test]
    fn average_bands_match_the_ladder() {
        assert_eq!(average_band(49.9), "Your average 49.9, too low.");
        assert_eq!(average_band(50.0), "Your average 50, Just Passing.");
        assert_eq!(average_band(60.0), "Your average 60, Not bad.");
        assert_eq!(average_band(70.5), "Your average 70.5, good.");
        assert_eq!(average_band(80.5), "Your average 80.5, too high.");
        assert_eq!(average_band(f64::NAN), "Invalid NaN value!");
    }

    #[test]
    fn valid_number_is_named() {
        let mut console = MockConsole::script(["3"]);
        SwitchLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed("You entered the number: 3");
        console.assert_printed("You entered THREE.");
        console.assert_printed("Never give up! You can try again");
        console.assert_printed("Your average 50, Just Passing.");
    }

    #[test]
    fn out_of_range_number_is_reported() {
        let mut console = MockConsole::script(["9"]);
        SwitchLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed("You entered a number outside the 1-5 range.");
    }

    #[test]
    fn non_numeric_input_ends_the_lesson_early() {
        let mut console = MockConsole::script(["five"]);
        SwitchLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed("That wasn't a valid number.");
        assert!(!console.transcript().contains("You entered the number"));
    }
}
