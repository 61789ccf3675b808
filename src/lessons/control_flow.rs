//! Lesson `control-flow`: decision making with `if`, `else if`, and `else`.

use tracing::debug;

use crate::console::{Console, ConsoleExt};

use super::{Lesson, LessonError};

/// Maps a 0-100 grade to its letter band.
pub(crate) fn grade_letter(grade: i64) -> &'static str {
    if grade >= 90 {
        "A (Excellent)"
    } else if grade >= 80 {
        "B (Very Good)"
    } else if grade >= 70 {
        "C (Good)"
    } else if grade >= 60 {
        "D (Pass)"
    } else {
        "F (Fail)"
    }
}

/// Library card rule: living OR working OR studying in the city is enough.
pub(crate) fn is_library_eligible(lives: bool, works: bool, studies: bool) -> bool {
    lives || works || studies
}

/// Age check, grade ladder, a nested login check, and combining conditions
/// with logical OR.
pub struct ControlFlowLesson;

impl Lesson for ControlFlowLesson {
    fn name(&self) -> &'static str {
        "control-flow"
    }

    fn title(&self) -> &'static str {
        "Decision making with if and else"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("=== Control Flow ===")?;

        // Safe parsing: bad input ends the lesson with a message instead of
        // crashing it.
        let Some(age) = console.prompt_parsed::<i64>("Enter your age:")? else {
            debug!("age input rejected, ending lesson early");
            console.write_line("Invalid input for age. Please enter a number.")?;
            return Ok(());
        };
        if age >= 18 {
            console.write_line("You are an adult.")?;
        } else {
            console.write_line("You are underage.")?;
        }

        let Some(grade) = console.prompt_parsed::<i64>("Enter your average grade (0-100):")? else {
            debug!("grade input rejected, ending lesson early");
            console.write_line("Invalid input for grade. Please enter a number.")?;
            return Ok(());
        };
        console.write_line(&format!("Grade: {}", grade_letter(grade)))?;

        // Nested conditions: the password only matters once the username
        // matched.
        let username = console.prompt("Enter your username:")?;
        let password = console.prompt("Enter your password:")?;
        if username == "admin" {
            if password == "1234" {
                console.write_line("Login successful!")?;
            } else {
                console.write_line("Wrong password.")?;
            }
        } else {
            console.write_line("Username not recognized.")?;
        }

        console.write_line("=== Toronto Public Library Card Eligibility ===")?;
        let lives = console.prompt_yes_no("Do you live in Toronto? (yes/no):")?;
        let works = console.prompt_yes_no("Do you work in Toronto? (yes/no):")?;
        let studies = console.prompt_yes_no("Do you study in Toronto? (yes/no):")?;
        if is_library_eligible(lives, works, studies) {
            console.write_line("You are eligible for a FREE Toronto Public Library card!")?;
        } else {
            console.write_line("You need to pay a non-resident membership fee.")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn grade_letter_boundaries() {
        assert_eq!(grade_letter(90), "A (Excellent)");
        assert_eq!(grade_letter(89), "B (Very Good)");
        assert_eq!(grade_letter(80), "B (Very Good)");
        assert_eq!(grade_letter(70), "C (Good)");
        assert_eq!(grade_letter(60), "D (Pass)");
        assert_eq!(grade_letter(59), "F (Fail)");
        assert_eq!(grade_letter(0), "F (Fail)");
    }

    #[test]
    fn one_yes_is_enough_for_the_library() {
        assert!(is_library_eligible(true, false, false));
        assert!(is_library_eligible(false, true, false));
        assert!(is_library_eligible(false, false, true));
        assert!(!is_library_eligible(false, false, false));
    }

    #[test]
    fn non_numeric_age_ends_the_lesson_early() {
        let mut console = MockConsole::script(["twenty"]);
        ControlFlowLesson
            .run(&mut console)
            .expect("lesson should finish");
        console.assert_printed("Invalid input for age. Please enter a number.");
        assert!(!console.transcript().contains("You are an adult."));
    }

    #[test]
    fn happy_path_covers_every_branch_group() {
        let mut console =
            MockConsole::script(["25", "85", "admin", "1234", "yes", "no", "no"]);
        ControlFlowLesson
            .run(&mut console)
            .expect("lesson should finish");
        console.assert_printed("You are an adult.");
        console.assert_printed("Grade: B (Very Good)");
        console.assert_printed("Login successful!");
        console.assert_printed("You are eligible for a FREE Toronto Public Library card!");
    }

    #[test]
    fn wrong_password_is_reported() {
        let mut console =
            MockConsole::script(["17", "55", "admin", "9999", "no", "no", "no"]);
        ControlFlowLesson
            .run(&mut console)
            .expect("lesson should finish");
        console.assert_printed("You are underage.");
        console.assert_printed("Grade: F (Fail)");
        console.assert_printed("Wrong password.");
        console.assert_printed("You need to pay a non-resident membership fee.");
    }
}
