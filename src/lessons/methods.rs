//! Lesson `methods`: functions, parameters, and return values.
//!
//! Rust has no method overloading. Where other languages define an
//! averaging function three times for two, three, and four values, one
//! function taking a slice covers every arity.

use crate::console::Console;

use super::{Lesson, LessonError};

/// Builds a greeting for the given name.
pub(crate) fn greet(name: &str) -> String {
    format!("Hello {name}!")
}

/// Area of a circle: pi times radius squared.
pub(crate) fn circle_area(radius: f64) -> f64 {
    std::f64::consts::PI * radius.powi(2)
}

/// A grade of 50 or above passes.
pub(crate) fn is_passing(grade: f64) -> bool {
    grade >= 50.0
}

/// The mean of any number of values. An empty slice averages to zero.
pub(crate) fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// A formatted info block for a student.
pub(crate) fn student_info(name: &str, age: u32, is_enrolled: bool) -> String {
    format!("Student Info:\nName: {name}\nAge: {age}\nEnrolled: {is_enrolled}")
}

/// A tiny type distinguishing associated functions from methods.
///
/// `Announcer::new` is an associated function: it is called on the type and
/// needs no instance. `announce` is a method: it takes `&self` and reads
/// instance state.
pub(crate) struct Announcer {
    prefix: String,
}

impl Announcer {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub(crate) fn announce(&self, message: &str) -> String {
        format!("[{}] {message}", self.prefix)
    }
}

/// Calls each function in turn and prints the results.
pub struct MethodsLesson;

impl Lesson for MethodsLesson {
    fn name(&self) -> &'static str {
        "methods"
    }

    fn title(&self) -> &'static str {
        "Functions, parameters, and return values"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("** Methods Demo **")?;

        let name = "Sam";
        console.write_line(&greet(name))?;

        let area = circle_area(7.0);
        console.write_line(&format!("Circle Area: {area}"))?;

        let passed = is_passing(66.5);
        console.write_line(&format!("Did the student pass? {passed}"))?;

        // One slice-taking function replaces a whole overload family.
        let exam1 = 78.67;
        let exam2 = 81.56;
        console.write_line(&format!(
            "Average of the 2 exams: {}",
            average(&[exam1, exam2])
        ))?;
        console.write_line(&format!(
            "Average 2 (of two exams): {}",
            average(&[80.0, 82.0])
        ))?;
        console.write_line(&format!(
            "Average 3 (with three values): {}",
            average(&[90.0, 92.0, 85.0])
        ))?;
        console.write_line(&format!(
            "The average of 4 quizzes is {}",
            average(&[80.0, 75.0, 68.5, 90.0])
        ))?;

        // Slices are borrowed views: the function sees the caller's data
        // without taking ownership of it.
        let student_names = ["Steve", "Martin", "Kate", "Sam"];
        console.write_line("List of Student Names:")?;
        for student in student_names {
            console.write_line(&format!("- {student}"))?;
        }

        console.write_line(&student_info("Alex", 20, true))?;

        // Associated function to build, method to use.
        let announcer = Announcer::new("note");
        console.write_line(&announcer.announce("this method runs on an instance."))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn average_handles_every_arity() {
        assert_eq!(average(&[80.0, 82.0]), 81.0);
        assert_eq!(average(&[90.0, 92.0, 85.0]), 89.0);
        assert_eq!(average(&[80.0, 75.0, 68.5, 90.0]), 78.375);
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn passing_boundary_is_fifty() {
        assert!(is_passing(50.0));
        assert!(is_passing(66.5));
        assert!(!is_passing(49.9));
    }

    #[test]
    fn circle_area_uses_pi() {
        let area = circle_area(7.0);
        assert!((area - 153.93804002589985).abs() < 1e-9);
    }

    #[test]
    fn announcer_prefixes_its_messages() {
        let announcer = Announcer::new("note");
        assert_eq!(announcer.announce("hi"), "[note] hi");
    }

    #[test]
    fn lesson_prints_greeting_and_averages() {
        let mut console = MockConsole::new();
        MethodsLesson.run(&mut console).expect("lesson should finish");
        console.assert_printed("Hello Sam!");
        console.assert_printed("Did the student pass? true");
        console.assert_printed("Average 2 (of two exams): 81");
        console.assert_printed("The average of 4 quizzes is 78.375");
        console.assert_printed("- Kate");
        console.assert_printed("[note] this method runs on an instance.");
    }
}
