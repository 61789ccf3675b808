//! Lesson `hello`: variables, console input/output, and arithmetic.

use crate::console::{Console, ConsoleExt};

use super::{Lesson, LessonError};

/// The first program: greet the world, echo some input, show the basic
/// scalar types, and do arithmetic with two integers.
pub struct HelloLesson;

impl Lesson for HelloLesson {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn title(&self) -> &'static str {
        "Variables, input, and output"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("Hello, World!")?;

        let subject = console.prompt("Enter your subject:")?;
        // String concatenation with `+` works, but interpolation reads better.
        console.write_line(&("Your current subject is ".to_string() + &subject))?;

        let college = console.prompt("Enter your college name:")?;
        console.write_line(&format!("Your current college is {college}"))?;
        console.write_line(&format!("You are studying {subject} at {college}."))?;

        // The basic scalar types, each with an explicit annotation so the
        // reader sees what the compiler would otherwise infer.
        let age: i32 = 21;
        let avg: f64 = 3.75;
        let is_graduated: bool = false;
        let grade: char = 'A';
        let student_name: &str = "John";
        console.write_line(&format!(
            "Student: {student_name}, Age: {age}, avg: {avg}, Grade: {grade}, Graduated: {is_graduated}"
        ))?;

        let a = 10;
        let b = 3;
        console.write_line(&format!("Addition: {}", a + b))?;
        console.write_line(&format!("Subtraction: {}", a - b))?;
        console.write_line(&format!("Multiplication: {}", a * b))?;
        // Integer division truncates: 10 / 3 is 3, the remainder is separate.
        console.write_line(&format!("Division: {}", a / b))?;
        console.write_line(&format!("Modulus (Remainder): {}", a % b))?;

        Ok(())
    }
}
