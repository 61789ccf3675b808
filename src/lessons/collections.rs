//! Lesson `lists`: fixed arrays versus growable vectors.
//!
//! Arrays have a size baked into their type and live happily on the stack;
//! `Vec<T>` grows and shrinks at runtime. Use an array when the element
//! count is fixed, a vector when it changes.

use crate::console::Console;

use super::{Lesson, LessonError};

/// Removes the first element equal to `target`, preserving order.
///
/// Returns whether anything was removed. This mirrors the usual
/// remove-by-value operation on dynamic lists.
pub(crate) fn remove_first(names: &mut Vec<String>, target: &str) -> bool {
    match names.iter().position(|name| name == target) {
        Some(index) => {
            names.remove(index);
            true
        }
        None => false,
    }
}

/// Arrays of lucky numbers, students, and subjects, then the same data
/// managed dynamically in vectors.
pub struct CollectionsLesson;

impl Lesson for CollectionsLesson {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn title(&self) -> &'static str {
        "Arrays and growable vectors"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("** Arrays and Vectors Demo **")?;

        // One array instead of five separate variables.
        let lucky_numbers = [9, 3, 10, 25, 30];
        console.write_line(&format!("My first lucky number is: {}", lucky_numbers[0]))?;
        console.write_line(&format!("My last lucky number is: {}", lucky_numbers[4]))?;

        // An array created empty, then filled slot by slot.
        let mut students = [""; 6];
        students[0] = "Alex Chow";
        students[1] = "Martin Smith";
        students[2] = "Sam Simpson";
        students[3] = "Sarah Grandson";
        students[4] = "Kate Wilson";
        students[5] = "Elena Chow";
        console.write_line(&format!("The third student is: {}", students[2]))?;

        let subjects = ["HTML", "CSS", "Bootstrap", "JavaScript", "jQuery", "Python", "Rust"];
        console.write_line(&format!("First subject is: {}", subjects[0]))?;
        console.write_line(&format!("Last subject is: {}", subjects[6]))?;

        // A 2D array is an array of arrays: row first, then column.
        let countries_and_capitals = [
            ["Canada", "Ottawa"],
            ["USA", "Washington"],
            ["UK", "London"],
            ["Japan", "Tokyo"],
        ];
        console.write_line(&format!(
            "The capital of USA is: {}",
            countries_and_capitals[1][1]
        ))?;
        console.write_line(&format!(
            "The capital of Japan is: {}",
            countries_and_capitals[3][1]
        ))?;

        // Now the dynamic version.
        console.write_line("** Vectors Demo **")?;
        let mut student_names: Vec<String> = Vec::new();
        student_names.push("Alex Chow".to_string());
        student_names.push("Martin Smith".to_string());
        student_names.push("Sam Simpson".to_string());
        student_names.push("Sarah Grandson".to_string());
        student_names.push("Kate Wilson".to_string());
        student_names.push("Elena Chow".to_string());

        console.write_line(&format!("Total students: {}", student_names.len()))?;
        console.write_line("List of students:")?;
        for name in &student_names {
            console.write_line(&format!("- {name}"))?;
        }

        console.write_line("Removing 'Sam Simpson' from the list...")?;
        remove_first(&mut student_names, "Sam Simpson");
        console.write_line("Updated student list:")?;
        for name in &student_names {
            console.write_line(&format!("- {name}"))?;
        }

        student_names.push("James Carter".to_string());
        student_names.push("Leila Thomas".to_string());
        console.write_line("Student list (indexed):")?;
        for (i, name) in student_names.iter().enumerate() {
            console.write_line(&format!("Index {i}: {name}"))?;
        }

        console.write_line("List of Lucky Numbers:")?;
        let mut lucky: Vec<i32> = vec![9, 3, 10, 25, 30];
        console.write_line(&format!("Count of lucky numbers: {}", lucky.len()))?;
        lucky.push(7);
        if let Some(index) = lucky.iter().position(|&n| n == 10) {
            lucky.remove(index);
        }
        console.write_line("Updated Lucky Numbers:")?;
        for number in &lucky {
            console.write_line(&format!("- {number}"))?;
        }

        console.write_line("Lists demo complete.")?;
        Ok(())
    }
}
