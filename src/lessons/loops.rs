//! Lesson `loops`: repetition with `for`, `while`, and `loop`.
//!
//! Rust has no do-while; `loop` with a trailing `break` condition covers
//! the run-at-least-once case.

use crate::console::Console;

use super::{Lesson, LessonError};

/// Counted loops, condition loops, break and continue, and iteration over
/// 1D and 2D arrays.
pub struct LoopsLesson;

impl Lesson for LoopsLesson {
    fn name(&self) -> &'static str {
        "loops"
    }

    fn title(&self) -> &'static str {
        "Repetition with for, while, and loop"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("** Loops Demo **")?;

        console.write_line("For loop:")?;
        for i in 1..=5 {
            // Three ways to build the same line.
            console.write_line(&("Using +: Iteration ".to_string() + &i.to_string()))?;
            console.write_line(&format!("Using format!: Iteration {}", i))?;
            console.write_line(&format!("Using inline interpolation: Iteration {i}"))?;
        }

        console.write_line("While loop:")?;
        let mut counter = 1;
        while counter <= 5 {
            console.write_line(&format!("Iteration {counter}"))?;
            counter += 1;
        }

        // `loop` checks the condition at the bottom, so the body always
        // runs at least once.
        console.write_line("Loop with break (runs at least once):")?;
        let mut do_counter = 1;
        loop {
            console.write_line(&format!("Iteration {do_counter}"))?;
            do_counter += 1;
            if do_counter > 5 {
                break;
            }
        }

        console.write_line("Iterating a collection:")?;
        let color_printing = ["Cyan", "Magenta", "Yellow", "Black"];
        for color in color_printing {
            console.write_line(&format!("Color: {color}"))?;
        }

        console.write_line("Break in loop:")?;
        for i in 1..=10 {
            if i == 6 {
                break;
            }
            console.write_line(&format!("Iteration {i}"))?;
        }

        console.write_line("Continue in loop:")?;
        for i in 1..=5 {
            if i == 3 {
                continue;
            }
            console.write_line(&format!("Iteration {i}"))?;
        }

        console.write_line("Looping through a 1D array:")?;
        let lucky_numbers = [7, 14, 21, 28, 35];
        console.write_line("Using an indexed loop:")?;
        for (i, number) in lucky_numbers.iter().enumerate() {
            console.write_line(&format!("Lucky Number [{i}] = {number}"))?;
        }
        console.write_line("Using a value loop:")?;
        for number in lucky_numbers {
            console.write_line(&format!("Lucky Number = {number}"))?;
        }

        console.write_line("Looping through a 2D array:")?;
        let countries_and_capitals = [
            ["Canada", "Ottawa"],
            ["France", "Paris"],
            ["Brazil", "Brasilia"],
            ["Japan", "Tokyo"],
        ];
        for row in countries_and_capitals {
            let mut line = String::new();
            for cell in row {
                line.push_str(cell);
                line.push('\t');
            }
            console.write_line(line.trim_end())?;
        }

        console.write_line("Loops demo complete.")?;
        Ok(())
    }
}
