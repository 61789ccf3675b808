//! # The Curriculum
//!
//! The orchestration layer: lessons don't run themselves. [`Curriculum`]
//! owns the ordered lesson set, finds lessons by name, and runs them with
//! structured logging around each one.

pub mod tracing;

use ::tracing::info;
use thiserror::Error;

use crate::console::Console;
use crate::lessons::{
    bank::BankLesson, basics::HelloLesson, casting::CastingLesson,
    collections::CollectionsLesson, control_flow::ControlFlowLesson, loops::LoopsLesson,
    methods::MethodsLesson, objects::ObjectsLesson, switching::SwitchLesson, Lesson,
    LessonError,
};

/// Errors that can occur when selecting or running lessons.
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// No lesson registered under that name.
    #[error("unknown lesson: {0:?} (use `list` to see the available lessons)")]
    UnknownLesson(String),

    /// A lesson failed while running.
    #[error(transparent)]
    Lesson(#[from] LessonError),
}

/// The ordered set of lessons.
///
/// # Example
/// ```
/// use oop_recipe::console::mock::MockConsole;
/// use oop_recipe::curriculum::Curriculum;
///
/// let curriculum = Curriculum::standard();
/// let mut console = MockConsole::new();
/// curriculum.run("loops", &mut console)?;
/// assert!(console.transcript().contains("Loops demo complete."));
/// # Ok::<(), oop_recipe::curriculum::CurriculumError>(())
/// ```
pub struct Curriculum {
    lessons: Vec<Box<dyn Lesson>>,
}

impl Curriculum {
    /// The standard nine-lesson sequence, in teaching order.
    pub fn standard() -> Self {
        Self {
            lessons: vec![
                Box::new(HelloLesson),
                Box::new(CastingLesson),
                Box::new(ControlFlowLesson),
                Box::new(SwitchLesson),
                Box::new(LoopsLesson),
                Box::new(CollectionsLesson),
                Box::new(MethodsLesson),
                Box::new(ObjectsLesson),
                Box::new(BankLesson),
            ],
        }
    }

    /// All registered lessons, in order.
    pub fn lessons(&self) -> &[Box<dyn Lesson>] {
        &self.lessons
    }

    /// Looks a lesson up by its short name.
    pub fn find(&self, name: &str) -> Option<&dyn Lesson> {
        self.lessons
            .iter()
            .find(|lesson| lesson.name() == name)
            .map(|lesson| &**lesson)
    }

    /// Writes the lesson listing to the console.
    pub fn write_listing(&self, console: &mut dyn Console) -> Result<(), CurriculumError> {
        for lesson in &self.lessons {
            console
                .write_line(&format!("{:<14} {}", lesson.name(), lesson.title()))
                .map_err(LessonError::from)?;
        }
        Ok(())
    }

    /// Runs a single lesson by name.
    ///
    /// # Errors
    /// Returns [`CurriculumError::UnknownLesson`] when the name does not
    /// match any registered lesson.
    pub fn run(&self, name: &str, console: &mut dyn Console) -> Result<(), CurriculumError> {
        let lesson = self
            .find(name)
            .ok_or_else(|| CurriculumError::UnknownLesson(name.to_string()))?;
        self.run_lesson(lesson, console)
    }

    /// Runs every lesson in teaching order, with a blank line between them.
    pub fn run_all(&self, console: &mut dyn Console) -> Result<(), CurriculumError> {
        for (i, lesson) in self.lessons.iter().enumerate() {
            if i > 0 {
                console.write_line("").map_err(LessonError::from)?;
            }
            self.run_lesson(lesson.as_ref(), console)?;
        }
        Ok(())
    }

    fn run_lesson(
        &self,
        lesson: &dyn Lesson,
        console: &mut dyn Console,
    ) -> Result<(), CurriculumError> {
        info!(lesson = lesson.name(), title = lesson.title(), "starting lesson");
        lesson.run(console)?;
        info!(lesson = lesson.name(), "lesson complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::mock::MockConsole;

    #[test]
    fn standard_curriculum_has_the_nine_lessons_in_order() {
        let curriculum = Curriculum::standard();
        let names: Vec<&str> = curriculum.lessons().iter().map(|l| l.name()).collect();
        assert_eq!(
            names,
            [
                "hello",
                "casting",
                "control-flow",
                "switch",
                "loops",
                "lists",
                "methods",
                "objects",
                "bank"
            ]
        );
    }

    #[test]
    fn unknown_lesson_names_are_rejected() {
        let curriculum = Curriculum::standard();
        let mut console = MockConsole::new();
        let result = curriculum.run("recursion", &mut console);
        assert!(matches!(
            result,
            Err(CurriculumError::UnknownLesson(name)) if name == "recursion"
        ));
    }

    #[test]
    fn listing_names_every_lesson() {
        let curriculum = Curriculum::standard();
        let mut console = MockConsole::new();
        curriculum
            .write_listing(&mut console)
            .expect("listing should succeed");
        for lesson in curriculum.lessons() {
            console.assert_printed(lesson.name());
            console.assert_printed(lesson.title());
        }
    }
}
