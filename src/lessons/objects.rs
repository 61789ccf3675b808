//! Lesson `objects`: structs, methods, and constructors with [`Person`].

use crate::console::Console;
use crate::model::{Person, PersonUpdate};

use super::{Lesson, LessonError};

/// Builds people three ways — default, parameterized, and patched — and
/// shows validation rejecting a bad mutation.
pub struct ObjectsLesson;

impl ObjectsLesson {
    fn show(
        &self,
        console: &mut dyn Console,
        header: &str,
        person: &Person,
    ) -> Result<(), LessonError> {
        console.write_line(header)?;
        console.write_line("= Person Details =")?;
        console.write_line(&person.to_string())?;
        Ok(())
    }
}

impl Lesson for ObjectsLesson {
    fn name(&self) -> &'static str {
        "objects"
    }

    fn title(&self) -> &'static str {
        "Structs and methods with Person"
    }

    fn run(&self, console: &mut dyn Console) -> Result<(), LessonError> {
        console.write_line("= OOP Basics: Structs and Methods =")?;

        // Person 1: start from the defaults, then fill the fields through
        // the setters.
        let mut person1 = Person::default();
        self.show(console, "[Person 1 - Default]", &person1)?;

        person1.set_name("Alex Chow");
        if let Err(error) = person1.set_age(25) {
            console.write_line(&error.to_string())?;
        }
        person1.set_email("alex@example.com");
        self.show(console, "[Person 1 - After Updating]", &person1)?;

        // Person 2: everything supplied at construction time.
        let person2 = Person::new("Sarah Grandson", 30, "sarah@example.com");
        self.show(console, "[Person 2 - Parameterized]", &person2)?;

        // Person 3: capture the info string instead of printing directly.
        let mut person3 = Person::new("Martin Smith", 42, "Martin@company.com");
        console.write_line("[Person 3 - Info String]")?;
        let info = person3.info();
        console.write_line(&info)?;

        // Validation in action: the bad age is rejected and the old value
        // survives.
        console.write_line("[Person 3 - Trying to assign an invalid age]")?;
        if let Err(error) = person3.set_age(-10) {
            console.write_line(&error.to_string())?;
        }
        self.show(console, "[Person 3 - Still Valid]", &person3)?;

        // Patch updates: only the supplied fields change.
        let update = PersonUpdate {
            name: None,
            age: Some(43),
            email: Some("martin@company.com".to_string()),
        };
        if let Err(error) = person3.apply_update(update) {
            console.write_line(&error.to_string())?;
        }
        self.show(console, "[Person 3 - After Patch Update]", &person3)?;

        console.write_line("= OOP Basics Demonstration Complete =")?;
        Ok(())
    }
}
