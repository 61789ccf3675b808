//! The `Person` type: encapsulation basics.
//!
//! Fields are private and every mutation goes through a method, so the one
//! invariant — age is never negative — holds for the lifetime of the value.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when mutating a [`Person`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PersonError {
    /// The age is negative or does not fit a whole number of years.
    #[error("invalid age: {0}, must be a non-negative value")]
    InvalidAge(i64),
}

/// A person with a name, an age, and an email address.
///
/// # Architecture Note
/// Why private fields with accessor methods, instead of `pub` fields?
/// With `pub age: u32` any caller could write any value. Routing writes
/// through [`Person::set_age`] means the validation lives in exactly one
/// place and cannot be bypassed. This is encapsulation — the same idea the
/// [`BankAccount`](crate::model::BankAccount) takes further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
    email: String,
}

/// A partial update to a [`Person`]: only the supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub email: Option<String>,
}

impl Default for Person {
    /// The placeholder person: `"Unknown"`, age 0, `unknown@example.com`.
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            age: 0,
            email: "unknown@example.com".to_string(),
        }
    }
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Sets the age, rejecting negative values.
    ///
    /// The parameter is `i64` on purpose: user input arrives as a signed
    /// number, and the validation happens here rather than at every call
    /// site. On error the previous age is kept.
    ///
    /// # Errors
    /// Returns [`PersonError::InvalidAge`] when `age` is negative or
    /// implausibly large.
    pub fn set_age(&mut self, age: i64) -> Result<(), PersonError> {
        self.age = u32::try_from(age).map_err(|_| PersonError::InvalidAge(age))?;
        Ok(())
    }

    /// Applies a partial update, validating each supplied field.
    ///
    /// # Errors
    /// Returns the first validation failure; fields before it are already
    /// applied, fields after it are untouched.
    pub fn apply_update(&mut self, update: PersonUpdate) -> Result<(), PersonError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(age) = update.age {
            self.set_age(age)?;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        Ok(())
    }

    /// Formatted details about the person, one field per line.
    pub fn info(&self) -> String {
        format!("Name: {}\nAge: {}\nEmail: {}", self.name, self.age, self.email)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.info())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_person_uses_placeholder_values() {
        let person = Person::default();
        assert_eq!(person.name(), "Unknown");
        assert_eq!(person.age(), 0);
        assert_eq!(person.email(), "unknown@example.com");
    }

    #[test]
    fn set_age_rejects_negative_and_keeps_previous_value() {
        let mut person = Person::new("Martin Smith", 42, "martin@company.com");
        let result = person.set_age(-10);
        assert_eq!(result, Err(PersonError::InvalidAge(-10)));
        assert_eq!(person.age(), 42);
    }

    #[test]
    fn set_age_accepts_non_negative_values() {
        let mut person = Person::default();
        person.set_age(25).expect("25 is a valid age");
        assert_eq!(person.age(), 25);
    }

    #[test]
    fn apply_update_changes_only_supplied_fields() {
        let mut person = Person::new("Sarah Grandson", 30, "sarah@example.com");
        person
            .apply_update(PersonUpdate {
                name: None,
                age: Some(31),
                email: Some("sarah.g@example.com".to_string()),
            })
            .expect("update is valid");
        assert_eq!(person.name(), "Sarah Grandson");
        assert_eq!(person.age(), 31);
        assert_eq!(person.email(), "sarah.g@example.com");
    }

    #[test]
    fn apply_update_rejects_invalid_age() {
        let mut person = Person::new("Sarah Grandson", 30, "sarah@example.com");
        let result = person.apply_update(PersonUpdate {
            age: Some(-1),
            ..PersonUpdate::default()
        });
        assert_eq!(result, Err(PersonError::InvalidAge(-1)));
        assert_eq!(person.age(), 30);
    }

    #[test]
    fn info_lists_every_field() {
        let person = Person::new("Alex Chow", 25, "alex@example.com");
        assert_eq!(
            person.info(),
            "Name: Alex Chow\nAge: 25\nEmail: alex@example.com"
        );
    }
}
