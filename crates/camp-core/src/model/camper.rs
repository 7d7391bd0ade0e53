use std::fmt;

use super::RecordId;
use crate::errors::Result;
use crate::rules::validation::{validate_camper_age, validate_camper_name};

/// A camper enrolled at the camp
///
/// `name` and `age` are private so that every construction and assignment
/// path goes through the validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    /// Store-assigned identifier, immutable once set
    pub id: RecordId,
    name: String,
    age: i64,
}

impl Camper {
    /// Build a camper, validating both fields
    ///
    /// # Errors
    /// * `InvalidName` - if `name` is `None` or empty
    /// * `InvalidAge` - if `age` is outside 8..=18
    pub fn try_new(id: RecordId, name: Option<&str>, age: i64) -> Result<Self> {
        let name = validate_camper_name(name)?.to_string();
        let age = validate_camper_age(age)?;
        Ok(Self { id, name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    /// Assign a new name; the camper is left untouched on error
    ///
    /// # Errors
    /// `InvalidName` if the name is empty.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        self.name = validate_camper_name(Some(name))?.to_string();
        Ok(())
    }

    /// Assign a new age; the camper is left untouched on error
    ///
    /// # Errors
    /// `InvalidAge` if the age is outside 8..=18.
    pub fn set_age(&mut self, age: i64) -> Result<()> {
        self.age = validate_camper_age(age)?;
        Ok(())
    }
}

impl fmt::Display for Camper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Camper {}: {}>", self.id, self.name)
    }
}
