use std::fmt;

use super::RecordId;
use crate::errors::Result;
use crate::rules::validation::validate_signup_time;

/// A camper's signup for an activity at a given hour
///
/// A signup has no lifecycle of its own: it is removed whenever its camper
/// or its activity is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    /// Store-assigned identifier, immutable once set
    pub id: RecordId,
    time: i64,
    pub camper_id: RecordId,
    pub activity_id: RecordId,
}

impl Signup {
    /// Build a signup, validating `time`
    ///
    /// The referenced camper and activity are not checked here; the store
    /// rejects dangling references on write.
    ///
    /// # Errors
    /// `InvalidTime` if `time` is not strictly between 0 and 23.
    pub fn try_new(
        id: RecordId,
        time: i64,
        camper_id: RecordId,
        activity_id: RecordId,
    ) -> Result<Self> {
        let time = validate_signup_time(time)?;
        Ok(Self {
            id,
            time,
            camper_id,
            activity_id,
        })
    }

    /// Hour of day (1..=22)
    pub fn time(&self) -> i64 {
        self.time
    }

    /// # Errors
    /// `InvalidTime` if `time` is not strictly between 0 and 23.
    pub fn set_time(&mut self, time: i64) -> Result<()> {
        self.time = validate_signup_time(time)?;
        Ok(())
    }
}

impl fmt::Display for Signup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Signup {}>", self.id)
    }
}
