use std::fmt;

use super::RecordId;

/// An activity campers can sign up for
///
/// Activities carry no field invariants: both `name` and `difficulty` are
/// optional. An Activity owns its signups; removing it removes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Store-assigned identifier, immutable once set
    pub id: RecordId,

    pub name: Option<String>,

    /// Free-form difficulty rating
    pub difficulty: Option<i64>,
}

impl Activity {
    pub fn new(id: RecordId, name: Option<String>, difficulty: Option<i64>) -> Self {
        Self {
            id,
            name,
            difficulty,
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "<Activity {}: {}>", self.id, name),
            None => write!(f, "<Activity {}: None>", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let activity = Activity::new(1, Some("Archery".to_string()), Some(2));
        assert_eq!(activity.to_string(), "<Activity 1: Archery>");

        let unnamed = Activity::new(2, None, None);
        assert_eq!(unnamed.to_string(), "<Activity 2: None>");
    }
}
