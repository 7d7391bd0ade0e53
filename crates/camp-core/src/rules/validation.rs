//! Field validators
//!
//! Every create and update path calls these before a write is accepted.
//! Each returns the accepted value so callers can assign it directly.

use std::ops::RangeInclusive;

use crate::errors::{CampError, Result};

/// Accepted camper ages
pub const CAMPER_AGE_RANGE: RangeInclusive<i64> = 8..=18;

/// Accepted signup hours: strictly between 0 and 23
pub const SIGNUP_TIME_RANGE: RangeInclusive<i64> = 1..=22;

/// Validate a camper name
///
/// Rejects an absent or empty name. Any non-empty string is accepted as-is,
/// including whitespace-only names.
///
/// # Errors
/// `InvalidName` if `name` is `None` or `""`.
pub fn validate_camper_name(name: Option<&str>) -> Result<&str> {
    match name {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(CampError::InvalidName),
    }
}

/// Validate a camper age (8..=18 inclusive)
///
/// # Errors
/// `InvalidAge` if `age` is outside the range.
pub fn validate_camper_age(age: i64) -> Result<i64> {
    if CAMPER_AGE_RANGE.contains(&age) {
        Ok(age)
    } else {
        Err(CampError::InvalidAge { age })
    }
}

/// Validate a signup hour (0 < time < 23)
///
/// # Errors
/// `InvalidTime` if `time` is 0, 23 or beyond either bound.
pub fn validate_signup_time(time: i64) -> Result<i64> {
    if SIGNUP_TIME_RANGE.contains(&time) {
        Ok(time)
    } else {
        Err(CampError::InvalidTime { time })
    }
}
