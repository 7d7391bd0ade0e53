//! External representations
//!
//! Activity, Camper and Signup reference each other, so a naive nested
//! conversion of the object graph never terminates. Each conversion here
//! uses an explicit view struct that lists the fields it carries, cutting
//! the back-reference in every direction:
//!
//! - an Activity's signups carry their camper, not their activity
//! - a Camper's signups carry their activity, not their camper
//! - a Signup carries its activity and camper without their signups

pub mod views;

pub use views::{
    activity_view, camper_summary, camper_view, signup_view, ActivitySignupView,
    ActivitySummary, ActivityView, CamperSignupView, CamperSummary, CamperView, SignupView,
};

use serde::Serialize;

use crate::errors::Result;
use crate::model::RecordId;
use crate::ops::Store;

/// Convert a view into a nested JSON mapping
///
/// # Errors
/// `Serialization` if serde_json rejects the value.
pub fn to_dict<T: Serialize>(view: &T) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(view)?)
}

/// Nested mapping for an Activity and its signups
///
/// # Errors
/// `ActivityNotFound` if the activity does not exist.
pub fn serialize_activity(store: &Store, id: RecordId) -> Result<serde_json::Value> {
    to_dict(&activity_view(store, id)?)
}

/// Nested mapping for a Camper
///
/// With `without_signups` the `signups` key is omitted entirely.
///
/// # Errors
/// `CamperNotFound` if the camper does not exist.
pub fn serialize_camper(
    store: &Store,
    id: RecordId,
    without_signups: bool,
) -> Result<serde_json::Value> {
    if without_signups {
        to_dict(&camper_summary(store, id)?)
    } else {
        to_dict(&camper_view(store, id)?)
    }
}

/// Nested mapping for a Signup with its camper and activity
///
/// # Errors
/// `SignupNotFound` if the signup does not exist.
pub fn serialize_signup(store: &Store, id: RecordId) -> Result<serde_json::Value> {
    to_dict(&signup_view(store, id)?)
}
