use serde::Serialize;

use crate::errors::Result;
use crate::model::{Activity, Camper, RecordId, Signup};
use crate::ops::Store;

/// Activity fields without its signups
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub id: RecordId,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
}

/// Camper fields without its signups
///
/// Doubles as the secondary Camper representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSummary {
    pub id: RecordId,
    pub name: String,
    pub age: i64,
}

/// A signup as seen from its activity (no `activity` key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySignupView {
    pub id: RecordId,
    pub time: i64,
    pub camper_id: RecordId,
    pub activity_id: RecordId,
    pub camper: CamperSummary,
}

/// A signup as seen from its camper (no `camper` key)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSignupView {
    pub id: RecordId,
    pub time: i64,
    pub camper_id: RecordId,
    pub activity_id: RecordId,
    pub activity: ActivitySummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub id: RecordId,
    pub name: Option<String>,
    pub difficulty: Option<i64>,
    pub signups: Vec<ActivitySignupView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperView {
    pub id: RecordId,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignupView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupView {
    pub id: RecordId,
    pub time: i64,
    pub camper_id: RecordId,
    pub activity_id: RecordId,
    pub activity: ActivitySummary,
    pub camper: CamperSummary,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        }
    }
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id,
            name: camper.name().to_string(),
            age: camper.age(),
        }
    }
}

/// Build the external form of an Activity
///
/// # Errors
/// * `ActivityNotFound` - if the activity does not exist
/// * `CamperNotFound` - if a signup points at a missing camper (corrupt store)
pub fn activity_view(store: &Store, id: RecordId) -> Result<ActivityView> {
    let activity = store.get_activity(id)?;

    let signups = store
        .signups_for_activity(id)
        .into_iter()
        .map(|signup| {
            let camper = store.get_camper(signup.camper_id)?;
            Ok(ActivitySignupView {
                id: signup.id,
                time: signup.time(),
                camper_id: signup.camper_id,
                activity_id: signup.activity_id,
                camper: camper.into(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ActivityView {
        id: activity.id,
        name: activity.name.clone(),
        difficulty: activity.difficulty,
        signups,
    })
}

/// Build the external form of a Camper, including its signups
///
/// # Errors
/// * `CamperNotFound` - if the camper does not exist
/// * `ActivityNotFound` - if a signup points at a missing activity (corrupt store)
pub fn camper_view(store: &Store, id: RecordId) -> Result<CamperView> {
    let camper = store.get_camper(id)?;

    let signups = store
        .signups_for_camper(id)
        .into_iter()
        .map(|signup| {
            let activity = store.get_activity(signup.activity_id)?;
            Ok(CamperSignupView {
                id: signup.id,
                time: signup.time(),
                camper_id: signup.camper_id,
                activity_id: signup.activity_id,
                activity: activity.into(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CamperView {
        id: camper.id,
        name: camper.name().to_string(),
        age: camper.age(),
        signups,
    })
}

/// Build the Camper representation without signups
///
/// # Errors
/// `CamperNotFound` if the camper does not exist.
pub fn camper_summary(store: &Store, id: RecordId) -> Result<CamperSummary> {
    Ok(store.get_camper(id)?.into())
}

/// Build the external form of a Signup
///
/// # Errors
/// * `SignupNotFound` - if the signup does not exist
/// * `CamperNotFound` / `ActivityNotFound` - if a parent is missing (corrupt store)
pub fn signup_view(store: &Store, id: RecordId) -> Result<SignupView> {
    let signup: &Signup = store.get_signup(id)?;
    let activity = store.get_activity(signup.activity_id)?;
    let camper = store.get_camper(signup.camper_id)?;

    Ok(SignupView {
        id: signup.id,
        time: signup.time(),
        camper_id: signup.camper_id,
        activity_id: signup.activity_id,
        activity: activity.into(),
        camper: camper.into(),
    })
}
