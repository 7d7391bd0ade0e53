use super::store::Store;
use crate::errors::Result;
use crate::model::{RecordId, Signup};
use crate::rules::validation::validate_signup_time;

/// Sign a camper up for an activity
///
/// # Returns
/// The store-assigned id of the new Signup
///
/// # Errors
/// * `InvalidTime` - if time is not strictly between 0 and 23
/// * `ReferentialIntegrity` - if the camper or activity does not exist
pub fn create_signup(
    store: &mut Store,
    time: i64,
    camper_id: RecordId,
    activity_id: RecordId,
) -> Result<RecordId> {
    validate_signup_time(time)?;
    // Rejected writes must not burn ids
    store.check_signup_refs(camper_id, activity_id)?;

    let id = store.next_signup_id();
    store.insert_signup(Signup::try_new(id, time, camper_id, activity_id)?)?;
    Ok(id)
}

/// Read a Signup by id
///
/// # Errors
/// `SignupNotFound` if it doesn't exist.
pub fn read_signup(store: &Store, id: RecordId) -> Result<&Signup> {
    store.get_signup(id)
}

pub fn list_signups(store: &Store) -> Vec<&Signup> {
    store.list_signups()
}

/// Update a Signup's time and/or references
///
/// The updated record is built and validated in full before it replaces the
/// stored one.
///
/// # Errors
/// * `SignupNotFound` - if it doesn't exist
/// * `InvalidTime` - if time is provided but out of range
/// * `ReferentialIntegrity` - if a new reference points at a missing record
pub fn update_signup(
    store: &mut Store,
    id: RecordId,
    time: Option<i64>,
    camper_id: Option<RecordId>,
    activity_id: Option<RecordId>,
) -> Result<()> {
    let mut updated = store.get_signup(id)?.clone();

    if let Some(t) = time {
        updated.set_time(t)?;
    }
    if let Some(c) = camper_id {
        updated.camper_id = c;
    }
    if let Some(a) = activity_id {
        updated.activity_id = a;
    }

    store.insert_signup(updated)
}

/// Delete a single Signup
///
/// # Errors
/// `SignupNotFound` if it doesn't exist.
pub fn delete_signup(store: &mut Store, id: RecordId) -> Result<()> {
    store.remove_signup(id)?;
    Ok(())
}
