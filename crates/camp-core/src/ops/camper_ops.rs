use super::store::Store;
use crate::errors::Result;
use crate::model::{Camper, RecordId};
use crate::rules::validation::{validate_camper_age, validate_camper_name};

/// Create a new Camper
///
/// # Arguments
/// * `name` - required, must be non-empty
/// * `age` - must be within 8..=18
///
/// # Returns
/// The store-assigned id of the new Camper
///
/// # Errors
/// * `InvalidName` - if name is absent or empty
/// * `InvalidAge` - if age is out of range
pub fn create_camper(store: &mut Store, name: Option<&str>, age: i64) -> Result<RecordId> {
    // Validate before allocating so rejected writes don't burn ids
    validate_camper_name(name)?;
    validate_camper_age(age)?;

    let id = store.next_camper_id();
    store.insert_camper(Camper::try_new(id, name, age)?);
    Ok(id)
}

/// Read a Camper by id
///
/// # Errors
/// `CamperNotFound` if it doesn't exist.
pub fn read_camper(store: &Store, id: RecordId) -> Result<&Camper> {
    store.get_camper(id)
}

pub fn list_campers(store: &Store) -> Vec<&Camper> {
    store.list_campers()
}

/// Update a Camper's name and/or age
///
/// Every supplied field is validated before anything is assigned, so a
/// rejected update leaves the camper unchanged.
///
/// # Errors
/// * `CamperNotFound` - if it doesn't exist
/// * `InvalidName` - if name is provided but empty
/// * `InvalidAge` - if age is provided but out of range
pub fn update_camper(
    store: &mut Store,
    id: RecordId,
    name: Option<&str>,
    age: Option<i64>,
) -> Result<()> {
    if let Some(n) = name {
        validate_camper_name(Some(n))?;
    }
    if let Some(a) = age {
        validate_camper_age(a)?;
    }

    let camper = store.get_camper_mut(id)?;
    if let Some(n) = name {
        camper.set_name(n)?;
    }
    if let Some(a) = age {
        camper.set_age(a)?;
    }

    Ok(())
}

/// Delete a Camper and every Signup that references it
///
/// # Returns
/// The number of signups removed along with the camper
///
/// # Errors
/// `CamperNotFound` if it doesn't exist; nothing is removed.
pub fn delete_camper(store: &mut Store, id: RecordId) -> Result<usize> {
    let (_, removed) = store.remove_camper(id)?;
    Ok(removed.len())
}
