use super::store::Store;
use crate::errors::Result;
use crate::model::{Activity, RecordId};

/// Create a new Activity
///
/// Activities have no field invariants, so this cannot fail on input.
///
/// # Returns
/// The store-assigned id of the new Activity
///
/// # Errors
/// None today; `Result` keeps the signature aligned with the other ops.
pub fn create_activity(
    store: &mut Store,
    name: Option<String>,
    difficulty: Option<i64>,
) -> Result<RecordId> {
    let id = store.next_activity_id();
    store.insert_activity(Activity::new(id, name, difficulty));
    Ok(id)
}

/// Read an Activity by id
///
/// # Errors
/// `ActivityNotFound` if it doesn't exist.
pub fn read_activity(store: &Store, id: RecordId) -> Result<&Activity> {
    store.get_activity(id)
}

pub fn list_activities(store: &Store) -> Vec<&Activity> {
    store.list_activities()
}

/// Update an Activity's name and/or difficulty
///
/// Fields passed as `None` keep their current value.
///
/// # Errors
/// `ActivityNotFound` if it doesn't exist.
pub fn update_activity(
    store: &mut Store,
    id: RecordId,
    name: Option<String>,
    difficulty: Option<i64>,
) -> Result<()> {
    let activity = store.get_activity_mut(id)?;

    if let Some(new_name) = name {
        activity.name = Some(new_name);
    }
    if let Some(new_difficulty) = difficulty {
        activity.difficulty = Some(new_difficulty);
    }

    Ok(())
}

/// Delete an Activity and every Signup that references it
///
/// # Returns
/// The number of signups removed along with the activity
///
/// # Errors
/// `ActivityNotFound` if it doesn't exist; nothing is removed.
pub fn delete_activity(store: &mut Store, id: RecordId) -> Result<usize> {
    let (_, removed) = store.remove_activity(id)?;
    Ok(removed.len())
}
