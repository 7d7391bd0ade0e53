//! Hydration layer - loads persisted records into an in-memory `Store`
//!
//! The core serialization views operate on a `Store`, so a database is
//! hydrated before any entity is rendered. Parents are loaded before
//! signups so every signup's references resolve.

use crate::errors::Result;
use crate::repo::SqliteRepo;
use camp_core::Store;
use rusqlite::Connection;

/// Load every activity, camper and signup into a fresh `Store`
///
/// # Errors
/// * `Persistence` - if a query fails
/// * `ConstraintViolation` - if a stored signup references a missing parent
///   (only possible when foreign keys were disabled while it was written)
pub fn load_store(conn: &Connection) -> Result<Store> {
    let mut store = Store::new();

    for activity in SqliteRepo::list_activities(conn)? {
        store.insert_activity(activity);
    }
    for camper in SqliteRepo::list_campers(conn)? {
        store.insert_camper(camper);
    }
    for signup in SqliteRepo::list_signups(conn)? {
        store.insert_signup(signup)?;
    }

    tracing::debug!(
        activities = store.list_activities().len(),
        campers = store.list_campers().len(),
        signups = store.list_signups().len(),
        "hydrated store"
    );

    Ok(store)
}
