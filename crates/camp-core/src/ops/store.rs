use std::collections::BTreeMap;

use crate::errors::{CampError, Result};
use crate::model::{Activity, Camper, RecordId, Signup};

/// In-memory record store for activities, campers and signups
///
/// Tables are `BTreeMap`s keyed by id so every listing comes out in id order.
/// The store owns referential integrity: a signup can only be written when
/// its camper and activity exist, and removing either parent removes the
/// signups that depend on it. Not thread-safe; designed for single-caller use.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub(crate) activities: BTreeMap<RecordId, Activity>,
    pub(crate) campers: BTreeMap<RecordId, Camper>,
    pub(crate) signups: BTreeMap<RecordId, Signup>,
    last_activity_id: RecordId,
    last_camper_id: RecordId,
    last_signup_id: RecordId,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Id allocation =====

    pub(crate) fn next_activity_id(&mut self) -> RecordId {
        self.last_activity_id += 1;
        self.last_activity_id
    }

    pub(crate) fn next_camper_id(&mut self) -> RecordId {
        self.last_camper_id += 1;
        self.last_camper_id
    }

    pub(crate) fn next_signup_id(&mut self) -> RecordId {
        self.last_signup_id += 1;
        self.last_signup_id
    }

    // ===== Lookups =====

    /// # Errors
    /// `ActivityNotFound` if no activity has this id.
    pub fn get_activity(&self, id: RecordId) -> Result<&Activity> {
        self.activities
            .get(&id)
            .ok_or(CampError::ActivityNotFound { activity_id: id })
    }

    /// # Errors
    /// `ActivityNotFound` if no activity has this id.
    pub fn get_activity_mut(&mut self, id: RecordId) -> Result<&mut Activity> {
        self.activities
            .get_mut(&id)
            .ok_or(CampError::ActivityNotFound { activity_id: id })
    }

    /// # Errors
    /// `CamperNotFound` if no camper has this id.
    pub fn get_camper(&self, id: RecordId) -> Result<&Camper> {
        self.campers
            .get(&id)
            .ok_or(CampError::CamperNotFound { camper_id: id })
    }

    /// # Errors
    /// `CamperNotFound` if no camper has this id.
    pub fn get_camper_mut(&mut self, id: RecordId) -> Result<&mut Camper> {
        self.campers
            .get_mut(&id)
            .ok_or(CampError::CamperNotFound { camper_id: id })
    }

    /// # Errors
    /// `SignupNotFound` if no signup has this id.
    pub fn get_signup(&self, id: RecordId) -> Result<&Signup> {
        self.signups
            .get(&id)
            .ok_or(CampError::SignupNotFound { signup_id: id })
    }

    pub fn list_activities(&self) -> Vec<&Activity> {
        self.activities.values().collect()
    }

    pub fn list_campers(&self) -> Vec<&Camper> {
        self.campers.values().collect()
    }

    pub fn list_signups(&self) -> Vec<&Signup> {
        self.signups.values().collect()
    }

    /// Signups owned by an activity, in id order
    pub fn signups_for_activity(&self, activity_id: RecordId) -> Vec<&Signup> {
        self.signups
            .values()
            .filter(|s| s.activity_id == activity_id)
            .collect()
    }

    /// Signups owned by a camper, in id order
    pub fn signups_for_camper(&self, camper_id: RecordId) -> Vec<&Signup> {
        self.signups
            .values()
            .filter(|s| s.camper_id == camper_id)
            .collect()
    }

    // ===== Writes =====

    /// Insert or replace an activity
    ///
    /// Used by the CRUD ops and by hydration, which supplies ids assigned by
    /// the database; the id counter is advanced past any supplied id.
    pub fn insert_activity(&mut self, activity: Activity) {
        self.last_activity_id = self.last_activity_id.max(activity.id);
        self.activities.insert(activity.id, activity);
    }

    /// Insert or replace a camper (see [`Store::insert_activity`])
    pub fn insert_camper(&mut self, camper: Camper) {
        self.last_camper_id = self.last_camper_id.max(camper.id);
        self.campers.insert(camper.id, camper);
    }

    /// Insert or replace a signup
    ///
    /// # Errors
    /// `ReferentialIntegrity` if the referenced camper or activity does not
    /// exist. The store is unchanged on error.
    pub fn insert_signup(&mut self, signup: Signup) -> Result<()> {
        self.check_signup_refs(signup.camper_id, signup.activity_id)?;
        self.last_signup_id = self.last_signup_id.max(signup.id);
        self.signups.insert(signup.id, signup);
        Ok(())
    }

    pub(crate) fn check_signup_refs(
        &self,
        camper_id: RecordId,
        activity_id: RecordId,
    ) -> Result<()> {
        if !self.campers.contains_key(&camper_id) {
            return Err(CampError::ReferentialIntegrity {
                reason: format!("signup references missing camper {}", camper_id),
            });
        }
        if !self.activities.contains_key(&activity_id) {
            return Err(CampError::ReferentialIntegrity {
                reason: format!("signup references missing activity {}", activity_id),
            });
        }
        Ok(())
    }

    /// Remove an activity together with every signup referencing it
    ///
    /// Returns the removed activity and its removed signups.
    ///
    /// # Errors
    /// `ActivityNotFound` if no activity has this id; nothing is removed.
    pub fn remove_activity(&mut self, id: RecordId) -> Result<(Activity, Vec<Signup>)> {
        let activity = self
            .activities
            .remove(&id)
            .ok_or(CampError::ActivityNotFound { activity_id: id })?;
        let removed = self.drain_signups(|s| s.activity_id == id);
        Ok((activity, removed))
    }

    /// Remove a camper together with every signup referencing it
    ///
    /// # Errors
    /// `CamperNotFound` if no camper has this id; nothing is removed.
    pub fn remove_camper(&mut self, id: RecordId) -> Result<(Camper, Vec<Signup>)> {
        let camper = self
            .campers
            .remove(&id)
            .ok_or(CampError::CamperNotFound { camper_id: id })?;
        let removed = self.drain_signups(|s| s.camper_id == id);
        Ok((camper, removed))
    }

    /// # Errors
    /// `SignupNotFound` if no signup has this id.
    pub fn remove_signup(&mut self, id: RecordId) -> Result<Signup> {
        self.signups
            .remove(&id)
            .ok_or(CampError::SignupNotFound { signup_id: id })
    }

    fn drain_signups<F>(&mut self, owned: F) -> Vec<Signup>
    where
        F: Fn(&Signup) -> bool,
    {
        let ids: Vec<RecordId> = self
            .signups
            .values()
            .filter(|s| owned(s))
            .map(|s| s.id)
            .collect();
        ids.into_iter()
            .filter_map(|id| self.signups.remove(&id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Store {
        let mut store = Store::new();
        store.insert_activity(Activity::new(1, Some("Archery".to_string()), Some(2)));
        store.insert_camper(Camper::try_new(1, Some("Alex"), 12).unwrap());
        store
    }

    #[test]
    fn test_new_store() {
        let store = Store::new();
        assert!(store.list_activities().is_empty());
        assert!(store.list_campers().is_empty());
        assert!(store.list_signups().is_empty());
    }

    #[test]
    fn test_insert_signup_rejects_dangling_refs() {
        let mut store = seeded();

        let missing_camper = Signup::try_new(1, 10, 99, 1).unwrap();
        assert!(matches!(
            store.insert_signup(missing_camper),
            Err(CampError::ReferentialIntegrity { .. })
        ));

        let missing_activity = Signup::try_new(1, 10, 1, 99).unwrap();
        assert!(matches!(
            store.insert_signup(missing_activity),
            Err(CampError::ReferentialIntegrity { .. })
        ));

        assert!(store.list_signups().is_empty());
    }

    #[test]
    fn test_hydrated_ids_advance_counter() {
        let mut store = Store::new();
        store.insert_activity(Activity::new(7, None, None));
        assert_eq!(store.next_activity_id(), 8);
    }

    #[test]
    fn test_remove_activity_cascades() {
        let mut store = seeded();
        store.insert_activity(Activity::new(2, None, None));
        store.insert_signup(Signup::try_new(1, 9, 1, 1).unwrap()).unwrap();
        store.insert_signup(Signup::try_new(2, 10, 1, 1).unwrap()).unwrap();
        store.insert_signup(Signup::try_new(3, 11, 1, 2).unwrap()).unwrap();

        let (activity, removed) = store.remove_activity(1).unwrap();
        assert_eq!(activity.id, 1);
        assert_eq!(removed.len(), 2);
        assert!(store.signups_for_activity(1).is_empty());
        assert_eq!(store.list_signups().len(), 1);
    }

    #[test]
    fn test_remove_missing_camper_is_not_found() {
        let mut store = seeded();
        assert_eq!(
            store.remove_camper(5).unwrap_err(),
            CampError::CamperNotFound { camper_id: 5 }
        );
        assert_eq!(store.list_campers().len(), 1);
    }
}
