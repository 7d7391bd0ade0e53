mod common;

use camp_core::ops::{activity_ops, camper_ops, signup_ops};
use camp_core::CampError;
use common::{new_store, seed_camp};

#[test]
fn test_create_signup_time_bounds() {
    let mut store = new_store();
    let seeded = seed_camp(&mut store);

    for time in [1, 12, 22] {
        assert!(signup_ops::create_signup(&mut store, time, seeded.sam, seeded.canoeing).is_ok());
    }
    for time in [-5, 0, 23, 24] {
        let result = signup_ops::create_signup(&mut store, time, seeded.sam, seeded.canoeing);
        assert_eq!(result, Err(CampError::InvalidTime { time }));
    }
}

#[test]
fn test_create_signup_rejects_missing_camper() {
    let mut store = new_store();
    let activity = activity_ops::create_activity(&mut store, None, None).unwrap();

    let result = signup_ops::create_signup(&mut store, 10, 42, activity);
    assert!(matches!(result, Err(CampError::ReferentialIntegrity { .. })));
    assert!(signup_ops::list_signups(&store).is_empty());
}

#[test]
fn test_create_signup_rejects_missing_activity() {
    let mut store = new_store();
    let camper = camper_ops::create_camper(&mut store, Some("Alex"), 12).unwrap();

    let result = signup_ops::create_signup(&mut store, 10, camper, 42);
    assert!(matches!(result, Err(CampError::ReferentialIntegrity { .. })));
}

#[test]
fn test_validation_runs_before_reference_check() {
    let mut store = new_store();
    // Neither parent exists, but the bad time is reported first
    assert_eq!(
        signup_ops::create_signup(&mut store, 0, 1, 1),
        Err(CampError::InvalidTime { time: 0 })
    );
}

#[test]
fn test_duplicate_signups_are_allowed() {
    let mut store = new_store();
    let seeded = seed_camp(&mut store);

    let a = signup_ops::create_signup(&mut store, 9, seeded.alex, seeded.archery).unwrap();
    let b = signup_ops::create_signup(&mut store, 9, seeded.alex, seeded.archery).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_update_signup() {
    let mut store = new_store();
    let seeded = seed_camp(&mut store);
    let id = signup_ops::create_signup(&mut store, 9, seeded.sam, seeded.canoeing).unwrap();

    signup_ops::update_signup(&mut store, id, Some(15), None, Some(seeded.archery)).unwrap();

    let signup = signup_ops::read_signup(&store, id).unwrap();
    assert_eq!(signup.time(), 15);
    assert_eq!(signup.activity_id, seeded.archery);
    assert_eq!(signup.camper_id, seeded.sam);
}

#[test]
fn test_rejected_signup_update_leaves_record_unchanged() {
    let mut store = new_store();
    let seeded = seed_camp(&mut store);
    let id = signup_ops::create_signup(&mut store, 9, seeded.sam, seeded.canoeing).unwrap();

    assert_eq!(
        signup_ops::update_signup(&mut store, id, Some(23), None, None),
        Err(CampError::InvalidTime { time: 23 })
    );
    assert!(matches!(
        signup_ops::update_signup(&mut store, id, Some(11), Some(99), None),
        Err(CampError::ReferentialIntegrity { .. })
    ));

    let signup = signup_ops::read_signup(&store, id).unwrap();
    assert_eq!(signup.time(), 9);
    assert_eq!(signup.camper_id, seeded.sam);
}

#[test]
fn test_delete_signup_only_removes_itself() {
    let mut store = new_store();
    let seeded = seed_camp(&mut store);
    let before = signup_ops::list_signups(&store).len();
    let id = signup_ops::list_signups(&store)[0].id;

    signup_ops::delete_signup(&mut store, id).unwrap();

    assert_eq!(signup_ops::list_signups(&store).len(), before - 1);
    assert!(camper_ops::read_camper(&store, seeded.alex).is_ok());
    assert!(activity_ops::read_activity(&store, seeded.archery).is_ok());
    assert_eq!(
        signup_ops::delete_signup(&mut store, id),
        Err(CampError::SignupNotFound { signup_id: id })
    );
}
