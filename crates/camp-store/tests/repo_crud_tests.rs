// CRUD behavior of SqliteRepo: validation before SQL, partial updates,
// typed not-found errors

mod common;

use camp_core::ExErrorKind;
use camp_store::SqliteRepo;
use common::{count, seed_camp, setup_test_db};

#[test]
fn test_create_camper_assigns_sequential_ids() {
    let conn = setup_test_db();
    let alex = SqliteRepo::create_camper(&conn, Some("Alex"), 12).unwrap();
    let sam = SqliteRepo::create_camper(&conn, Some("Sam"), 8).unwrap();

    assert_eq!(alex.id, 1);
    assert_eq!(sam.id, 2);
    assert_eq!(sam.age(), 8);
}

#[test]
fn test_camper_validation_rejections() {
    let conn = setup_test_db();

    let cases = [
        (None, 12, ExErrorKind::InvalidName),
        (Some(""), 12, ExErrorKind::InvalidName),
        (Some("Sam"), 19, ExErrorKind::InvalidAge),
        (Some("Kit"), 7, ExErrorKind::InvalidAge),
    ];
    for (name, age, kind) in cases {
        let err = SqliteRepo::create_camper(&conn, name, age).unwrap_err();
        assert_eq!(err.kind(), kind, "{:?}/{}", name, age);
        assert!(err.kind().is_validation());
    }

    assert_eq!(count(&conn, "campers"), 0);
}

#[test]
fn test_signup_time_bounds() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    for time in [0, 23, -1, 24] {
        let err = SqliteRepo::create_signup(&conn, time, seeded.alex, seeded.archery).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidTime);
        assert_eq!(err.field(), Some("time"));
    }
    for time in [1, 22] {
        SqliteRepo::create_signup(&conn, time, seeded.sam, seeded.canoeing).unwrap();
    }

    assert_eq!(count(&conn, "signups"), 5);
}

#[test]
fn test_update_camper_revalidates_supplied_fields() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    let err = SqliteRepo::update_camper(&conn, seeded.alex, Some(""), None).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidName);
    let err = SqliteRepo::update_camper(&conn, seeded.alex, None, Some(30)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidAge);

    let unchanged = SqliteRepo::get_camper(&conn, seeded.alex).unwrap().unwrap();
    assert_eq!((unchanged.name(), unchanged.age()), ("Alex", 12));

    let updated = SqliteRepo::update_camper(&conn, seeded.alex, None, Some(13)).unwrap();
    assert_eq!((updated.name(), updated.age()), ("Alex", 13));
}

#[test]
fn test_update_signup_moves_to_another_activity() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    let updated = SqliteRepo::update_signup(&conn, 1, Some(11), None, Some(seeded.canoeing)).unwrap();
    assert_eq!(updated.time(), 11);
    assert_eq!(updated.camper_id, seeded.alex);
    assert_eq!(updated.activity_id, seeded.canoeing);
}

#[test]
fn test_update_missing_records_is_not_found() {
    let conn = setup_test_db();

    let err = SqliteRepo::update_activity(&conn, 5, Some("Sailing"), None).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);
    assert_eq!(err.entity(), Some("activity"));

    let err = SqliteRepo::update_camper(&conn, 5, Some("Alex"), None).unwrap_err();
    assert_eq!(err.entity(), Some("camper"));

    let err = SqliteRepo::update_signup(&conn, 5, Some(10), None, None).unwrap_err();
    assert_eq!(err.entity(), Some("signup"));
    assert_eq!(err.code(), "ERR_NOT_FOUND");
}

#[test]
fn test_list_in_id_order() {
    let conn = setup_test_db();
    seed_camp(&conn);

    let names: Vec<Option<String>> = SqliteRepo::list_activities(&conn)
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(
        names,
        vec![Some("Archery".to_string()), Some("Canoeing".to_string())]
    );

    let ids: Vec<i64> = SqliteRepo::list_signups(&conn)
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_activity_with_no_fields() {
    let conn = setup_test_db();
    let activity = SqliteRepo::create_activity(&conn, None, None).unwrap();

    let loaded = SqliteRepo::get_activity(&conn, activity.id).unwrap().unwrap();
    assert_eq!(loaded.name, None);
    assert_eq!(loaded.difficulty, None);
}

#[test]
fn test_delete_signup_leaves_parents() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    SqliteRepo::delete_signup(&conn, 1).unwrap();

    assert!(SqliteRepo::get_signup(&conn, 1).unwrap().is_none());
    assert!(SqliteRepo::get_camper(&conn, seeded.alex).unwrap().is_some());
    assert!(SqliteRepo::get_activity(&conn, seeded.archery).unwrap().is_some());
    assert_eq!(count(&conn, "signups"), 2);
}
