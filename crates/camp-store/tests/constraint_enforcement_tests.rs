// Referential-integrity failures surface from SQLite as constraint
// violations, and the CHECK constraints reject writes that bypass the repo

mod common;

use camp_core::ExErrorKind;
use camp_store::{errors::from_rusqlite, SqliteRepo};
use common::{count, seed_camp, setup_test_db};

#[test]
fn test_signup_for_missing_camper_is_constraint_violation() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    let err = SqliteRepo::create_signup(&conn, 10, 99, seeded.archery).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
    assert_eq!(err.op(), Some("create_signup"));
    assert_eq!(count(&conn, "signups"), 3);
}

#[test]
fn test_signup_update_to_missing_activity_is_rejected() {
    let conn = setup_test_db();
    seed_camp(&conn);

    let err = SqliteRepo::update_signup(&conn, 1, None, None, Some(42)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);

    let unchanged = SqliteRepo::get_signup(&conn, 1).unwrap().unwrap();
    assert_eq!(unchanged.activity_id, 1);
}

#[test]
fn test_check_constraints_reject_raw_writes() {
    let conn = setup_test_db();
    let seeded = seed_camp(&conn);

    let raw_writes = [
        "INSERT INTO campers (name, age) VALUES ('Old', 40)".to_string(),
        "INSERT INTO campers (name, age) VALUES ('', 12)".to_string(),
        format!(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (23, {}, {})",
            seeded.alex, seeded.archery
        ),
        format!(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (0, {}, {})",
            seeded.alex, seeded.archery
        ),
        "INSERT INTO campers (name, age) VALUES (NULL, 12)".to_string(),
    ];

    for sql in &raw_writes {
        let err = conn.execute(sql, []).unwrap_err();
        assert_eq!(
            from_rusqlite(err).kind(),
            ExErrorKind::ConstraintViolation,
            "{}",
            sql
        );
    }

    assert_eq!(count(&conn, "campers"), 2);
    assert_eq!(count(&conn, "signups"), 3);
}
