#![allow(dead_code)]

use camp_core::RecordId;
use camp_store::{db, migrations::apply_migrations, SqliteRepo};
use rusqlite::Connection;

pub fn setup_test_db() -> Connection {
    let mut conn = db::open_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    conn
}

pub struct Seeded {
    pub archery: RecordId,
    pub canoeing: RecordId,
    pub alex: RecordId,
    pub sam: RecordId,
}

/// Two activities, two campers, three signups:
/// alex-archery@9, alex-canoeing@14, sam-archery@10
pub fn seed_camp(conn: &Connection) -> Seeded {
    let archery = SqliteRepo::create_activity(conn, Some("Archery"), Some(2))
        .unwrap()
        .id;
    let canoeing = SqliteRepo::create_activity(conn, Some("Canoeing"), Some(3))
        .unwrap()
        .id;
    let alex = SqliteRepo::create_camper(conn, Some("Alex"), 12).unwrap().id;
    let sam = SqliteRepo::create_camper(conn, Some("Sam"), 15).unwrap().id;

    SqliteRepo::create_signup(conn, 9, alex, archery).unwrap();
    SqliteRepo::create_signup(conn, 14, alex, canoeing).unwrap();
    SqliteRepo::create_signup(conn, 10, sam, archery).unwrap();

    Seeded {
        archery,
        canoeing,
        alex,
        sam,
    }
}

pub fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}
