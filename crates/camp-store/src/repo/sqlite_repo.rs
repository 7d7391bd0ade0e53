//! SQLite repository implementation
//!
//! CRUD for activities, campers and signups. Field validation runs in Rust
//! before any SQL is issued; the schema's CHECK and foreign-key constraints
//! back it up for writes that bypass this repository.

use std::time::Instant;

use crate::errors::{from_rusqlite, not_found, Result};
use camp_core::errors::{CampError, ExError};
use camp_core::rules::validation::{
    validate_camper_age, validate_camper_name, validate_signup_time,
};
use camp_core::{log_op_end, log_op_error, log_op_start};
use camp_core::{Activity, Camper, RecordId, Signup};
use rusqlite::{Connection, OptionalExtension, Row};

/// SQLite repository for the camp records
pub struct SqliteRepo;

impl SqliteRepo {
    // ===== Activities =====

    /// Insert a new activity and return it with its assigned id
    ///
    /// # Errors
    /// `Persistence` if the insert fails.
    pub fn create_activity(
        conn: &Connection,
        name: Option<&str>,
        difficulty: Option<i64>,
    ) -> Result<Activity> {
        const OP: &str = "create_activity";
        instrumented(OP, || {
            conn.execute(
                "INSERT INTO activities (name, difficulty) VALUES (?1, ?2)",
                rusqlite::params![name, difficulty],
            )
            .map_err(|e| from_rusqlite(e).with_op(OP))?;

            Ok(Activity::new(
                conn.last_insert_rowid(),
                name.map(str::to_string),
                difficulty,
            ))
        })
    }

    /// Get an activity by id; `None` if it does not exist
    ///
    /// # Errors
    /// `Persistence` if the query fails.
    pub fn get_activity(conn: &Connection, id: RecordId) -> Result<Option<Activity>> {
        conn.query_row(
            "SELECT id, name, difficulty FROM activities WHERE id = ?",
            [id],
            activity_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// All activities in id order
    ///
    /// # Errors
    /// `Persistence` if the query fails.
    pub fn list_activities(conn: &Connection) -> Result<Vec<Activity>> {
        let mut stmt = conn
            .prepare("SELECT id, name, difficulty FROM activities ORDER BY id")
            .map_err(from_rusqlite)?;
        let activities = stmt
            .query_map([], activity_from_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        Ok(activities)
    }

    /// Replace the supplied fields of an activity; omitted fields are kept
    ///
    /// # Errors
    /// `NotFound` if no activity has this id.
    pub fn update_activity(
        conn: &Connection,
        id: RecordId,
        name: Option<&str>,
        difficulty: Option<i64>,
    ) -> Result<Activity> {
        const OP: &str = "update_activity";
        instrumented(OP, || {
            let updated = conn
                .execute(
                    "UPDATE activities
                     SET name = COALESCE(?2, name), difficulty = COALESCE(?3, difficulty)
                     WHERE id = ?1",
                    rusqlite::params![id, name, difficulty],
                )
                .map_err(|e| from_rusqlite(e).with_op(OP))?;
            if updated == 0 {
                return Err(not_found(OP, "activity", id));
            }

            Self::get_activity(conn, id)?.ok_or_else(|| not_found(OP, "activity", id))
        })
    }

    /// Delete an activity and every signup referencing it
    ///
    /// Parent and dependents are removed in one transaction. Returns the
    /// number of signups removed by the cascade.
    ///
    /// # Errors
    /// `NotFound` if no activity has this id; nothing is removed.
    pub fn delete_activity(conn: &mut Connection, id: RecordId) -> Result<usize> {
        delete_with_cascade(conn, Parent::Activity, id)
    }

    // ===== Campers =====

    /// Validate and insert a new camper
    ///
    /// # Errors
    /// * `InvalidName` - if `name` is absent or empty
    /// * `InvalidAge` - if `age` is outside 8..=18
    pub fn create_camper(conn: &Connection, name: Option<&str>, age: i64) -> Result<Camper> {
        const OP: &str = "create_camper";
        instrumented(OP, || {
            let name = validate_camper_name(name).map_err(|e| rejected(OP, e))?;
            let age = validate_camper_age(age).map_err(|e| rejected(OP, e))?;

            conn.execute(
                "INSERT INTO campers (name, age) VALUES (?1, ?2)",
                rusqlite::params![name, age],
            )
            .map_err(|e| from_rusqlite(e).with_op(OP))?;

            Camper::try_new(conn.last_insert_rowid(), Some(name), age)
                .map_err(|e| rejected(OP, e))
        })
    }

    /// Get a camper by id; `None` if it does not exist
    ///
    /// # Errors
    /// * `Persistence` - if the query fails
    /// * `InvalidName`, `InvalidAge` - if the stored row no longer passes validation
    pub fn get_camper(conn: &Connection, id: RecordId) -> Result<Option<Camper>> {
        let row = conn
            .query_row(
                "SELECT id, name, age FROM campers WHERE id = ?",
                [id],
                camper_row,
            )
            .optional()
            .map_err(from_rusqlite)?;
        row.map(camper_from_parts).transpose()
    }

    /// All campers in id order
    ///
    /// # Errors
    /// * `Persistence` - if the query fails
    /// * `InvalidName`, `InvalidAge` - if a stored row no longer passes validation
    pub fn list_campers(conn: &Connection) -> Result<Vec<Camper>> {
        let mut stmt = conn
            .prepare("SELECT id, name, age FROM campers ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], camper_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        rows.into_iter().map(camper_from_parts).collect()
    }

    /// Revalidate and replace the supplied fields of a camper
    ///
    /// # Errors
    /// * `InvalidName`, `InvalidAge` - if a supplied field is rejected
    /// * `NotFound` - if no camper has this id
    pub fn update_camper(
        conn: &Connection,
        id: RecordId,
        name: Option<&str>,
        age: Option<i64>,
    ) -> Result<Camper> {
        const OP: &str = "update_camper";
        instrumented(OP, || {
            if let Some(name) = name {
                validate_camper_name(Some(name)).map_err(|e| rejected(OP, e))?;
            }
            if let Some(age) = age {
                validate_camper_age(age).map_err(|e| rejected(OP, e))?;
            }

            let updated = conn
                .execute(
                    "UPDATE campers
                     SET name = COALESCE(?2, name), age = COALESCE(?3, age)
                     WHERE id = ?1",
                    rusqlite::params![id, name, age],
                )
                .map_err(|e| from_rusqlite(e).with_op(OP))?;
            if updated == 0 {
                return Err(not_found(OP, "camper", id));
            }

            Self::get_camper(conn, id)?.ok_or_else(|| not_found(OP, "camper", id))
        })
    }

    /// Delete a camper and every signup referencing it
    ///
    /// # Errors
    /// `NotFound` if no camper has this id; nothing is removed.
    pub fn delete_camper(conn: &mut Connection, id: RecordId) -> Result<usize> {
        delete_with_cascade(conn, Parent::Camper, id)
    }

    // ===== Signups =====

    /// Validate and insert a new signup
    ///
    /// # Errors
    /// * `InvalidTime` - if `time` is not strictly between 0 and 23
    /// * `ConstraintViolation` - if the camper or activity does not exist
    pub fn create_signup(
        conn: &Connection,
        time: i64,
        camper_id: RecordId,
        activity_id: RecordId,
    ) -> Result<Signup> {
        const OP: &str = "create_signup";
        instrumented(OP, || {
            let time = validate_signup_time(time).map_err(|e| rejected(OP, e))?;

            conn.execute(
                "INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3)",
                rusqlite::params![time, camper_id, activity_id],
            )
            .map_err(|e| from_rusqlite(e).with_op(OP))?;

            Signup::try_new(conn.last_insert_rowid(), time, camper_id, activity_id)
                .map_err(|e| rejected(OP, e))
        })
    }

    /// Get a signup by id; `None` if it does not exist
    ///
    /// # Errors
    /// * `Persistence` - if the query fails
    /// * `InvalidTime` - if the stored row no longer passes validation
    pub fn get_signup(conn: &Connection, id: RecordId) -> Result<Option<Signup>> {
        let row = conn
            .query_row(
                "SELECT id, time, camper_id, activity_id FROM signups WHERE id = ?",
                [id],
                signup_row,
            )
            .optional()
            .map_err(from_rusqlite)?;
        row.map(signup_from_parts).transpose()
    }

    /// All signups in id order
    ///
    /// # Errors
    /// * `Persistence` - if the query fails
    /// * `InvalidTime` - if a stored row no longer passes validation
    pub fn list_signups(conn: &Connection) -> Result<Vec<Signup>> {
        let mut stmt = conn
            .prepare("SELECT id, time, camper_id, activity_id FROM signups ORDER BY id")
            .map_err(from_rusqlite)?;
        let rows = stmt
            .query_map([], signup_row)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;
        rows.into_iter().map(signup_from_parts).collect()
    }

    /// Revalidate and replace the supplied fields of a signup
    ///
    /// # Errors
    /// * `InvalidTime` - if a supplied time is rejected
    /// * `ConstraintViolation` - if a supplied reference does not exist
    /// * `NotFound` - if no signup has this id
    pub fn update_signup(
        conn: &Connection,
        id: RecordId,
        time: Option<i64>,
        camper_id: Option<RecordId>,
        activity_id: Option<RecordId>,
    ) -> Result<Signup> {
        const OP: &str = "update_signup";
        instrumented(OP, || {
            if let Some(time) = time {
                validate_signup_time(time).map_err(|e| rejected(OP, e))?;
            }

            let updated = conn
                .execute(
                    "UPDATE signups
                     SET time = COALESCE(?2, time),
                         camper_id = COALESCE(?3, camper_id),
                         activity_id = COALESCE(?4, activity_id)
                     WHERE id = ?1",
                    rusqlite::params![id, time, camper_id, activity_id],
                )
                .map_err(|e| from_rusqlite(e).with_op(OP))?;
            if updated == 0 {
                return Err(not_found(OP, "signup", id));
            }

            Self::get_signup(conn, id)?.ok_or_else(|| not_found(OP, "signup", id))
        })
    }

    /// Delete a single signup; its camper and activity are untouched
    ///
    /// # Errors
    /// `NotFound` if no signup has this id.
    pub fn delete_signup(conn: &Connection, id: RecordId) -> Result<()> {
        const OP: &str = "delete_signup";
        instrumented(OP, || {
            let deleted = conn
                .execute("DELETE FROM signups WHERE id = ?", [id])
                .map_err(|e| from_rusqlite(e).with_op(OP))?;
            if deleted == 0 {
                return Err(not_found(OP, "signup", id));
            }
            Ok(())
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Parent {
    Activity,
    Camper,
}

impl Parent {
    fn op(self) -> &'static str {
        match self {
            Parent::Activity => "delete_activity",
            Parent::Camper => "delete_camper",
        }
    }

    fn entity(self) -> &'static str {
        match self {
            Parent::Activity => "activity",
            Parent::Camper => "camper",
        }
    }

    fn count_sql(self) -> &'static str {
        match self {
            Parent::Activity => "SELECT COUNT(*) FROM signups WHERE activity_id = ?",
            Parent::Camper => "SELECT COUNT(*) FROM signups WHERE camper_id = ?",
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            Parent::Activity => "DELETE FROM activities WHERE id = ?",
            Parent::Camper => "DELETE FROM campers WHERE id = ?",
        }
    }
}

/// Delete a parent row; `ON DELETE CASCADE` removes its signups in the same
/// transaction
fn delete_with_cascade(conn: &mut Connection, parent: Parent, id: RecordId) -> Result<usize> {
    let op = parent.op();
    let start = Instant::now();
    match parent {
        Parent::Activity => {
            log_op_start!(op, activity_id = id);
        }
        Parent::Camper => {
            log_op_start!(op, camper_id = id);
        }
    }

    let result = (|| -> Result<usize> {
        let tx = conn.transaction().map_err(from_rusqlite)?;

        let cascaded: i64 = tx
            .query_row(parent.count_sql(), [id], |row| row.get(0))
            .map_err(|e| from_rusqlite(e).with_op(op))?;
        let deleted = tx
            .execute(parent.delete_sql(), [id])
            .map_err(|e| from_rusqlite(e).with_op(op))?;
        if deleted == 0 {
            return Err(not_found(op, parent.entity(), id));
        }

        tx.commit().map_err(from_rusqlite)?;
        Ok(usize::try_from(cascaded).unwrap_or_default())
    })();

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(cascaded) => {
            log_op_end!(op, duration_ms = duration_ms, cascaded_signups = *cascaded);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

/// Run a write operation between start and end log events
fn instrumented<T>(op: &'static str, f: impl FnOnce() -> Result<T>) -> Result<T> {
    let start = Instant::now();
    log_op_start!(op);

    let result = f();

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!(op, err.clone(), duration_ms = duration_ms);
        }
    }
    result
}

fn rejected(op: &str, err: CampError) -> ExError {
    ExError::from(err).with_op(op.to_string())
}

fn activity_from_row(row: &Row<'_>) -> rusqlite::Result<Activity> {
    Ok(Activity::new(row.get(0)?, row.get(1)?, row.get(2)?))
}

fn camper_row(row: &Row<'_>) -> rusqlite::Result<(RecordId, String, i64)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn camper_from_parts((id, name, age): (RecordId, String, i64)) -> Result<Camper> {
    Ok(Camper::try_new(id, Some(&name), age)?)
}

fn signup_row(row: &Row<'_>) -> rusqlite::Result<(RecordId, i64, RecordId, RecordId)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

fn signup_from_parts(
    (id, time, camper_id, activity_id): (RecordId, i64, RecordId, RecordId),
) -> Result<Signup> {
    Ok(Signup::try_new(id, time, camper_id, activity_id)?)
}
