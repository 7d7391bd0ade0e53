//! Database connection management
//!
//! Cascade deletes rely on SQLite enforcing foreign keys. Enforcement is a
//! per-connection setting whose default depends on how SQLite was built, so
//! every connection handed out here turns it on explicitly.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) a SQLite database at the given path
///
/// # Errors
/// `Persistence` if the file cannot be opened or configured.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    let conn = Connection::open(path).map_err(from_rusqlite)?;
    configure(&conn)?;
    // WAL only applies to file databases
    conn.execute_batch("PRAGMA journal_mode = WAL;")
        .map_err(from_rusqlite)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
///
/// # Errors
/// `Persistence` if SQLite cannot allocate the database.
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

/// Enable foreign-key enforcement on a connection
///
/// # Errors
/// `Persistence` if the pragma fails.
pub fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(from_rusqlite)?;
    Ok(())
}

/// Whether foreign keys are enforced on this connection
///
/// # Errors
/// `Persistence` if the pragma cannot be read.
pub fn foreign_keys_enabled(conn: &Connection) -> Result<bool> {
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .map_err(from_rusqlite)?;
    Ok(enabled == 1)
}
