//! Subcommands, one module per record type

pub mod activity;
pub mod camper;
pub mod signup;

use camp_core::Store;
use rusqlite::Connection;
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Load the database into a store so the serialization views can render it
pub(crate) fn hydrate(conn: &Connection) -> Result<Store, Box<dyn std::error::Error>> {
    Ok(camp_store::repo::load_store(conn)?)
}

/// Print a view as pretty JSON, keeping the view's field order
pub(crate) fn print_json<T: Serialize>(view: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(view)?);
    Ok(())
}
