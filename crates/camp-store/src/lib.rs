//! Camp Store - SQLite persistence for the camp signup records
//!
//! Provides:
//! - Connection setup with foreign-key enforcement
//! - Embedded, checksummed, idempotent schema migrations
//! - `SqliteRepo` CRUD with write-time validation and atomic cascade deletes
//! - Hydration of the database into an in-memory `Store` for serialization

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteRepo;
