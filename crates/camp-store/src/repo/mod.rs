//! Repository layer for SQLite persistence

pub mod hydration;
pub mod sqlite_repo;

pub use hydration::load_store;
pub use sqlite_repo::SqliteRepo;
