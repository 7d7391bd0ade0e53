//! Migration framework
//!
//! - Embedded SQL migrations, applied in order
//! - Each migration runs in its own transaction
//! - Applied migrations are recorded with a checksum and never re-run

mod checksums;
mod embedded;
mod runner;

pub use runner::{applied_migrations, apply_migrations};
