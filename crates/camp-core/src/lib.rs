//! Camp Core - record model for the camp signup store
//!
//! This crate provides:
//! - Activity, Camper and Signup models with validated fields
//! - Explicit field validators run on every create/update path
//! - An in-memory `Store` enforcing referential integrity and cascade deletes
//! - CRUD operations per entity
//! - Cycle-free external representations (serialization views)
//! - The deterministic constraint naming convention used by the SQL schema
//! - Error and logging facilities shared with the persistence crate

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod naming;
pub mod ops;
pub mod rules;
pub mod serialize;

// Used by the exported logging macros
#[doc(hidden)]
pub use camp_core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use errors::{CampError, ExError, ExErrorKind, Result};
pub use model::{Activity, Camper, RecordId, Signup};
pub use ops::Store;
