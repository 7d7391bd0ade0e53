//! Core types shared across the camp crates
//!
//! - **Correlation**: `RequestId` attached to log spans and errors
//! - **Schema constants**: canonical field keys and event names for structured logging

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
