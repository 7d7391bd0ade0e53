pub mod activity;
pub mod camper;
pub mod signup;

pub use activity::Activity;
pub use camper::Camper;
pub use signup::Signup;

/// Store-assigned record identifier (SQLite `INTEGER PRIMARY KEY`)
pub type RecordId = i64;
