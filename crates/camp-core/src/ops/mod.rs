pub mod activity_ops;
pub mod camper_ops;
pub mod signup_ops;
pub mod store;

pub use store::Store;
