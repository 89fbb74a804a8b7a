//! Local SQLite storage for vocabulary records.

pub mod date_utils;
pub mod error;
pub mod schema;
pub mod store;

pub use error::DbError;
pub use store::SqliteStore;
