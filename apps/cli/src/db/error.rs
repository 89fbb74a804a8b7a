//! Database error types.

use thiserror::Error;
use vocab_core::StoreError;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cannot create data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported schema version {0}")]
    SchemaVersion(i32),
}

impl From<DbError> for StoreError {
    fn from(e: DbError) -> Self {
        StoreError::backend(e)
    }
}
