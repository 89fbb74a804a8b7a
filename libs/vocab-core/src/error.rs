//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a storage backend.
///
/// Corrupt or missing records are not errors: typed loads fall back to the
/// caller's default instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode record {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap any backend error (SQLite, filesystem, ...).
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Errors from the text-to-speech collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("Speech not supported!")]
    Unsupported,

    #[error("speech engine failed: {0}")]
    Engine(String),
}
