//! Key-value persistence for durable records.
//!
//! Backends only move opaque JSON strings. Typed access goes through
//! [`StoreExt`], which falls back to a caller-supplied default whenever a
//! record is missing or cannot be decoded.

use crate::error::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// Logical records kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Vocabulary,
    Reviewed,
    QuizProgress,
    Badges,
    Streak,
}

impl RecordKey {
    pub const ALL: [RecordKey; 5] = [
        Self::Vocabulary,
        Self::Reviewed,
        Self::QuizProgress,
        Self::Badges,
        Self::Streak,
    ];

    /// Key under which the record is stored.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vocabulary => "vocabData",
            Self::Reviewed => "reviewedWords",
            Self::QuizProgress => "quizProgress",
            Self::Badges => "earnedBadges",
            Self::Streak => "studyStreak",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == s)
    }
}

/// Whole-value storage backend.
pub trait Store {
    fn get(&self, key: RecordKey) -> Result<Option<String>>;
    fn set(&mut self, key: RecordKey, value: &str) -> Result<()>;
    fn remove(&mut self, key: RecordKey) -> Result<()>;
}

/// Typed JSON access on top of any [`Store`].
pub trait StoreExt: Store {
    /// Decode a record, or return `fallback` if it is absent or corrupt.
    fn load<T: DeserializeOwned>(&self, key: RecordKey, fallback: T) -> Result<T> {
        let Some(raw) = self.get(key)? else {
            return Ok(fallback);
        };
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(fallback),
            Err(err) => {
                tracing::warn!(key = key.as_str(), error = %err, "corrupt record, using fallback");
                Ok(fallback)
            }
        }
    }

    /// Like [`StoreExt::load`] with `T::default()` as the fallback.
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: RecordKey) -> Result<T> {
        self.load(key, T::default())
    }

    fn save<T: Serialize>(&mut self, key: RecordKey, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.as_str(),
            source,
        })?;
        tracing::debug!(key = key.as_str(), bytes = raw.len(), "saving record");
        self.set(key, &raw)
    }
}

impl<S: Store + ?Sized> StoreExt for S {}

/// In-process store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<RecordKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: RecordKey) -> Result<Option<String>> {
        Ok(self.records.get(&key).cloned())
    }

    fn set(&mut self, key: RecordKey, value: &str) -> Result<()> {
        self.records.insert(key, value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: RecordKey) -> Result<()> {
        self.records.remove(&key);
        Ok(())
    }
}
