//! SQLite-backed record store.

use crate::db::error::DbError;
use crate::db::schema::{INIT_SCHEMA_VERSION, SCHEMA, SCHEMA_VERSION};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::{RecordKey, Store, StoreError};

type Result<T> = std::result::Result<T, DbError>;

/// Records stored as JSON text, one row per [`RecordKey`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open database at path, creating it and its directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        self.conn.execute_batch(INIT_SCHEMA_VERSION)?;
        let version = self.schema_version()?;
        if version > SCHEMA_VERSION {
            return Err(DbError::SchemaVersion(version));
        }
        Ok(())
    }

    pub fn schema_version(&self) -> Result<i32> {
        let version = self
            .conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
        Ok(version)
    }

    /// Last write time of a record, as RFC 3339.
    pub fn updated_at(&self, key: RecordKey) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT updated_at FROM records WHERE key = ?1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn read(&self, key: RecordKey) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
    }

    fn write(&self, key: RecordKey, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO records (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key.as_str(), value, now],
        )?;
        Ok(())
    }

    fn delete(&self, key: RecordKey) -> Result<()> {
        self.conn
            .execute("DELETE FROM records WHERE key = ?1", params![key.as_str()])?;
        Ok(())
    }
}

impl Store for SqliteStore {
    fn get(&self, key: RecordKey) -> std::result::Result<Option<String>, StoreError> {
        Ok(self.read(key)?)
    }

    fn set(&mut self, key: RecordKey, value: &str) -> std::result::Result<(), StoreError> {
        tracing::trace!(key = key.as_str(), "writing record");
        Ok(self.write(key, value)?)
    }

    fn remove(&mut self, key: RecordKey) -> std::result::Result<(), StoreError> {
        tracing::trace!(key = key.as_str(), "removing record");
        Ok(self.delete(key)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vocab_core::{ReviewedSet, StoreExt, VocabularyEntry};

    #[test]
    fn set_get_remove() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get(RecordKey::Badges).unwrap(), None);

        store.set(RecordKey::Badges, r#"{"quiz":[]}"#).unwrap();
        store.set(RecordKey::Badges, r#"{"quiz":["Quiz7"]}"#).unwrap();
        assert_eq!(
            store.get(RecordKey::Badges).unwrap().as_deref(),
            Some(r#"{"quiz":["Quiz7"]}"#)
        );
        assert!(store.updated_at(RecordKey::Badges).unwrap().is_some());

        store.remove(RecordKey::Badges).unwrap();
        assert_eq!(store.get(RecordKey::Badges).unwrap(), None);
    }

    #[test]
    fn corrupt_row_falls_back() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.set(RecordKey::Reviewed, "not json").unwrap();
        let reviewed: ReviewedSet = store.load_or_default(RecordKey::Reviewed).unwrap();
        assert!(reviewed.is_empty());
    }

    #[test]
    fn records_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vocab.db");
        let entries = vec![VocabularyEntry::new("cat", "noun", "a small animal", "")];

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.save(RecordKey::Vocabulary, &entries).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let loaded: Vec<VocabularyEntry> = store.load_or_default(RecordKey::Vocabulary).unwrap();
        assert_eq!(loaded, entries);
        assert_eq!(store.schema_version().unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn rejects_newer_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocab.db");
        drop(SqliteStore::open(&path).unwrap());

        let conn = Connection::open(&path).unwrap();
        conn.execute("INSERT INTO schema_version (version) VALUES (7)", [])
            .unwrap();
        drop(conn);

        assert!(matches!(
            SqliteStore::open(&path),
            Err(DbError::SchemaVersion(7))
        ));
    }
}
