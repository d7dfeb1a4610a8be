//! Durable key-value storage.
//!
//! The shell only needs string keys mapped to string values, the same shape a
//! browser's `localStorage` offers. [`SqliteStore`] is the on-disk backend,
//! [`MemoryStore`] keeps everything in process.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, OptionalExtension};

use super::connection::Database;
use crate::types::errors::StorageError;

/// Trait defining the key-value storage interface.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replaces whatever is stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key-value store backed by the `kv_store` table of a SQLite database.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Opens (or creates) the database file, creating parent directories as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Io(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }
        let db = Database::open(path)?;
        tracing::info!(path = %path.display(), "Opened key-value store");
        Ok(Self { db })
    }

    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: Database::open_in_memory()?,
        })
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .db
            .connection()
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.db.connection().execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Self::now()],
        )?;
        Ok(())
    }
}

/// In-process key-value store.
///
/// Clones share the same backing map, so a test can keep a handle and inspect
/// what a shell wrote, or hand the same storage to a second shell.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map still holds consistent string pairs.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
