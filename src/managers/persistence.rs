//! Persistence gateway: mirrors bookmarks and history into durable storage.
//!
//! Each collection lives under its own key as a JSON array of URL strings and
//! is rewritten in full on every change.

use tracing::{debug, warn};

use crate::database::KeyValueStore;
use crate::types::errors::StorageError;

pub const BOOKMARKS_KEY: &str = "bonzi-bookmarks";
pub const HISTORY_KEY: &str = "bonzi-history";

pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore + Send>,
}

impl PersistenceGateway {
    pub fn new(store: Box<dyn KeyValueStore + Send>) -> Self {
        Self { store }
    }

    pub fn load_bookmarks(&self) -> Vec<String> {
        self.load_list(BOOKMARKS_KEY)
    }

    pub fn load_history(&self) -> Vec<String> {
        self.load_list(HISTORY_KEY)
    }

    pub fn save_bookmarks(&mut self, bookmarks: &[String]) -> Result<(), StorageError> {
        self.save_list(BOOKMARKS_KEY, bookmarks)
    }

    pub fn save_history(&mut self, history: &[String]) -> Result<(), StorageError> {
        self.save_list(HISTORY_KEY, history)
    }

    /// Missing, unreadable or malformed values all load as an empty list.
    fn load_list(&self, key: &str) -> Vec<String> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored list, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(list) => {
                debug!(key, count = list.len(), "Loaded stored list");
                list
            }
            Err(e) => {
                warn!(key, error = %e, "Malformed stored list, starting empty");
                Vec::new()
            }
        }
    }

    fn save_list(&mut self, key: &str, list: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string(list)?;
        self.store.set(key, &json)
    }
}
