//! Bonzi Browser storage layer.
//!
//! Provides SQLite connection management, schema migrations and the durable
//! key-value store the shell persists bookmarks and history into.
//!
//! # Usage
//!
//! ```no_run
//! use bonzi_browser::database::{KeyValueStore, SqliteStore};
//!
//! let mut store = SqliteStore::open("bonzi.db").expect("failed to open store");
//! store.set("bonzi-history", "[]").expect("write failed");
//! assert_eq!(store.get("bonzi-history").unwrap().as_deref(), Some("[]"));
//! ```

pub mod connection;
pub mod kv_store;
pub mod migrations;

pub use connection::Database;
pub use kv_store::{KeyValueStore, MemoryStore, SqliteStore};
