//! SQLite database connection management.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! and runs schema migrations on open.

use rusqlite::Connection;
use std::path::Path;

use super::migrations;

/// Owns a `rusqlite::Connection` whose schema is always up to date.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// # Errors
    /// Returns `rusqlite::Error` if the connection cannot be established or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        migrations::run_all(&db.conn)?;
        Ok(db)
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// The database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        migrations::run_all(&db.conn)?;
        Ok(db)
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
