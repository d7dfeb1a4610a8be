use thiserror::Error;

use super::tab::TabId;

// === TabError ===

/// Errors related to tab management operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
}

// === StorageError ===

/// Errors raised by the durable key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQLite operation failed.
    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// A value could not be encoded as JSON.
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// File system error while preparing the storage location.
    #[error("Storage I/O error: {0}")]
    Io(String),
}

// === ConfigError ===

/// Errors related to loading and saving the shell configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the config file.
    #[error("Config I/O error: {0}")]
    Io(String),
    /// The config file exists but is not valid JSON for `ShellConfig`.
    #[error("Config parse error: {0}")]
    Parse(String),
}

// === ShellError ===

/// Top-level error returned by `BrowserShell` operations.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
