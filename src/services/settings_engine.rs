// Bonzi Browser Settings Engine
// Loads and saves the shell configuration, and resolves where the storage
// database lives. Settings are stored as a JSON file at the platform config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::settings::ShellConfig;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "BONZI_DATA_DIR";

/// File name of the storage database inside the data directory.
pub const DB_FILE_NAME: &str = "bonzi.db";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellConfig, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_settings(&self) -> &ShellConfig;
}

/// Settings engine implementation that persists the config as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: ShellConfig,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with `config.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("config.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: ShellConfig::default(),
        }
    }

    /// Path of the storage database: `$BONZI_DATA_DIR`, then `data_dir` from
    /// the config, then the platform data dir.
    pub fn resolve_db_path(&self) -> PathBuf {
        let env_dir = std::env::var(DATA_DIR_ENV).ok();
        resolve_data_dir(env_dir, &self.settings).join(DB_FILE_NAME)
    }
}

fn resolve_data_dir(env_dir: Option<String>, settings: &ShellConfig) -> PathBuf {
    env_dir
        .filter(|d| !d.is_empty())
        .or_else(|| settings.data_dir.clone())
        .map(PathBuf::from)
        .unwrap_or_else(platform::get_data_dir)
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from the JSON config file.
    ///
    /// A missing file yields defaults, which are written out so the user has
    /// a file to edit. A malformed file is a parse error.
    fn load(&mut self) -> Result<ShellConfig, ConfigError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = ShellConfig::default();
            if let Err(e) = self.save() {
                tracing::warn!(path = %self.config_path, error = %e, "Could not write default config");
            }
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("Failed to read config file: {}", e)))?;

        let settings: ShellConfig = serde_json::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config file: {}", e)))?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Saves the current settings, creating parent directories if needed.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize settings: {}", e)))?;

        fs::write(path, json)
            .map_err(|e| ConfigError::Io(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn get_settings(&self) -> &ShellConfig {
        &self.settings
    }
}
