use serde::{Deserialize, Serialize};

/// URL given to every freshly created tab.
pub const DEFAULT_URL: &str = "https://example.com";

/// Shell configuration, stored as `config.json` in the platform config dir.
///
/// Every field has a default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub default_url: String,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Where `bonzi.db` lives. Falls back to the platform data dir.
    pub data_dir: Option<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.to_string(),
            window_title: "Bonzi Browser".to_string(),
            window_width: 1280,
            window_height: 800,
            log_level: "info".to_string(),
            data_dir: None,
        }
    }
}
