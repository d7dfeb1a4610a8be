// Bonzi Browser platform paths for Linux
// Config: ~/.config/bonzi-browser
// Data:   ~/.local/share/bonzi-browser

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

/// Picks `$XDG_*` when set, otherwise `$HOME` joined with the fallback segments.
fn xdg_dir(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir).join(APP_DIR_NAME),
        _ => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            for segment in fallback {
                path.push(segment);
            }
            path.join(APP_DIR_NAME)
        }
    }
}

pub fn get_config_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_CONFIG_HOME").ok(),
        env::var("HOME").ok(),
        &[".config"],
    )
}

pub fn get_data_dir() -> PathBuf {
    xdg_dir(
        env::var("XDG_DATA_HOME").ok(),
        env::var("HOME").ok(),
        &[".local", "share"],
    )
}
