// Bonzi Browser platform abstraction
// Resolves where config and data files live on Windows, macOS, and Linux.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Directory name used under the platform base directories.
pub const APP_DIR_NAME: &str = "bonzi-browser";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/bonzi-browser` (or `$XDG_CONFIG_HOME/bonzi-browser`)
/// - **macOS**: `~/Library/Application Support/bonzi-browser`
/// - **Windows**: `%APPDATA%/bonzi-browser`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory.
///
/// - **Linux**: `~/.local/share/bonzi-browser` (or `$XDG_DATA_HOME/bonzi-browser`)
/// - **macOS**: `~/Library/Application Support/bonzi-browser`
/// - **Windows**: `%APPDATA%/bonzi-browser`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
