// Bonzi Browser platform paths for macOS
// Config and data: ~/Library/Application Support/bonzi-browser

use std::env;
use std::path::PathBuf;

use super::APP_DIR_NAME;

fn app_support_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
        .join("Library")
        .join("Application Support")
        .join(APP_DIR_NAME)
}

pub fn get_config_dir() -> PathBuf {
    app_support_dir()
}

pub fn get_data_dir() -> PathBuf {
    app_support_dir()
}
