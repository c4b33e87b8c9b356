//! Cross-platform user directory utilities for kit.
//!
//! Tools keep their small state files (vault, rates cache, flash-card
//! progress, Pomodoro stats) under the data directory and read the
//! shared YAML config from the config directory.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "KIT_DATA_DIR";

/// Environment override for the config file path.
pub const CONFIG_FILE_ENV: &str = "KIT_CONFIG";

/// Get the user's configuration directory for kit.
///
/// Returns:
/// - Linux: `~/.config/kit` or `$XDG_CONFIG_HOME/kit`
/// - macOS: `~/Library/Application Support/kit`
/// - Windows: `%APPDATA%\kit`
#[must_use = "configuration directory path should be used"]
pub fn user_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine the user config directory")?;
    Ok(base.join("kit"))
}

/// Get the user's data directory for kit, honouring `KIT_DATA_DIR`.
///
/// Returns:
/// - Linux: `~/.local/share/kit` or `$XDG_DATA_HOME/kit`
/// - macOS: `~/Library/Application Support/kit`
/// - Windows: `%LOCALAPPDATA%\kit`
#[must_use = "data directory path should be used"]
pub fn user_data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_local_dir().context("Could not determine the user data directory")?;
    Ok(base.join("kit"))
}

/// Path of the shared YAML config, honouring `KIT_CONFIG`.
#[must_use = "configuration file path should be used"]
pub fn config_file_path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_FILE_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(user_config_dir()?.join("config.yaml"))
}

/// Resolve a file name inside the data directory.
pub fn data_file(name: &str) -> Result<PathBuf> {
    Ok(user_data_dir()?.join(name))
}
