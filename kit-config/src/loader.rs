//! Loading and saving `config.yaml`.

use crate::config::KitConfig;
use anyhow::Context;
use kit_core::error::{KitError, Result};
use kit_core::file_system::write_file_atomic;
use kit_core::user_paths;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A configuration together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: KitConfig,
    pub path: PathBuf,
    /// False when the file did not exist and defaults were used
    pub from_file: bool,
}

/// Load the configuration from `explicit`, or from the default location.
///
/// A missing file is not an error: every setting has a default.
pub fn load(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => user_paths::config_file_path()?,
    };

    if !path.exists() {
        if explicit.is_some() {
            return Err(KitError::Config(format!(
                "Config file '{}' does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(LoadedConfig {
            config: KitConfig::default(),
            path,
            from_file: false,
        });
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: KitConfig = if content.trim().is_empty() {
        KitConfig::default()
    } else {
        serde_yaml_ng::from_str(&content).map_err(|e| {
            KitError::Config(format!("Invalid YAML in '{}': {}", path.display(), e))
        })?
    };
    config.validate()?;

    debug!(path = %path.display(), "loaded config");
    Ok(LoadedConfig {
        config,
        path,
        from_file: true,
    })
}

/// Write `config` to `path` as YAML, replacing any previous file whole.
pub fn save(config: &KitConfig, path: &Path) -> Result<()> {
    config.validate()?;
    let yaml = serde_yaml_ng::to_string(config)?;
    write_file_atomic(path, yaml.as_bytes())?;
    info!(path = %path.display(), "saved config");
    Ok(())
}
