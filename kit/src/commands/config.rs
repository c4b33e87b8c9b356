//! `kit config`

use crate::cli::ConfigSubcommand;
use crate::error::CliResult;
use kit_config::KitConfig;
use kit_core::{kit_info, kit_print, kit_println, kit_success, user_paths, KitError};
use kit_messages::{msg, MESSAGES};
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn handle_config(command: &ConfigSubcommand, explicit: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigSubcommand::Show => {
            let loaded = kit_config::load(explicit)?;
            let yaml = serde_yaml_ng::to_string(&loaded.config).map_err(KitError::from)?;
            if loaded.from_file {
                kit_info!(
                    "{}",
                    msg!(
                        MESSAGES.config.show_from_file,
                        path = loaded.path.display().to_string()
                    )
                );
            } else {
                kit_info!("{}", MESSAGES.config.show_defaults);
            }
            kit_print!("{}", yaml);
            Ok(())
        }
        ConfigSubcommand::Path => {
            let path = resolve(explicit)?;
            kit_println!("{}", path.display());
            if !path.exists() {
                kit_info!("{}", MESSAGES.config.path_missing);
            }
            Ok(())
        }
        ConfigSubcommand::Init { force } => {
            let path = resolve(explicit)?;
            if path.exists() && !force {
                return Err(KitError::Validation(msg!(
                    MESSAGES.config.init_exists,
                    path = path.display().to_string()
                ))
                .into());
            }
            let mut fresh = KitConfig::default();
            // Keys kit does not know about survive a reset
            if path.exists() {
                match kit_config::load(Some(&path)) {
                    Ok(old) => fresh.extra = old.config.extra,
                    Err(e) => debug!(error = %e, "not carrying over keys from unreadable config"),
                }
            }
            kit_config::save(&fresh, &path)?;
            kit_success!(
                "{}",
                msg!(MESSAGES.config.init_written, path = path.display().to_string())
            );
            Ok(())
        }
    }
}

fn resolve(explicit: Option<&Path>) -> CliResult<PathBuf> {
    Ok(match explicit {
        Some(path) => path.to_path_buf(),
        None => user_paths::config_file_path()?,
    })
}
