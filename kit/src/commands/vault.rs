//! `kit vault`

use super::prompt;
use crate::cli::VaultSubcommand;
use crate::error::CliResult;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Password;
use kit_config::{GeneratorSettings, VaultSettings};
use kit_core::error::Result as KitResult;
use kit_core::{kit_info, kit_println, kit_success, kit_warning, KitError};
use kit_messages::{msg, MESSAGES};
use kit_vault::{AddOutcome, PasswordPolicy, Vault};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Master password for non-interactive use. Gets exactly one attempt.
const PASSWORD_ENV: &str = "KIT_VAULT_PASSWORD";

/// Replacement master password for `vault passwd` without a prompt.
const NEW_PASSWORD_ENV: &str = "KIT_VAULT_NEW_PASSWORD";

pub fn handle_vault(
    settings: &VaultSettings,
    command: VaultSubcommand,
    file: Option<PathBuf>,
) -> CliResult<()> {
    let path = match file {
        Some(path) => path,
        None => settings.data_path()?,
    };
    debug!(path = %path.display(), "vault file");

    match command {
        VaultSubcommand::Init => init(&path),
        VaultSubcommand::Add {
            website,
            email,
            password,
            generate,
            force,
        } => {
            let mut vault = open(&path, settings)?;
            let password = match (password, generate) {
                (Some(password), _) => password,
                (None, true) => {
                    let generated = generate_with(&settings.generator, None)?;
                    kit_println!("{}", generated);
                    generated
                }
                (None, false) => ask_new_password(MESSAGES.vault.entry_password_prompt)?,
            };
            match vault.add(&website, &email, &password, force)? {
                AddOutcome::Added => {
                    kit_success!("{}", msg!(MESSAGES.vault.added, website = website.trim()))
                }
                AddOutcome::Replaced => {
                    kit_success!("{}", msg!(MESSAGES.vault.replaced, website = website.trim()))
                }
                AddOutcome::Exists => {
                    return Err(KitError::Validation(msg!(
                        MESSAGES.vault.entry_exists,
                        website = website.trim()
                    ))
                    .into())
                }
            }
            Ok(())
        }
        VaultSubcommand::List => {
            let vault = open(&path, settings)?;
            let all: Vec<usize> = (0..vault.len()).collect();
            print_table(&vault, &all)
        }
        VaultSubcommand::Search { term } => {
            let vault = open(&path, settings)?;
            let hits: Vec<usize> = vault.search(&term).into_iter().map(|(i, _)| i).collect();
            if hits.is_empty() {
                kit_info!("{}", msg!(MESSAGES.vault.search_none, term = term.as_str()));
                return Ok(());
            }
            print_table(&vault, &hits)
        }
        VaultSubcommand::Show { index } => {
            let vault = open(&path, settings)?;
            let i = position(index)?;
            let password = vault.reveal(i)?;
            let entry = &vault.entries()[i];
            kit_println!("{:<10} {}", MESSAGES.vault.label_website.bold(), entry.website);
            kit_println!("{:<10} {}", MESSAGES.vault.label_email.bold(), entry.email);
            kit_println!("{:<10} {}", MESSAGES.vault.label_password.bold(), password);
            kit_println!("{:<10} {}", MESSAGES.vault.label_added.bold(), entry.date_added);
            Ok(())
        }
        VaultSubcommand::Edit {
            index,
            website,
            email,
            password,
            generate,
        } => {
            if website.is_none() && email.is_none() && password.is_none() && !generate {
                return Err(KitError::validation(MESSAGES.vault.edit_nothing).into());
            }
            let mut vault = open(&path, settings)?;
            let i = position(index)?;
            let password = if generate {
                let generated = generate_with(&settings.generator, None)?;
                kit_println!("{}", generated);
                Some(generated)
            } else {
                password
            };
            vault.edit(i, website.as_deref(), email.as_deref(), password.as_deref())?;
            kit_success!(
                "{}",
                msg!(MESSAGES.vault.updated, website = vault.entries()[i].website.as_str())
            );
            Ok(())
        }
        VaultSubcommand::Remove { index, yes } => {
            let mut vault = open(&path, settings)?;
            let i = position(index)?;
            let website = vault
                .entries()
                .get(i)
                .map(|e| e.website.clone())
                .ok_or_else(|| KitError::NotFound(format!("No entry at position {index}")))?;
            if !yes
                && !prompt::confirm(
                    &msg!(MESSAGES.vault.remove_confirm, website = website.as_str()),
                    false,
                )?
            {
                kit_info!("{}", MESSAGES.common.cancelled);
                return Ok(());
            }
            let removed = vault.remove(i)?;
            kit_success!("{}", msg!(MESSAGES.vault.removed, website = removed.website));
            Ok(())
        }
        VaultSubcommand::Export { path: target } => {
            let vault = open(&path, settings)?;
            let count = vault.export_plain(&target)?;
            kit_success!(
                "{}",
                msg!(
                    MESSAGES.vault.exported,
                    count = count.to_string(),
                    path = target.display().to_string()
                )
            );
            kit_warning!("{}", MESSAGES.vault.export_plaintext_warning);
            Ok(())
        }
        VaultSubcommand::Import { path: source } => {
            let mut vault = open(&path, settings)?;
            let report = vault.import_plain(&source)?;
            kit_success!(
                "{}",
                msg!(
                    MESSAGES.vault.imported,
                    imported = report.imported.to_string(),
                    replaced = report.replaced.to_string(),
                    skipped = report.skipped.to_string()
                )
            );
            Ok(())
        }
        VaultSubcommand::Passwd => {
            let mut vault = open(&path, settings)?;
            let new_master = match env::var(NEW_PASSWORD_ENV) {
                Ok(master) => master,
                Err(_) => ask_new_password(MESSAGES.vault.master_new_prompt)?,
            };
            vault.change_master(&new_master)?;
            kit_success!(
                "{}",
                msg!(MESSAGES.vault.master_changed, count = vault.len().to_string())
            );
            Ok(())
        }
        VaultSubcommand::Generate { length } => {
            kit_println!("{}", generate_with(&settings.generator, length)?);
            Ok(())
        }
    }
}

fn init(path: &Path) -> CliResult<()> {
    if Vault::exists(path) {
        return Err(KitError::Validation(msg!(
            MESSAGES.vault.already_exists,
            path = path.display().to_string()
        ))
        .into());
    }
    let master = match env::var(PASSWORD_ENV) {
        Ok(master) => master,
        Err(_) => ask_new_password(MESSAGES.vault.master_new_prompt)?,
    };
    Vault::create(path, &master)?;
    kit_success!(
        "{}",
        msg!(MESSAGES.vault.created, path = path.display().to_string())
    );
    Ok(())
}

/// Unlock the vault, prompting up to `max_attempts` times.
fn open(path: &Path, settings: &VaultSettings) -> CliResult<Vault> {
    if let Ok(master) = env::var(PASSWORD_ENV) {
        return Ok(Vault::unlock(path, &master)?);
    }
    if !Vault::exists(path) {
        return Err(KitError::NotFound(msg!(
            MESSAGES.vault.not_initialized,
            path = path.display().to_string()
        ))
        .into());
    }

    let attempts = settings.max_attempts.max(1);
    for attempt in 1..=attempts {
        let master = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(MESSAGES.vault.master_prompt)
            .interact()?;
        match Vault::unlock(path, &master) {
            Ok(vault) => return Ok(vault),
            Err(KitError::Crypto(reason)) => {
                debug!(attempt, %reason, "unlock failed");
                let remaining = attempts - attempt;
                if remaining > 0 {
                    kit_warning!(
                        "{}",
                        msg!(MESSAGES.vault.wrong_password, remaining = remaining.to_string())
                    );
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(KitError::Crypto(MESSAGES.vault.too_many_attempts.to_string()).into())
}

fn ask_new_password(prompt: &str) -> CliResult<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_confirmation(MESSAGES.vault.confirm_prompt, MESSAGES.vault.mismatch)
        .interact()?)
}

fn generate_with(generator: &GeneratorSettings, length: Option<usize>) -> KitResult<String> {
    let policy = PasswordPolicy::vault(
        length.unwrap_or(generator.length),
        generator.uppercase,
        generator.lowercase,
        generator.digits,
        generator.symbols,
    );
    policy.generate(&mut rand::rng())
}

/// 1-based entry number to a vault index.
fn position(index: usize) -> KitResult<usize> {
    index
        .checked_sub(1)
        .ok_or_else(|| KitError::validation(MESSAGES.vault.index_invalid))
}

fn print_table(vault: &Vault, indices: &[usize]) -> CliResult<()> {
    if vault.is_empty() {
        kit_info!("{}", MESSAGES.vault.empty);
        return Ok(());
    }
    let website_width = indices
        .iter()
        .map(|&i| vault.entries()[i].website.chars().count())
        .max()
        .unwrap_or(0)
        .max(MESSAGES.vault.label_website.len());
    let email_width = indices
        .iter()
        .map(|&i| vault.entries()[i].email.chars().count())
        .max()
        .unwrap_or(0)
        .max(MESSAGES.vault.label_email.len());

    let header = format!(
        "{:>3}  {:<website_width$}  {:<email_width$}  {:<12}  {}",
        "#",
        MESSAGES.vault.label_website,
        MESSAGES.vault.label_email,
        MESSAGES.vault.label_password,
        MESSAGES.vault.label_added,
    );
    kit_println!("{}", header.bold());
    for &i in indices {
        let entry = &vault.entries()[i];
        kit_println!(
            "{:>3}  {:<website_width$}  {:<email_width$}  {:<12}  {}",
            i + 1,
            entry.website.cyan(),
            entry.email,
            vault.masked(i)?.dimmed(),
            entry.date_added
        );
    }
    kit_info!("{}", msg!(MESSAGES.vault.count, count = indices.len().to_string()));
    Ok(())
}
