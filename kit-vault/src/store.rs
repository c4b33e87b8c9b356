//! Persistent storage for encrypted vault entries

use crate::crypto::{fresh_salt, salt_from_text, salt_to_text, MasterKey};
use anyhow::Context;
use chrono::Local;
use kit_core::error::{KitError, Result};
use kit_core::file_system::{read_json, write_json_private};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Current on-disk format version
const VAULT_FORMAT_VERSION: u32 = 1;

/// Timestamp format for `date_added`
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shown instead of a password that cannot be decrypted
const UNREADABLE_MASK: &str = "●●●●●●";

const MASK_CHAR: char = '●';
const MAX_MASK_LEN: usize = 12;

/// One saved login. `password` holds ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub website: String,
    pub email: String,
    pub password: String,
    pub date_added: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct VaultFile {
    version: u32,
    salt: String,
    verifier: String,
    #[serde(default)]
    entries: Vec<Entry>,
}

/// Plaintext record used by export and import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlainEntry {
    pub website: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Replaced,
    /// An entry for the website exists and overwriting was not requested
    Exists,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub replaced: usize,
    pub skipped: usize,
}

fn now_stamp() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn require(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(KitError::Validation(format!("{field} cannot be empty.")))
    } else {
        Ok(trimmed.to_string())
    }
}

/// An unlocked vault
pub struct Vault {
    path: PathBuf,
    key: MasterKey,
    file: VaultFile,
}

impl Vault {
    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }

    /// Create a new, empty vault protected by `master`.
    pub fn create(path: &Path, master: &str) -> Result<Self> {
        if Self::exists(path) {
            return Err(KitError::Validation(format!(
                "A vault already exists at {}",
                path.display()
            )));
        }
        if master.is_empty() {
            return Err(KitError::validation("Master password cannot be empty."));
        }

        let salt = fresh_salt();
        let key = MasterKey::derive(master, &salt)?;
        let file = VaultFile {
            version: VAULT_FORMAT_VERSION,
            salt: salt_to_text(&salt),
            verifier: key.seal_canary()?,
            entries: Vec::new(),
        };

        let vault = Self {
            path: path.to_path_buf(),
            key,
            file,
        };
        vault.save()?;
        info!(path = %path.display(), "created vault");
        Ok(vault)
    }

    /// Open an existing vault, checking `master` against the stored verifier.
    pub fn unlock(path: &Path, master: &str) -> Result<Self> {
        let file: VaultFile = match read_json(path) {
            Ok(file) => file,
            Err(KitError::NotFound(_)) => {
                return Err(KitError::NotFound(format!(
                    "No vault at {}. Run 'kit vault init' first.",
                    path.display()
                )))
            }
            Err(e) => return Err(e),
        };

        let salt = salt_from_text(&file.salt)?;
        let key = MasterKey::derive(master, &salt)?;
        if !key.opens_canary(&file.verifier) {
            debug!("master password did not match verifier");
            return Err(KitError::Crypto("Invalid master password".to_string()));
        }

        debug!(entries = file.entries.len(), "unlocked vault");
        Ok(Self {
            path: path.to_path_buf(),
            key,
            file,
        })
    }

    fn save(&self) -> Result<()> {
        write_json_private(&self.path, &self.file)
    }

    /// Persist `file` and only then adopt it, so a failed write leaves the
    /// in-memory vault matching the disk.
    fn commit(&mut self, file: VaultFile) -> Result<()> {
        write_json_private(&self.path, &file)?;
        self.file = file;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.file.entries
    }

    pub fn len(&self) -> usize {
        self.file.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.entries.is_empty()
    }

    fn position_of(&self, website: &str) -> Option<usize> {
        let wanted = website.to_lowercase();
        self.file
            .entries
            .iter()
            .position(|e| e.website.to_lowercase() == wanted)
    }

    fn entry(&self, index: usize) -> Result<&Entry> {
        self.file
            .entries
            .get(index)
            .ok_or_else(|| KitError::NotFound(format!("No entry at position {}", index + 1)))
    }

    /// Store a login. Websites are unique, compared case-insensitively.
    pub fn add(&mut self, website: &str, email: &str, password: &str, overwrite: bool) -> Result<AddOutcome> {
        let website = require(website, "Website")?;
        let email = require(email, "Email/Username")?;
        if password.trim().is_empty() {
            return Err(KitError::validation("Password cannot be empty."));
        }

        let entry = Entry {
            website,
            email,
            password: self.key.encrypt(password)?,
            date_added: now_stamp(),
        };

        let mut next = self.file.clone();
        let outcome = match self.position_of(&entry.website) {
            Some(_) if !overwrite => return Ok(AddOutcome::Exists),
            Some(i) => {
                next.entries[i] = entry;
                AddOutcome::Replaced
            }
            None => {
                next.entries.push(entry);
                AddOutcome::Added
            }
        };
        self.commit(next)?;
        Ok(outcome)
    }

    /// Entries whose website or email contains `term`, with their indices.
    pub fn search(&self, term: &str) -> Vec<(usize, &Entry)> {
        let needle = term.trim().to_lowercase();
        self.file
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                needle.is_empty()
                    || e.website.to_lowercase().contains(&needle)
                    || e.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Decrypted password of entry `index`.
    pub fn reveal(&self, index: usize) -> Result<String> {
        let entry = self.entry(index)?;
        self.key.decrypt(&entry.password)
    }

    /// Password hidden behind bullets, one per character up to twelve.
    pub fn masked(&self, index: usize) -> Result<String> {
        self.entry(index)?;
        Ok(match self.reveal(index) {
            Ok(plain) => std::iter::repeat(MASK_CHAR)
                .take(plain.chars().count().min(MAX_MASK_LEN))
                .collect(),
            Err(_) => UNREADABLE_MASK.to_string(),
        })
    }

    /// Change any of the fields of entry `index`; blank values are ignored.
    pub fn edit(
        &mut self,
        index: usize,
        website: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<()> {
        self.entry(index)?;

        let website = website.map(str::trim).filter(|w| !w.is_empty());
        if let Some(w) = website {
            if matches!(self.position_of(w), Some(other) if other != index) {
                return Err(KitError::Validation(format!(
                    "An entry for {w} already exists."
                )));
            }
        }
        let encrypted = match password.filter(|p| !p.trim().is_empty()) {
            Some(p) => Some(self.key.encrypt(p)?),
            None => None,
        };

        let mut next = self.file.clone();
        let entry = &mut next.entries[index];
        if let Some(w) = website {
            entry.website = w.to_string();
        }
        if let Some(e) = email.map(str::trim).filter(|e| !e.is_empty()) {
            entry.email = e.to_string();
        }
        if let Some(p) = encrypted {
            entry.password = p;
        }
        entry.date_added = now_stamp();

        self.commit(next)
    }

    /// Delete entry `index` and return it.
    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        self.entry(index)?;
        let mut next = self.file.clone();
        let removed = next.entries.remove(index);
        self.commit(next)?;
        info!(website = %removed.website, "removed vault entry");
        Ok(removed)
    }

    /// Write every entry with its password decrypted.
    pub fn export_plain(&self, path: &Path) -> Result<usize> {
        if self.is_empty() {
            return Err(KitError::validation("No passwords to export."));
        }
        let plain = self
            .file
            .entries
            .iter()
            .map(|e| -> Result<PlainEntry> {
                Ok(PlainEntry {
                    website: e.website.clone(),
                    email: e.email.clone(),
                    password: self.key.decrypt(&e.password)?,
                    date_added: Some(e.date_added.clone()),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        write_json_private(path, &plain)?;
        Ok(plain.len())
    }

    /// Merge a plaintext export into the vault.
    ///
    /// Objects missing a website, email or password are skipped; a
    /// website already in the vault is replaced.
    pub fn import_plain(&mut self, path: &Path) -> Result<ImportReport> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let items = value.as_array().ok_or_else(|| {
            KitError::validation("Import file must contain a list of entries.")
        })?;

        let mut next = self.file.clone();
        let mut report = ImportReport::default();
        for item in items {
            let text = |name: &str| item.get(name).and_then(|v| v.as_str());
            let field = |name: &str| {
                text(name)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            };
            // Secrets are kept byte for byte; only blank ones are refused
            let password = text("password")
                .filter(|p| !p.trim().is_empty())
                .map(str::to_string);
            let (Some(website), Some(email), Some(password)) =
                (field("website"), field("email"), password)
            else {
                report.skipped += 1;
                continue;
            };

            let entry = Entry {
                website,
                email,
                password: self.key.encrypt(&password)?,
                date_added: field("date_added").unwrap_or_else(now_stamp),
            };
            let wanted = entry.website.to_lowercase();
            match next
                .entries
                .iter()
                .position(|e| e.website.to_lowercase() == wanted)
            {
                Some(i) => {
                    next.entries[i] = entry;
                    report.replaced += 1;
                }
                None => {
                    next.entries.push(entry);
                    report.imported += 1;
                }
            }
        }

        self.commit(next)?;
        info!(
            imported = report.imported,
            replaced = report.replaced,
            skipped = report.skipped,
            "imported vault entries"
        );
        Ok(report)
    }

    /// Re-key the vault under `new_master`.
    ///
    /// Every entry is decrypted with the current key and encrypted under a
    /// key from a fresh salt. Nothing is written unless all entries could
    /// be decrypted.
    pub fn change_master(&mut self, new_master: &str) -> Result<()> {
        if new_master.is_empty() {
            return Err(KitError::validation("Master password cannot be empty."));
        }

        let salt = fresh_salt();
        let key = MasterKey::derive(new_master, &salt)?;
        let entries = self
            .file
            .entries
            .iter()
            .map(|e| -> Result<Entry> {
                let plain = self.key.decrypt(&e.password).map_err(|err| {
                    KitError::Crypto(format!(
                        "Cannot re-encrypt the entry for {}: {err}",
                        e.website
                    ))
                })?;
                Ok(Entry {
                    password: key.encrypt(&plain)?,
                    ..e.clone()
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let next = VaultFile {
            version: VAULT_FORMAT_VERSION,
            salt: salt_to_text(&salt),
            verifier: key.seal_canary()?,
            entries,
        };
        self.commit(next)?;
        self.key = key;
        info!(entries = self.len(), "changed vault master password");
        Ok(())
    }
}
