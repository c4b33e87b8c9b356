//! Small file helpers shared by the tools that persist JSON state.

use crate::error::{KitError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::Path;

/// File permissions for files holding secrets
const PRIVATE_FILE_PERMISSIONS: u32 = 0o600;

/// Create the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Read and deserialize a JSON file.
///
/// A missing file is reported as [`KitError::NotFound`] so callers can
/// tell "no state yet" apart from a corrupt file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            KitError::NotFound(format!("{}", path.display()))
        } else {
            KitError::Io(e)
        }
    })?;
    serde_json::from_str(&content).map_err(|e| {
        KitError::Serialization(format!("Invalid JSON in '{}': {}", path.display(), e))
    })
}

/// Like [`read_json`] but yields `T::default()` when the file is missing.
pub fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    match read_json(path) {
        Ok(value) => Ok(value),
        Err(KitError::NotFound(_)) => Ok(T::default()),
        Err(e) => Err(e),
    }
}

/// Serialize `value` as pretty JSON and replace `path` atomically.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    write_atomic(path, content.as_bytes(), false)
}

/// Same as [`write_json_atomic`], restricting the file to its owner.
pub fn write_json_private<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    write_atomic(path, content.as_bytes(), true)
}

/// Replace `path` with `bytes` through a temp file in the same directory,
/// so readers never see a half-written file.
pub fn write_file_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    write_atomic(path, bytes, false)
}

fn write_atomic(path: &Path, bytes: &[u8], private: bool) -> Result<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent.to_path_buf(),
        None => std::env::current_dir()?,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    tmp.write_all(bytes)?;
    tmp.flush()?;

    #[cfg(unix)]
    if private {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(tmp.path(), fs::Permissions::from_mode(PRIVATE_FILE_PERMISSIONS))?;
    }
    #[cfg(not(unix))]
    let _ = private;

    tmp.persist(path).map_err(|e| KitError::Io(e.error))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}
