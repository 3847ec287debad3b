//! Plain-file backend for machines without a usable keychain.
//!
//! The key is written as `{"api_key": "..."}`. On unix the directory is
//! created `0700` and the file `0600`.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{CredentialError, CredentialResult, SecretBackend};
use crate::config::app_dir;

const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Serialize, Deserialize)]
struct StoredKey {
    #[serde(default)]
    api_key: String,
}

#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> CredentialResult<Self> {
        let dir = app_dir().ok_or(CredentialError::NoConfigDir)?;
        Ok(Self::new(dir.join(CREDENTIALS_FILE)))
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> CredentialError {
        CredentialError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};

    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)?;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
}

impl SecretBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    fn save(&self, api_key: &str) -> CredentialResult<()> {
        if let Some(dir) = self.path.parent() {
            create_private_dir(dir).map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_vec_pretty(&StoredKey {
            api_key: api_key.to_string(),
        })?;
        write_private_file(&self.path, &json).map_err(|e| self.io_error(e))?;

        tracing::debug!("Saved API key to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> CredentialResult<String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(CredentialError::NotFound),
            Err(e) => return Err(self.io_error(e)),
        };

        let stored: StoredKey = serde_json::from_str(&raw)?;
        if stored.api_key.trim().is_empty() {
            return Err(CredentialError::NotFound);
        }
        Ok(stored.api_key)
    }

    fn delete(&self) -> CredentialResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CredentialError::NotFound),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
