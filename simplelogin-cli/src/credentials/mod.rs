//! API key storage
//!
//! The key lives in the system keychain when one is available and in a
//! private JSON file otherwise. [`CredentialStore`] hides which one was used.

mod file_store;
mod keyring_store;

use std::path::PathBuf;

use thiserror::Error;

pub use file_store::FileBackend;
pub use keyring_store::KeyringBackend;

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no API key found; run `simplelogin-cli auth set-key <KEY>` first")]
    NotFound,

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed credentials file: {0}")]
    Format(#[from] serde_json::Error),

    #[error("could not determine the user config directory")]
    NoConfigDir,
}

pub type CredentialResult<T> = Result<T, CredentialError>;

/// One place an API key can be kept.
pub trait SecretBackend: Send + Sync {
    /// Short name used in log and status messages.
    fn name(&self) -> &'static str;

    fn save(&self, api_key: &str) -> CredentialResult<()>;

    /// [`CredentialError::NotFound`] when nothing is stored.
    fn load(&self) -> CredentialResult<String>;

    fn delete(&self) -> CredentialResult<()>;
}

/// Primary backend with a fallback.
///
/// Every operation tries the primary first. When it fails the fallback is
/// used, and if that fails too its error is the one reported.
pub struct CredentialStore {
    primary: Box<dyn SecretBackend>,
    fallback: Box<dyn SecretBackend>,
}

impl CredentialStore {
    pub fn new(primary: Box<dyn SecretBackend>, fallback: Box<dyn SecretBackend>) -> Self {
        Self { primary, fallback }
    }

    /// Keychain first, `<config_dir>/simplelogin-cli/credentials.json` second.
    pub fn system() -> CredentialResult<Self> {
        Ok(Self::new(
            Box::new(KeyringBackend::new()),
            Box::new(FileBackend::default_location()?),
        ))
    }

    /// Store `api_key`, returning the name of the backend that took it.
    pub fn save(&self, api_key: &str) -> CredentialResult<&'static str> {
        match self.primary.save(api_key) {
            Ok(()) => Ok(self.primary.name()),
            Err(e) => {
                tracing::warn!(
                    "{} not available ({e}), falling back to {}",
                    self.primary.name(),
                    self.fallback.name()
                );
                self.fallback.save(api_key)?;
                Ok(self.fallback.name())
            }
        }
    }

    pub fn load(&self) -> CredentialResult<String> {
        match self.primary.load() {
            Ok(key) => Ok(key),
            Err(e) => {
                tracing::debug!("{} load failed: {e}", self.primary.name());
                self.fallback.load()
            }
        }
    }

    pub fn delete(&self) -> CredentialResult<()> {
        match self.primary.delete() {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!("{} delete failed: {e}", self.primary.name());
                self.fallback.delete()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Backend whose every operation fails, like a headless box with no keychain.
    struct Unavailable;

    impl SecretBackend for Unavailable {
        fn name(&self) -> &'static str {
            "unavailable"
        }

        fn save(&self, _api_key: &str) -> CredentialResult<()> {
            Err(CredentialError::Keyring("no secret service".to_string()))
        }

        fn load(&self) -> CredentialResult<String> {
            Err(CredentialError::Keyring("no secret service".to_string()))
        }

        fn delete(&self) -> CredentialResult<()> {
            Err(CredentialError::Keyring("no secret service".to_string()))
        }
    }

    #[derive(Default)]
    struct Memory(Mutex<Option<String>>);

    impl SecretBackend for Memory {
        fn name(&self) -> &'static str {
            "memory"
        }

        fn save(&self, api_key: &str) -> CredentialResult<()> {
            *self.0.lock().unwrap() = Some(api_key.to_string());
            Ok(())
        }

        fn load(&self) -> CredentialResult<String> {
            self.0.lock().unwrap().clone().ok_or(CredentialError::NotFound)
        }

        fn delete(&self) -> CredentialResult<()> {
            self.0.lock().unwrap().take().map(|_| ()).ok_or(CredentialError::NotFound)
        }
    }

    fn file_backend(dir: &tempfile::TempDir) -> FileBackend {
        FileBackend::new(dir.path().join("simplelogin-cli").join("credentials.json"))
    }

    #[test]
    fn falls_back_to_file_when_keyring_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(Box::new(Unavailable), Box::new(file_backend(&dir)));

        assert_eq!(store.save("abc123").unwrap(), "file");
        assert_eq!(store.load().unwrap(), "abc123");

        store.delete().unwrap();
        assert!(matches!(store.load(), Err(CredentialError::NotFound)));
    }

    #[test]
    fn primary_wins_when_available() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::new(Box::new(Memory::default()), Box::new(file_backend(&dir)));

        assert_eq!(store.save("k").unwrap(), "memory");
        assert_eq!(store.load().unwrap(), "k");
        assert!(!dir.path().join("simplelogin-cli").exists());
    }

    #[test]
    fn both_failing_reports_fallback_error() {
        let store = CredentialStore::new(Box::new(Unavailable), Box::new(Memory::default()));
        assert!(matches!(store.load(), Err(CredentialError::NotFound)));
        assert!(matches!(store.delete(), Err(CredentialError::NotFound)));
    }
}
