//! System keychain backend (macOS Keychain, Windows Credential Manager,
//! Linux Secret Service) via the `keyring` crate.

use keyring::Entry;

use super::{CredentialError, CredentialResult, SecretBackend};

const SERVICE_NAME: &str = "simplelogin-cli";
const ACCOUNT: &str = "default";

#[derive(Debug, Default)]
pub struct KeyringBackend;

impl KeyringBackend {
    pub fn new() -> Self {
        Self
    }

    fn entry() -> CredentialResult<Entry> {
        Entry::new(SERVICE_NAME, ACCOUNT).map_err(|e| CredentialError::Keyring(e.to_string()))
    }
}

fn map_keyring_error(err: keyring::Error) -> CredentialError {
    match err {
        keyring::Error::NoEntry => CredentialError::NotFound,
        e => CredentialError::Keyring(e.to_string()),
    }
}

impl SecretBackend for KeyringBackend {
    fn name(&self) -> &'static str {
        "keyring"
    }

    fn save(&self, api_key: &str) -> CredentialResult<()> {
        Self::entry()?
            .set_password(api_key)
            .map_err(map_keyring_error)?;
        tracing::debug!("Saved API key to keychain");
        Ok(())
    }

    fn load(&self) -> CredentialResult<String> {
        let key = Self::entry()?.get_password().map_err(map_keyring_error)?;
        if key.trim().is_empty() {
            return Err(CredentialError::NotFound);
        }
        Ok(key)
    }

    fn delete(&self) -> CredentialResult<()> {
        Self::entry()?
            .delete_credential()
            .map_err(map_keyring_error)
    }
}
