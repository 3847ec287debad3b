//! Application configuration
//!
//! Resolved once at startup and passed down explicitly. Precedence, lowest to
//! highest: built-in default, `config.json`, `SIMPLELOGIN_API_URL`, `--api-url`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use simplelogin_client::DEFAULT_BASE_URL;

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "simplelogin-cli";
const CONFIG_FILE: &str = "config.json";
/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "SIMPLELOGIN_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// `<config_dir>/simplelogin-cli`, if the platform has a config dir.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR))
}

impl AppConfig {
    /// Read a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        let mut config: Self = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        if config.api_url.trim().is_empty() {
            config.api_url = DEFAULT_BASE_URL.to_string();
        }
        Ok(config)
    }

    /// Apply overrides on top of a file config. Blank overrides are ignored.
    pub fn with_overrides(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        for url in [env_url, flag_url].into_iter().flatten() {
            let url = url.trim();
            if !url.is_empty() {
                self.api_url = url.to_string();
            }
        }
        self
    }

    /// Resolve the effective configuration for this invocation.
    pub fn resolve(flag_url: Option<String>) -> Result<Self> {
        let file_config = match app_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILE))?,
            None => Self::default(),
        };
        let env_url = std::env::var(API_URL_ENV).ok();
        let config = file_config.with_overrides(env_url, flag_url);
        tracing::debug!("Using API URL {}", config.api_url);
        Ok(config)
    }
}
