//! Configuration handling.
//!
//! Configuration is stored in `.centerpick/config.yaml` and includes:
//! - The center sampling backend URL and request timeout
//! - Where the persisted picker state is kept

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};
use crate::types::STATE_DIR;

pub const BACKEND_URL_ENV: &str = "CENTERPICK_BACKEND_URL";

const DEFAULT_BACKEND_URL: &str = "http://localhost:2200";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    /// JSON file holding the persisted center state
    #[serde(default = "default_state_path")]
    pub state_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_state_path() -> PathBuf {
    PathBuf::from(STATE_DIR).join("state.json")
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            state_path: default_state_path(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> PathBuf {
        PathBuf::from(STATE_DIR).join("config.yaml")
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = fs::read_to_string(path)?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };

        // Environment variable wins over the file
        if let Ok(url) = env::var(BACKEND_URL_ENV)
            && !url.is_empty()
        {
            config.backend.url = url;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.backend.timeout_secs == 0 {
            return Err(PickerError::Config(
                "backend.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.backend.url.trim().is_empty() {
            return Err(PickerError::Config("backend.url cannot be empty".to_string()));
        }
        Ok(())
    }
}
