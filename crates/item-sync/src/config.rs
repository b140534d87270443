//! Collection Resource Configuration
//!
//! Persisted as JSON next to the app data, like the other per-install settings.

use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/items";
pub const CONFIG_FILE_NAME: &str = "resource_config.json";

/// Where the item collection lives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub api_url: String,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ResourceConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into().trim().to_string(),
        }
    }

    /// The URL must be absolute http(s)
    pub fn validate(&self) -> DomainResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|e| DomainError::InvalidInput(format!("{}: {}", self.api_url, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(DomainError::InvalidInput(format!(
                "unsupported scheme '{}' in {}",
                other, self.api_url
            ))),
        }
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load the saved config. A missing or unreadable file yields the default.
pub fn load_config(dir: &Path) -> ResourceConfig {
    let path = config_path(dir);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(_) => return ResourceConfig::default(),
    };

    match serde_json::from_str::<ResourceConfig>(&content) {
        Ok(config) if config.validate().is_ok() => config,
        Ok(config) => {
            log::warn!("Ignoring invalid api_url in {}: {}", path.display(), config.api_url);
            ResourceConfig::default()
        }
        Err(e) => {
            log::warn!("Failed to parse {}: {}", path.display(), e);
            ResourceConfig::default()
        }
    }
}

/// Validate, then write the config to `dir`
pub fn save_config(dir: &Path, config: &ResourceConfig) -> DomainResult<()> {
    config.validate()?;

    std::fs::create_dir_all(dir)
        .map_err(|e| DomainError::Internal(format!("Failed to create {}: {}", dir.display(), e)))?;
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    let path = config_path(dir);
    std::fs::write(&path, json)
        .map_err(|e| DomainError::Internal(format!("Failed to write {}: {}", path.display(), e)))
}
