//! Configuration management for comment-mod

use crate::error::{ModError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote backend settings
    pub backend: BackendConfig,
    /// Content store settings
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Remote form-backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Site identity the pending queue belongs to
    pub site_id: String,
    /// Bearer credential for the backend API
    pub token: String,
    /// Base URL of the backend API
    pub api_base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            site_id: String::new(),
            token: String::new(),
            api_base_url: "https://api.netlify.com/api/v1".to_string(),
        }
    }
}

/// Content store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Root directory approved comments are written under
    pub content_root: PathBuf,
    /// Optional template file overriding the built-in record template
    pub template_path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            content_root: PathBuf::from("content/comments"),
            template_path: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| ModError::Toml(e.to_string()))
    }

    /// Check that everything required for a moderation run is present
    pub fn validate(&self) -> Result<()> {
        if self.backend.site_id.is_empty() {
            return Err(ModError::Config(
                "site id is not set (use --site-id or NETLIFY_SITE_ID)".to_string(),
            ));
        }
        if self.backend.token.is_empty() {
            return Err(ModError::Config(
                "backend token is not set (use --token or NETLIFY_TOKEN)".to_string(),
            ));
        }
        Ok(())
    }
}
