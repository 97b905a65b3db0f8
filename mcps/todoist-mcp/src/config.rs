//! Configuration loading for todoist-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables TODOIST_API_TOKEN and TODOIST_API_BASE_URL
//! 2. Environment variable TODOIST_MCP_CONFIG_PATH
//! 3. ~/.binks/todoist.toml
//! 4. Default values

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Todoist API connection settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Comment retrieval settings
    #[serde(default)]
    pub comments: CommentsConfig,
}

/// Todoist API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal API token (usually supplied via TODOIST_API_TOKEN)
    #[serde(default)]
    pub token: Option<String>,
    /// Base URL for the v1 API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL for the REST v2 comments listing used to discover attachments
    #[serde(default = "default_base_url")]
    pub legacy_base_url: String,
    /// Per-request timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

// Hand-written so the token never ends up in logs
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("legacy_base_url", &self.legacy_base_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Comment retrieval settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentsConfig {
    /// Upper bound on pages fetched for a single task
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_base_url() -> String {
    "https://api.todoist.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_pages() -> usize {
    100
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: default_base_url(),
            legacy_base_url: default_base_url(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            max_pages: default_max_pages(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::find_config_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(_) => {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
            None => {
                tracing::info!("No config path specified, using defaults");
                Self::default()
            }
        };

        if let Ok(token) = std::env::var("TODOIST_API_TOKEN") {
            config.api.token = Some(token);
        }
        if let Ok(url) = std::env::var("TODOIST_API_BASE_URL") {
            config.api.base_url = url;
        }

        Ok(config)
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        tracing::info!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    fn find_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("TODOIST_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        dirs::home_dir().map(|home| home.join(".binks").join("todoist.toml"))
    }
}
