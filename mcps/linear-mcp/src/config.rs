//! Configuration loading for linear-mcp
//!
//! Configuration is loaded from:
//! 1. Environment variables LINEAR_API_URL and LINEAR_ACCESS_TOKEN
//! 2. Environment variable LINEAR_MCP_CONFIG_PATH (TOML file)
//! 3. ~/.config/linear-mcp.toml
//! 4. Default values
//!
//! The access token is the delegated OAuth credential injected by the
//! hosting platform; this server never acquires or refreshes tokens.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Linear API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Linear API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Delegated OAuth bearer token
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    /// Request timeout applied to the HTTP client
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

// Default value functions
fn default_url() -> String {
    "https://api.linear.app/graphql".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            token: None,
            timeout_seconds: default_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults, then apply
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_path();

        let mut config = if let Some(path) = config_path {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                let content = std::fs::read_to_string(&path)?;
                Self::from_toml(&content)?
            } else {
                tracing::info!("Config file not found, using defaults");
                Self::default()
            }
        } else {
            tracing::info!("No config path available, using defaults");
            Self::default()
        };

        // Environment variables take priority over the file layer.
        if let Ok(url) = std::env::var("LINEAR_API_URL") {
            config.api.url = url;
        }
        if let Ok(token) = std::env::var("LINEAR_ACCESS_TOKEN") {
            if !token.is_empty() {
                config.api.token = Some(token);
            }
        }

        Url::parse(&config.api.url)
            .with_context(|| format!("invalid Linear endpoint URL: {}", config.api.url))?;

        Ok(config)
    }

    /// Parse the TOML file layer.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config file")
    }

    /// Find the configuration file path
    fn find_config_path() -> Option<PathBuf> {
        // 1. Check environment variable
        if let Ok(path) = std::env::var("LINEAR_MCP_CONFIG_PATH") {
            return Some(PathBuf::from(path));
        }

        // 2. Check ~/.config/linear-mcp.toml
        if let Ok(home) = std::env::var("HOME") {
            let path = PathBuf::from(home).join(".config").join("linear-mcp.toml");
            return Some(path);
        }

        None
    }
}
