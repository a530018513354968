//! Client configuration.
//!
//! Settings come from an optional YAML/JSON/JSONC file and are then
//! overridden by the `RESTMOCK_BASE_URL` and `PUBLIC_URL` environment variables.

pub mod error;
pub mod parser;

pub use error::ConfigError;

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Environment variable overriding [`ClientConfig::base_url`]
pub const BASE_URL_ENV: &str = "RESTMOCK_BASE_URL";
/// Environment variable overriding [`ClientConfig::public_url`]
pub const PUBLIC_URL_ENV: &str = "PUBLIC_URL";

/// Where and how to reach the mock server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the mock server
    pub base_url: String,
    /// Path prefix the server is deployed under, prepended to every request path
    pub public_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            public_url: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Load configuration from `path` (if any), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Read and parse a config file, picking the format from its extension.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        debug!(path = %shown, "loaded client config");
        parser::parse_config(&content, &shown)
    }

    /// Override fields from the variables `lookup` resolves.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            self.base_url = base_url;
        }
        if let Some(public_url) = lookup(PUBLIC_URL_ENV) {
            self.public_url = public_url;
        }
    }

    /// Base URL joined with the public path prefix, without a trailing slash.
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.public_url.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, prefix)
        }
    }
}
