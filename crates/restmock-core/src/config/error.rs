//! Error types for client configuration loading.

use std::error::Error;
use std::fmt;

/// Configuration loading error. Every variant carries the offending file path.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io {
        path: String,
        source: std::io::Error,
    },
    /// Config file is not valid JSON or JSONC
    Json {
        path: String,
        source: serde_json::Error,
    },
    /// Config file is not valid YAML
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    /// Extension is not one of yaml, yml, json, jsonc
    UnknownFileType(String),
}

impl ConfigError {
    /// Path of the config file the error refers to
    pub fn path(&self) -> &str {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::Json { path, .. }
            | ConfigError::Yaml { path, .. }
            | ConfigError::UnknownFileType(path) => path,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        match self {
            ConfigError::Io { source, .. } => write!(f, "Cannot read {}: {}", path, source),
            ConfigError::Json { source, .. } => write!(f, "Invalid JSON in {}: {}", path, source),
            ConfigError::Yaml { source, .. } => write!(f, "Invalid YAML in {}: {}", path, source),
            ConfigError::UnknownFileType(_) => write!(f, "Unknown config file type: {}", path),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Json { source, .. } => Some(source),
            ConfigError::Yaml { source, .. } => Some(source),
            ConfigError::UnknownFileType(_) => None,
        }
    }
}
