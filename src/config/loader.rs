use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Primary environment variable for the store base URL.
pub const ENV_STORE_URL: &str = "CREATOR_STORE_URL";
/// Primary environment variable for the store access key.
pub const ENV_STORE_KEY: &str = "CREATOR_STORE_KEY";
/// Fallback names used by Supabase-hosted deployments.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_KEY: &str = "SUPABASE_ANON_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/creator-catalog/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("creator-catalog").join("config.toml")
    }

    /// Loads configuration from a specific file.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Overlays URL and key from the environment.
    ///
    /// `lookup` maps a variable name to its value; empty values are ignored.
    /// The Supabase names are only consulted when the primary name is unset.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, fallback: &str| {
            lookup(primary)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| lookup(fallback).filter(|v| !v.trim().is_empty()))
        };

        if let Some(url) = read(ENV_STORE_URL, ENV_SUPABASE_URL) {
            self.store.base_url = Some(url);
        }
        if let Some(key) = read(ENV_STORE_KEY, ENV_SUPABASE_KEY) {
            self.store.api_key = Some(key);
        }
        self.normalize();
    }

    /// Trims whitespace and trailing slashes; blank values become `None`.
    pub fn normalize(&mut self) {
        self.store.base_url = self
            .store
            .base_url
            .take()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        self.store.api_key = self
            .store
            .api_key
            .take()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());
        self.store.resource = self.store.resource.trim().to_string();
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The resource name is non-empty and contains no path separators
    /// - The base URL, when present, uses http or https
    ///
    /// A missing URL or key is not an error here; the connector reports it
    /// when a request is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resource = &self.store.resource;
        if resource.is_empty() || resource.contains('/') || resource.contains('?') {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid resource name '{}'", resource),
            });
        }

        if let Some(url) = &self.store.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    message: format!("Store URL '{}' must start with http:// or https://", url),
                });
            }
        }

        Ok(())
    }
}
