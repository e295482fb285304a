use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, DenyAction};

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
    /// Uses `navguard/config.toml` under `dirs::config_dir()`, falling back
    /// to the current directory if there is none.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("navguard").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Every route id is non-empty and distinct
    /// - A guard redirect target, if set, is one of the configured routes
    ///   and not the guarded route itself
    pub fn validate(&self) -> Result<(), ConfigError> {
        let routes = self.routes.all();

        if routes.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "Route ids must not be empty".to_string(),
            });
        }

        let distinct: HashSet<&str> = routes.iter().copied().collect();
        if distinct.len() != routes.len() {
            return Err(ConfigError::ValidationError {
                message: "Route ids must be distinct".to_string(),
            });
        }

        if self.guard.on_deny == DenyAction::Redirect {
            let target = self.guard.redirect_target(&self.routes);
            if !distinct.contains(target) {
                return Err(ConfigError::ValidationError {
                    message: format!("Guard redirect target '{}' is not a configured route", target),
                });
            }
            if target == self.routes.guarded {
                return Err(ConfigError::ValidationError {
                    message: "Guard cannot redirect to the route it protects".to_string(),
                });
            }
        }

        Ok(())
    }
}
