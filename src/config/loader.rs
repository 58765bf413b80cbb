use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::feed::{page_size, Category, CategorySet};

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
    /// Uses `~/.config/mbti-board/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("mbti-board").join("config.toml")
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
    /// - Page size is at least 1
    /// - Base URL is set and the timeout is at least one second
    /// - Category labels are non-empty and unique
    /// - The composer category is one of the labels
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.items_per_page()?;

        if self.remote.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "remote.base_url must not be empty".to_string(),
            });
        }

        if self.remote.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "remote.timeout_seconds must be at least 1".to_string(),
            });
        }

        self.composer_category()?;
        Ok(())
    }

    pub fn items_per_page(&self) -> Result<NonZeroUsize, ConfigError> {
        page_size(self.defaults.items_per_page).map_err(|e| ConfigError::ValidationError {
            message: format!("defaults.items_per_page: {}", e),
        })
    }

    pub fn category_set(&self) -> Result<CategorySet, ConfigError> {
        CategorySet::new(self.categories.labels.iter().cloned()).map_err(|e| {
            ConfigError::ValidationError {
                message: format!("categories.labels: {}", e),
            }
        })
    }

    /// The category new posts are written under.
    pub fn composer_category(&self) -> Result<Category, ConfigError> {
        let categories = self.category_set()?;
        categories
            .resolve(&self.composer.category)
            .map_err(|e| ConfigError::ValidationError {
                message: format!("composer.category: {}", e),
            })
    }
}
