use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

/// Values given on the command line. `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub country: Option<String>,
    pub name: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/unibrowse/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("unibrowse").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
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

    /// Applies command line values on top of the loaded file.
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(base_url) = overrides.base_url {
            self.source.base_url = base_url;
        }
        if let Some(country) = overrides.country {
            self.source.country = country;
        }
        if let Some(name) = overrides.name {
            self.source.name = Some(name);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The source URL is http(s) and a country is set
    /// - Timeouts and tick rate are non-zero
    /// - Names get at least a few visible columns
    /// - The two error messages can be told apart
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.source.base_url.trim();
        if base_url.is_empty() {
            return Err(validation("source.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(validation(format!(
                "source.base_url '{}' must start with http:// or https://",
                base_url
            )));
        }
        if self.source.country.trim().is_empty() {
            return Err(validation("source.country must not be empty"));
        }
        if self.source.timeout_seconds == 0 || self.source.connect_timeout_seconds == 0 {
            return Err(validation("source timeouts must be greater than zero"));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(validation("ui.tick_rate_ms must be greater than zero"));
        }
        if self.ui.name_max_width < 4 {
            return Err(validation("ui.name_max_width must be at least 4"));
        }
        if self.messages.error_generic == self.messages.error_io {
            return Err(validation(
                "messages.error_generic and messages.error_io must differ",
            ));
        }

        Ok(())
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        message: message.into(),
    }
}
