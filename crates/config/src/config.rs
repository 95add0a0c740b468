//! Core configuration struct and loading logic.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Environment variable overriding the task service URL.
pub const API_URL_ENV: &str = "TASKDECK_API_URL";

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

const fn default_toast_duration_ms() -> u64 {
    3000
}

/// Task service settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task service, e.g. `http://localhost:3000`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Toast notification settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// How long a toast stays visible, in milliseconds.
    #[serde(default = "default_toast_duration_ms")]
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_toast_duration_ms(),
        }
    }
}

/// The main configuration struct for the taskdeck application.
///
/// # Configuration Sources (Priority)
///
/// 1. Environment variable (`TASKDECK_API_URL`)
/// 2. Local config (`./taskdeck.json5` or `./taskdeck.json`)
/// 3. User config (`<config dir>/taskdeck/config.json5` or `config.json`)
/// 4. Built-in defaults
///
/// # Examples
///
/// ```
/// use taskdeck_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "http://localhost:3000");
/// assert_eq!(config.toast.duration_ms, 3000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Task service settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Toast notification settings.
    #[serde(default)]
    pub toast: ToastConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations, then applies
    /// environment overrides.
    ///
    /// If no configuration file is found, defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the resulting configuration is invalid.
    pub fn load() -> Result<Self> {
        let config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        let config = config.with_env_override(std::env::var(API_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, without env overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Self = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies the service-URL environment override, if set and non-empty.
    #[must_use]
    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url
            && !url.trim().is_empty()
        {
            self.api.base_url = url;
        }
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServiceUrl`] if the service URL is
    /// blank or does not look like an HTTP URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskdeck_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.api.base_url = "ftp://tasks".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::InvalidServiceUrl(
                "service URL is empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidServiceUrl(format!(
                "expected an http(s) URL, got {url:?}"
            )));
        }
        Ok(())
    }
}
