//! Configuration management for flightbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "flightbook";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "FLIGHTBOOK_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `FLIGHTBOOK_`, sections split on `__`)
/// 2. TOML config file at `~/.config/flightbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Flight file configuration.
    pub store: StoreConfig,
    /// Interactive prompt configuration.
    pub prompt: PromptConfig,
    /// Schema validation configuration.
    pub validation: ValidationConfig,
}

/// Flight file configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Flight file used when a command is given no file name.
    pub default_file: Option<PathBuf>,
    /// Pretty-print JSON when saving.
    pub pretty: bool,
}

/// Interactive prompt configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Ask on the terminal for omitted options. When disabled, an omitted
    /// option is an error.
    pub enabled: bool,
}

/// Schema validation configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Abort the command when the flight file violates the schema.
    pub strict: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from all default sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.store.default_file {
            if path.as_os_str().is_empty() {
                return Err(Error::ConfigValidation {
                    message: "store.default_file must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the flight file for a command, falling back to the configured
    /// default.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFlightFile`] if neither is available.
    pub fn flight_file(&self, given: Option<PathBuf>) -> Result<PathBuf> {
        given
            .or_else(|| self.store.default_file.clone())
            .ok_or(Error::NoFlightFile)
    }
}
