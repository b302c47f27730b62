//! Configuration system for kindset.
//!
//! Load collection configuration from TOML or YAML to control how bulk
//! query results are aggregated, how much room collections reserve, and
//! which events the console prints.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use kindset_config::CollectionConfig;
//! use kindset_core::Aggregation;
//!
//! let config = CollectionConfig::from_toml_str(r#"
//!     aggregation = "any"
//!     initial_capacity = 64
//!
//!     [console]
//!     log_filter = "kindset_core=debug"
//! "#).unwrap();
//!
//! assert_eq!(config.aggregation, Aggregation::Any);
//! assert_eq!(config.initial_capacity, Some(64));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use kindset_config::CollectionConfig;
//!
//! let config = CollectionConfig::load("kindset.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use kindset_core::Aggregation;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound accepted for `initial_capacity`.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main collection configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CollectionConfig {
    /// How `for_each_query` results are reported.
    #[serde(default)]
    pub aggregation: Aggregation,

    /// Elements to reserve room for when a collection is created.
    #[serde(default)]
    pub initial_capacity: Option<usize>,

    /// Console output configuration.
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl CollectionConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that parse but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(capacity) = self.initial_capacity {
            if capacity > MAX_INITIAL_CAPACITY {
                return Err(ConfigError::Invalid(format!(
                    "initial_capacity {} exceeds {}",
                    capacity, MAX_INITIAL_CAPACITY
                )));
            }
        }
        if let Some(filter) = &self.console.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::Invalid(
                    "console.log_filter must not be blank".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Sets the aggregation policy.
    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    /// Sets the initial capacity.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Sets the console log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.console.log_filter = Some(filter.into());
        self
    }

    /// Returns the capacity to reserve, zero when unset.
    pub fn capacity(&self) -> usize {
        self.initial_capacity.unwrap_or(0)
    }
}

/// Console output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConsoleConfig {
    /// `EnvFilter` directive, e.g. `"kindset_core=debug"`.
    pub log_filter: Option<String>,

    /// Whether to print the banner on init.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            banner: default_banner(),
        }
    }
}

fn default_banner() -> bool {
    true
}
