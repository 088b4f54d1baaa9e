//! Configuration management
//!
//! Settings come from a YAML file or from environment variables. Every section has
//! defaults, so an empty file or an empty environment yields a usable config.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{BudgetError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Logger settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Error budget thresholds
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Alert delivery
    #[serde(default)]
    pub alerting: AlertingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BudgetError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate YAML content
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| BudgetError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate_all()?;
        Ok(config)
    }

    /// Load configuration from environment variables, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file loaded: {}", e);
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            logging: LoggingConfig::from_lookup(&lookup)?,
            budget: BudgetConfig::from_lookup(&lookup)?,
            alerting: AlertingConfig::from_lookup(&lookup)?,
        };

        config.validate_all()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate_all(&self) -> Result<()> {
        self.validate()
            .map_err(|e| BudgetError::Config(format!("Invalid configuration: {}", e)))
    }
}

pub(crate) fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| BudgetError::Config(format!("Invalid value for {}: {}", key, e))),
        _ => Ok(None),
    }
}
