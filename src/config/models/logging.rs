//! Logging configuration

use crate::config::parse_var;
use crate::utils::error::{BudgetError, Result};
use crate::utils::logging::{LogLevel, RedactionConfig};
use serde::{Deserialize, Serialize};

/// Output format of the process subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

impl std::str::FromStr for LogFormat {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" | "text" => Ok(LogFormat::Pretty),
            _ => Err(BudgetError::config(format!("Invalid log format: {}", s))),
        }
    }
}

/// Logger configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Records below this level are dropped
    #[serde(default)]
    pub level: LogLevel,
    /// Subscriber output format
    #[serde(default)]
    pub format: LogFormat,
    /// Field paths censored before emission
    #[serde(default)]
    pub redaction: RedactionConfig,
}

impl LoggingConfig {
    /// Reads `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = parse_var::<LogLevel, _>(lookup, "LOG_LEVEL")? {
            config.level = level;
        }
        if let Some(format) = parse_var::<LogFormat, _>(lookup, "LOG_FORMAT")? {
            config.format = format;
        }

        Ok(config)
    }
}
