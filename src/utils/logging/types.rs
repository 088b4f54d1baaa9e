//! Core types for the logging system

use crate::utils::error::BudgetError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use tracing::Level;

/// Structured key-value data attached to a record
pub type Fields = Map<String, Value>;

/// Log severity, ordered from least to most severe
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARN" | "WARNING" => Ok(LogLevel::Warn),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(BudgetError::config(format!("Invalid log level: {}", s))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Second argument of a log call: either structured fields or an error value
#[derive(Debug)]
pub enum LogPayload {
    Fields(Fields),
    Failure(Box<dyn StdError + Send + Sync>),
}

impl LogPayload {
    /// Wrap an error value
    pub fn failure<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Failure(Box::new(error))
    }

    /// Flatten the payload into fields. A failure becomes an `err` object holding
    /// its message and source chain.
    pub(crate) fn into_fields(self) -> Fields {
        match self {
            LogPayload::Fields(fields) => fields,
            LogPayload::Failure(error) => {
                let mut sources = Vec::new();
                let mut current = error.source();
                while let Some(source) = current {
                    sources.push(Value::String(source.to_string()));
                    current = source.source();
                }

                let mut err = Map::new();
                err.insert("message".to_string(), Value::String(error.to_string()));
                err.insert("sources".to_string(), Value::Array(sources));

                let mut fields = Map::new();
                fields.insert("err".to_string(), Value::Object(err));
                fields
            }
        }
    }
}

impl From<Fields> for LogPayload {
    fn from(fields: Fields) -> Self {
        LogPayload::Fields(fields)
    }
}

/// A finished record, already merged with bindings and redacted
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub fields: Fields,
}

impl LogRecord {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}
