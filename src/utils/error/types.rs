//! Error types for the error budget crate

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, BudgetError>;

/// Main error type
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Alert delivery errors
    #[error("Alert error: {0}")]
    Alert(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
