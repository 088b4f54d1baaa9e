//! Helper functions for creating specific error types

use super::types::BudgetError;

impl BudgetError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn alert<S: Into<String>>(message: S) -> Self {
        Self::Alert(message.into())
    }

    /// Whether the error came from delivering an alert rather than from local setup
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, Self::Alert(_) | Self::HttpClient(_))
    }
}
