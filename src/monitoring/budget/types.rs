//! Error budget state and snapshots

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mutable counters behind the tracker's lock
#[derive(Debug, Default, Clone)]
pub(super) struct BudgetState {
    pub total_requests: u64,
    pub error_count: u64,
    /// `None` until the first warning fires
    pub last_alert_time: Option<DateTime<Utc>>,
}

impl BudgetState {
    pub fn error_rate(&self) -> f64 {
        if self.total_requests == 0 {
            return 0.0;
        }
        self.error_count as f64 / self.total_requests as f64
    }

    pub fn snapshot(&self) -> ErrorBudgetMetrics {
        ErrorBudgetMetrics {
            total_requests: self.total_requests,
            error_count: self.error_count,
            last_alert_time: self.last_alert_time,
            error_rate: self.error_rate(),
        }
    }
}

/// Point-in-time copy of the tracker's counters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBudgetMetrics {
    pub total_requests: u64,
    pub error_count: u64,
    pub last_alert_time: Option<DateTime<Utc>>,
    pub error_rate: f64,
}

/// Outcome of one budget evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetEvaluation {
    /// Error rate the decision was based on
    pub error_rate: f64,
    /// The warning tier logged an alert
    pub warning_fired: bool,
    /// The critical tier logged and notified
    pub critical_fired: bool,
}
