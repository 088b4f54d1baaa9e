//! Error budget configuration

use crate::config::parse_var;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// Hard budget: 1% of requests may fail
pub const DEFAULT_ERROR_BUDGET: f64 = 0.01;

/// Early warning: 0.5%
pub const DEFAULT_ALERT_THRESHOLD: f64 = 0.005;

/// Minimum gap between two warning-tier alerts
pub const DEFAULT_COOLDOWN_MS: u64 = 60_000;

/// Notifier channel used for budget-exceeded alerts
pub const DEFAULT_ALERT_CHANNEL: &str = "#alerts";

/// Thresholds and cooldown used by the error budget tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Critical threshold (fraction of failed requests)
    #[serde(default = "default_error_budget")]
    pub error_budget: f64,
    /// Warning threshold, strictly below `error_budget`
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,
    /// Warning cooldown in milliseconds
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Notifier channel for critical alerts
    #[serde(default = "default_alert_channel")]
    pub alert_channel: String,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            error_budget: default_error_budget(),
            alert_threshold: default_alert_threshold(),
            cooldown_ms: default_cooldown_ms(),
            alert_channel: default_alert_channel(),
        }
    }
}

impl BudgetConfig {
    /// Warning cooldown as a chrono duration
    pub fn cooldown(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.cooldown_ms).unwrap_or(i64::MAX))
    }

    /// Reads `ERROR_BUDGET`, `ERROR_BUDGET_ALERT_THRESHOLD`,
    /// `ERROR_BUDGET_COOLDOWN_MS` and `ERROR_BUDGET_ALERT_CHANNEL`
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(budget) = parse_var::<f64, _>(lookup, "ERROR_BUDGET")? {
            config.error_budget = budget;
        }
        if let Some(threshold) = parse_var::<f64, _>(lookup, "ERROR_BUDGET_ALERT_THRESHOLD")? {
            config.alert_threshold = threshold;
        }
        if let Some(cooldown) = parse_var::<u64, _>(lookup, "ERROR_BUDGET_COOLDOWN_MS")? {
            config.cooldown_ms = cooldown;
        }
        if let Some(channel) =
            lookup("ERROR_BUDGET_ALERT_CHANNEL").filter(|channel| !channel.trim().is_empty())
        {
            config.alert_channel = channel;
        }

        Ok(config)
    }
}

fn default_error_budget() -> f64 {
    DEFAULT_ERROR_BUDGET
}

fn default_alert_threshold() -> f64 {
    DEFAULT_ALERT_THRESHOLD
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

fn default_alert_channel() -> String {
    DEFAULT_ALERT_CHANNEL.to_string()
}
