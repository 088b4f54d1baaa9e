//! Alert delivery configuration

use crate::config::parse_var;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Alert delivery configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertingConfig {
    /// Webhook receiving critical alerts. Alerts are only logged when unset.
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Request timeout for the webhook, in seconds
    #[serde(default = "default_webhook_timeout_secs")]
    pub webhook_timeout_secs: u64,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            webhook_timeout_secs: default_webhook_timeout_secs(),
        }
    }
}

impl AlertingConfig {
    pub fn webhook_timeout(&self) -> Duration {
        Duration::from_secs(self.webhook_timeout_secs)
    }

    /// Reads `ALERT_WEBHOOK_URL` and `ALERT_WEBHOOK_TIMEOUT_SECS`
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            webhook_url: lookup("ALERT_WEBHOOK_URL").filter(|url| !url.trim().is_empty()),
            ..Self::default()
        };

        if let Some(timeout) = parse_var::<u64, _>(lookup, "ALERT_WEBHOOK_TIMEOUT_SECS")? {
            config.webhook_timeout_secs = timeout;
        }

        Ok(config)
    }
}

fn default_webhook_timeout_secs() -> u64 {
    10
}
