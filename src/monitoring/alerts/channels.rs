//! Notifier implementations

use super::types::AlertMessage;
use crate::log_fields;
use crate::utils::error::{BudgetError, Result};
use crate::utils::logging::ScopedLogger;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Outbound alert delivery
#[async_trait::async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver one alert. Retries and timeouts are the implementation's concern.
    async fn notify(&self, alert: &AlertMessage) -> Result<()>;

    /// Get notifier name
    fn name(&self) -> &str;
}

/// Writes the alert to the log at info level
#[derive(Debug, Clone)]
pub struct LogNotifier {
    logger: Arc<dyn ScopedLogger>,
}

impl LogNotifier {
    pub fn new(logger: Arc<dyn ScopedLogger>) -> Self {
        Self { logger }
    }
}

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, alert: &AlertMessage) -> Result<()> {
        self.logger.info(
            "Alert sent",
            Some(log_fields! {
                "channel" => &alert.channel,
                "message" => &alert.message,
            }),
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Posts `{"channel": ..., "text": ...}` to a webhook
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    url: String,
    client: reqwest::Client,
}

impl WebhookNotifier {
    /// Create a webhook notifier whose requests give up after `timeout`
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, alert: &AlertMessage) -> Result<()> {
        debug!("Posting alert for {} to webhook", alert.channel);

        let payload = serde_json::json!({
            "channel": alert.channel,
            "text": alert.message,
        });

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| BudgetError::Alert(format!("Failed to send webhook notification: {}", e)))?;

        if !response.status().is_success() {
            return Err(BudgetError::Alert(format!(
                "Alert webhook returned status: {}",
                response.status()
            )));
        }

        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// Keeps delivered alerts in memory. Clones share the same list.
#[derive(Debug, Default, Clone)]
pub struct MemoryNotifier {
    sent: Arc<Mutex<Vec<AlertMessage>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts delivered so far, oldest first
    pub fn sent(&self) -> Vec<AlertMessage> {
        self.sent.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.sent.lock().len()
    }
}

#[async_trait::async_trait]
impl Notifier for MemoryNotifier {
    async fn notify(&self, alert: &AlertMessage) -> Result<()> {
        self.sent.lock().push(alert.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
