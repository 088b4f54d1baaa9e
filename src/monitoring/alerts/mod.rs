//! Alert delivery
//!
//! The budget tracker hands finished alerts to a [`Notifier`]. Without a webhook the
//! alert is only written to the log.

mod channels;
mod types;

pub use channels::{LogNotifier, MemoryNotifier, Notifier, WebhookNotifier};
pub use types::AlertMessage;

use crate::config::AlertingConfig;
use crate::utils::error::Result;
use crate::utils::logging::ScopedLogger;
use std::sync::Arc;

/// Pick the notifier described by `config`
pub fn notifier_from_config(
    config: &AlertingConfig,
    logger: Arc<dyn ScopedLogger>,
) -> Result<Arc<dyn Notifier>> {
    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(
            url.clone(),
            config.webhook_timeout(),
        )?)),
        None => Ok(Arc::new(LogNotifier::new(logger))),
    }
}
