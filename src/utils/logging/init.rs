//! Process-wide `tracing` subscriber setup

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{BudgetError, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Only the first call in a
/// process installs anything; later calls keep the existing subscriber and return
/// `Ok(())`.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already installed, keeping it");
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    match installed {
        Ok(()) => Ok(()),
        // Another caller won the race to install
        Err(_) if tracing::dispatcher::has_been_set() => Ok(()),
        Err(e) => Err(BudgetError::config(format!(
            "Failed to install tracing subscriber: {}",
            e
        ))),
    }
}
