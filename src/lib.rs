//! # errbudget
//!
//! Error budget tracking for services that count request outcomes.
//!
//! Every request is recorded as a success or an error. A periodic evaluation
//! compares the error rate against two thresholds: above `alert_threshold` a
//! warning is logged at most once per cooldown window, above `error_budget` a
//! critical record is logged and an alert is pushed to the configured notifier.
//!
//! Logging goes through a scoped structured logger that carries bound context
//! and masks sensitive fields before anything is emitted.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use errbudget::{Config, ErrorBudgetTracker, init_tracing};
//!
//! #[tokio::main]
//! async fn main() -> errbudget::Result<()> {
//!     let config = Config::from_env()?;
//!     init_tracing(&config.logging)?;
//!
//!     let tracker = ErrorBudgetTracker::from_config(&config)?;
//!     tracker.record_success();
//!     tracker.record_error();
//!
//!     let evaluation = tracker.check_error_budget().await?;
//!     println!("error rate: {:.4}", evaluation.error_rate);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod monitoring;
pub mod utils;

pub use config::{AlertingConfig, BudgetConfig, Config, LogFormat, LoggingConfig, Validate};
pub use monitoring::{
    AlertMessage, BudgetEvaluation, ErrorBudgetMetrics, ErrorBudgetTracker, LogNotifier,
    MemoryNotifier, Notifier, WebhookNotifier, spawn_budget_monitor,
};
pub use monitoring::alerts::notifier_from_config;
pub use monitoring::budget::{Clock, ManualClock, SystemClock, format_percent};
pub use utils::error::{BudgetError, Result};
pub use utils::logging::{
    Fields, LogLevel, LogPayload, LogRecord, LogSink, Logger, MemorySink, REDACTED,
    RedactionConfig, ScopedLogger, TracingSink, init_tracing,
};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
