//! Error budget tracking
//!
//! Counts successful and failed requests, derives the error rate and raises two
//! tiers of alerts: a warning above `alert_threshold` (rate-limited by a cooldown)
//! and a critical alert above `error_budget` (sent on every evaluation).

mod background;
mod clock;
mod tracker;
mod types;

pub use background::spawn_budget_monitor;
pub use clock::{Clock, ManualClock, SystemClock};
pub use tracker::{ErrorBudgetTracker, format_percent};
pub use types::{BudgetEvaluation, ErrorBudgetMetrics};
