//! Monitoring for request outcomes
//!
//! - `budget`: error budget tracking and the periodic monitor
//! - `alerts`: notifiers that deliver critical alerts

pub mod alerts;
pub mod budget;

pub use alerts::{AlertMessage, LogNotifier, MemoryNotifier, Notifier, WebhookNotifier};
pub use budget::{
    BudgetEvaluation, ErrorBudgetMetrics, ErrorBudgetTracker, spawn_budget_monitor,
};
