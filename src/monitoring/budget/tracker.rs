//! Error budget tracker

use super::clock::{Clock, SystemClock};
use super::types::{BudgetEvaluation, BudgetState, ErrorBudgetMetrics};
use crate::config::{BudgetConfig, Config, Validate};
use crate::log_fields;
use crate::monitoring::alerts::{AlertMessage, Notifier, notifier_from_config};
use crate::utils::error::{BudgetError, Result};
use crate::utils::logging::{LogPayload, Logger, ScopedLogger};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

const RECOMMENDATION: &str = "Investigate root cause immediately and consider rolling back";

/// Format a fraction as a percentage with two decimals, e.g. `0.0148` -> `"1.48%"`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Tracks request outcomes and alerts when the error rate crosses its thresholds.
///
/// Counter updates take a short lock and never fail. Evaluation releases the lock
/// before awaiting the notifier.
#[derive(Debug)]
pub struct ErrorBudgetTracker {
    config: BudgetConfig,
    state: Mutex<BudgetState>,
    logger: Arc<dyn ScopedLogger>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl ErrorBudgetTracker {
    /// Create a tracker using the wall clock
    pub fn new(
        config: BudgetConfig,
        logger: Arc<dyn ScopedLogger>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config,
            state: Mutex::new(BudgetState::default()),
            logger,
            notifier,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the logger, notifier and tracker described by `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        config
            .budget
            .validate()
            .map_err(|e| BudgetError::Config(format!("Budget config error: {}", e)))?;

        let logger = Logger::from_config(&config.logging)
            .with_bindings(log_fields! { "component" => "error_budget" });
        let logger: Arc<dyn ScopedLogger> = Arc::new(logger);
        let notifier = notifier_from_config(&config.alerting, logger.clone())?;

        debug!("Error budget tracker using {} notifier", notifier.name());
        Ok(Self::new(config.budget.clone(), logger, notifier))
    }

    /// Thresholds this tracker evaluates against
    pub fn config(&self) -> &BudgetConfig {
        &self.config
    }

    /// Logger that receives the alert records
    pub fn logger(&self) -> &Arc<dyn ScopedLogger> {
        &self.logger
    }

    /// Count one successful request
    pub fn record_success(&self) {
        self.state.lock().total_requests += 1;
    }

    /// Count one failed request
    pub fn record_error(&self) {
        let mut state = self.state.lock();
        state.total_requests += 1;
        state.error_count += 1;
    }

    /// Count one request by outcome
    pub fn record_outcome(&self, success: bool) {
        if success {
            self.record_success();
        } else {
            self.record_error();
        }
    }

    /// `error_count / total_requests`, or `0.0` before any request
    pub fn error_rate(&self) -> f64 {
        self.state.lock().error_rate()
    }

    /// Copy of the current counters and last warning time
    pub fn metrics(&self) -> ErrorBudgetMetrics {
        self.state.lock().snapshot()
    }

    /// Zero the counters and forget the last warning
    pub fn reset_metrics(&self) {
        *self.state.lock() = BudgetState::default();
    }

    /// Compare the current error rate against both thresholds.
    ///
    /// The warning tier fires when the rate is above `alert_threshold` and the
    /// cooldown has passed since the previous warning. The critical tier fires on
    /// every call with the rate above `error_budget` and awaits the notifier; its
    /// error is returned unchanged. Both tiers can fire in one call.
    pub async fn check_error_budget(&self) -> Result<BudgetEvaluation> {
        let now = self.clock.now();

        let (rate, error_count, total_requests, warning_fired) = {
            let mut state = self.state.lock();
            let rate = state.error_rate();

            let cooldown_elapsed = match state.last_alert_time {
                Some(last) => now - last > self.config.cooldown(),
                None => true,
            };
            let warning_fired = rate > self.config.alert_threshold && cooldown_elapsed;
            if warning_fired {
                state.last_alert_time = Some(now);
            }

            (rate, state.error_count, state.total_requests, warning_fired)
        };

        if warning_fired {
            self.logger.warn(
                "Error rate approaching budget threshold",
                Some(log_fields! {
                    "error_rate" => format_percent(rate),
                    "threshold" => format_percent(self.config.alert_threshold),
                    "error_count" => error_count,
                    "total_requests" => total_requests,
                }),
            );
        }

        let critical_fired = rate > self.config.error_budget;
        if critical_fired {
            self.logger.error(
                "🚨 Error budget exceeded!",
                Some(LogPayload::Fields(log_fields! {
                    "error_rate" => format_percent(rate),
                    "budget" => format_percent(self.config.error_budget),
                    "error_count" => error_count,
                    "total_requests" => total_requests,
                    "recommendation" => RECOMMENDATION,
                })),
            );

            let alert = AlertMessage::new(
                self.config.alert_channel.clone(),
                format!(
                    "🚨 Error budget exceeded! Current error rate: {} (Budget: {})",
                    format_percent(rate),
                    format_percent(self.config.error_budget)
                ),
            );
            self.notifier.notify(&alert).await?;
        }

        Ok(BudgetEvaluation {
            error_rate: rate,
            warning_fired,
            critical_fired,
        })
    }
}
