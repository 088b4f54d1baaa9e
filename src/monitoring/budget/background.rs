//! Periodic budget evaluation

use super::tracker::ErrorBudgetTracker;
use crate::utils::logging::LogPayload;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Evaluate `tracker` every `period` until the returned handle is aborted.
///
/// A failed evaluation is logged through the tracker's logger and the loop keeps
/// going. The first evaluation happens immediately.
pub fn spawn_budget_monitor(tracker: Arc<ErrorBudgetTracker>, period: Duration) -> JoinHandle<()> {
    let period = period.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            if let Err(e) = tracker.check_error_budget().await {
                tracker
                    .logger()
                    .error("Error budget evaluation failed", Some(LogPayload::failure(e)));
            }
        }
    })
}
