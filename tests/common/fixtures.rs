//! Test fixtures

use async_trait::async_trait;
use errbudget::{
    AlertMessage, BudgetConfig, BudgetError, ErrorBudgetTracker, LogLevel, Logger, ManualClock,
    MemoryNotifier, MemorySink, Notifier, RedactionConfig, Result, ScopedLogger,
};
use std::sync::Arc;

/// Logger at `level` with default redaction, writing into the returned sink
pub fn memory_logger(level: LogLevel) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::new(level, RedactionConfig::default(), Arc::new(sink.clone()));
    (logger, sink)
}

/// Tracker wired to in-memory doubles and a manual clock
pub struct TestTracker {
    pub tracker: Arc<ErrorBudgetTracker>,
    pub sink: MemorySink,
    pub notifier: MemoryNotifier,
    pub clock: ManualClock,
}

impl TestTracker {
    pub fn new() -> Self {
        Self::with_config(BudgetConfig::default())
    }

    pub fn with_config(config: BudgetConfig) -> Self {
        let (logger, sink) = memory_logger(LogLevel::Debug);
        let logger: Arc<dyn ScopedLogger> = Arc::new(logger);
        let notifier = MemoryNotifier::new();
        let clock = ManualClock::default();

        let tracker = ErrorBudgetTracker::new(config, logger, Arc::new(notifier.clone()))
            .with_clock(Arc::new(clock.clone()));

        Self {
            tracker: Arc::new(tracker),
            sink,
            notifier,
            clock,
        }
    }

    /// Record `successes` successes followed by `errors` errors
    pub fn record(&self, successes: u64, errors: u64) {
        for _ in 0..successes {
            self.tracker.record_success();
        }
        for _ in 0..errors {
            self.tracker.record_error();
        }
    }
}

impl Default for TestTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier that always fails
#[derive(Debug)]
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn notify(&self, _alert: &AlertMessage) -> Result<()> {
        Err(BudgetError::alert("notification channel down"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}
