//! Error budget scenarios against the default thresholds
//!
//! Defaults: error budget 1%, warning threshold 0.5%, cooldown 60s, channel `#alerts`.

#[cfg(test)]
mod tests {
    use crate::common::{FailingNotifier, TestTracker, memory_logger};
    use errbudget::{
        BudgetConfig, BudgetError, ErrorBudgetTracker, LogLevel, ScopedLogger,
        spawn_budget_monitor,
    };
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    // ==================== Threshold tiers ====================

    /// 3 errors in 1003 requests stays below both thresholds
    #[tokio::test]
    async fn test_healthy_service_stays_quiet() {
        let t = TestTracker::new();
        t.record(1000, 3);

        let evaluation = t.tracker.check_error_budget().await.unwrap();

        assert!(!evaluation.warning_fired);
        assert!(!evaluation.critical_fired);
        assert!(t.sink.records_at(LogLevel::Warn).is_empty());
        assert!(t.sink.records_at(LogLevel::Error).is_empty());
        assert_eq!(t.notifier.count(), 0);
    }

    /// 6 errors in 1006 requests fires one warning, then the cooldown holds
    #[tokio::test]
    async fn test_warning_fires_once_per_cooldown() {
        let t = TestTracker::new();
        t.record(1000, 6);

        t.tracker.check_error_budget().await.unwrap();
        t.tracker.check_error_budget().await.unwrap();

        let warnings = t.sink.records_at(LogLevel::Warn);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field("error_rate"), Some(&json!("0.60%")));
        assert!(t.tracker.metrics().last_alert_time.is_some());
        assert_eq!(t.notifier.count(), 0);
    }

    /// 15 errors in 1015 requests exceeds the budget and notifies `#alerts`
    #[tokio::test]
    async fn test_budget_exceeded_notifies() {
        let t = TestTracker::new();
        t.record(1000, 15);

        let evaluation = t.tracker.check_error_budget().await.unwrap();
        assert!(evaluation.critical_fired);

        let errors = t.sink.records_at(LogLevel::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "🚨 Error budget exceeded!");

        let sent = t.notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel, "#alerts");
        assert!(sent[0].message.contains("1.48%"));
        assert!(sent[0].message.contains("1.00%"));
    }

    /// The critical tier has no cooldown
    #[tokio::test]
    async fn test_budget_exceeded_alerts_every_evaluation() {
        let t = TestTracker::new();
        t.record(1000, 15);

        for _ in 0..3 {
            t.tracker.check_error_budget().await.unwrap();
        }

        assert_eq!(t.notifier.count(), 3);
        assert_eq!(t.sink.records_at(LogLevel::Error).len(), 3);
    }

    #[tokio::test]
    async fn test_warning_returns_after_cooldown() {
        let t = TestTracker::new();
        t.record(1000, 6);

        t.tracker.check_error_budget().await.unwrap();
        t.clock.advance(chrono::Duration::seconds(61));
        let evaluation = t.tracker.check_error_budget().await.unwrap();

        assert!(evaluation.warning_fired);
        assert_eq!(t.sink.records_at(LogLevel::Warn).len(), 2);
    }

    #[tokio::test]
    async fn test_recovery_after_reset() {
        let t = TestTracker::new();
        t.record(10, 10);
        t.tracker.check_error_budget().await.unwrap();
        assert_eq!(t.notifier.count(), 1);

        t.tracker.reset_metrics();
        t.record(1000, 0);
        let evaluation = t.tracker.check_error_budget().await.unwrap();

        assert_eq!(evaluation.error_rate, 0.0);
        assert!(!evaluation.critical_fired);
        assert_eq!(t.notifier.count(), 1);
    }

    /// Bindings from the tracker's logger appear on alert records
    #[tokio::test]
    async fn test_alert_records_carry_logger_bindings() {
        let (logger, sink) = memory_logger(LogLevel::Info);
        let logger = logger.child(errbudget::log_fields! { "service" => "checkout" });
        let tracker = ErrorBudgetTracker::new(
            BudgetConfig::default(),
            logger,
            Arc::new(errbudget::MemoryNotifier::new()),
        );
        tracker.record_error();

        tracker.check_error_budget().await.unwrap();

        let errors = sink.records_at(LogLevel::Error);
        assert_eq!(errors[0].field("service"), Some(&json!("checkout")));
    }

    // ==================== Notifier failures ====================

    #[tokio::test]
    async fn test_notifier_error_reaches_caller() {
        let (logger, sink) = memory_logger(LogLevel::Info);
        let tracker = ErrorBudgetTracker::new(
            BudgetConfig::default(),
            Arc::new(logger),
            Arc::new(FailingNotifier),
        );
        tracker.record_error();

        let err = tracker.check_error_budget().await.unwrap_err();

        assert!(matches!(err, BudgetError::Alert(_)));
        assert!(err.is_delivery_failure());
        assert_eq!(sink.records_at(LogLevel::Error).len(), 1);
    }

    // ==================== Concurrency ====================

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_records_from_many_tasks() {
        let t = TestTracker::new();

        let mut handles = Vec::new();
        for task in 0..16u64 {
            let tracker = t.tracker.clone();
            handles.push(tokio::spawn(async move {
                for i in 0..500u64 {
                    tracker.record_outcome((task + i) % 5 != 0);
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let metrics = t.tracker.metrics();
        assert_eq!(metrics.total_requests, 8000);
        assert_eq!(metrics.error_count, 1600);
        assert_eq!(metrics.error_rate, 0.2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_evaluations_each_notify() {
        let t = TestTracker::new();
        t.record(0, 10);

        let mut handles = Vec::new();
        for _ in 0..8 {
            let tracker = t.tracker.clone();
            handles.push(tokio::spawn(async move {
                tracker.check_error_budget().await.unwrap()
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().critical_fired);
        }

        assert_eq!(t.notifier.count(), 8);
    }

    // ==================== Periodic monitor ====================

    #[tokio::test]
    async fn test_monitor_stops_when_aborted() {
        let t = TestTracker::new();
        t.record(0, 1);

        let handle = spawn_budget_monitor(t.tracker.clone(), Duration::from_millis(5));
        tokio::time::sleep(Duration::from_millis(50)).await;
        handle.abort();
        let _ = handle.await;

        let after_abort = t.notifier.count();
        assert!(after_abort >= 1);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(t.notifier.count(), after_abort);
    }
}
