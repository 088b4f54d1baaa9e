//! Configuration loading integration tests

#[cfg(test)]
mod tests {
    use errbudget::{BudgetError, Config, ErrorBudgetTracker, LogFormat, LogLevel};
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LOG_LEVEL", "debug"),
            ("LOG_FORMAT", "json"),
            ("ERROR_BUDGET", "0.05"),
            ("ERROR_BUDGET_ALERT_THRESHOLD", "0.02"),
            ("ERROR_BUDGET_COOLDOWN_MS", "5000"),
            ("ERROR_BUDGET_ALERT_CHANNEL", "#sre"),
        ]))
        .unwrap();

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.budget.error_budget, 0.05);
        assert_eq!(config.budget.alert_threshold, 0.02);
        assert_eq!(config.budget.cooldown_ms, 5000);
        assert_eq!(config.budget.alert_channel, "#sre");
        assert!(config.alerting.webhook_url.is_none());
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let result = Config::from_lookup(lookup(&[
            ("ERROR_BUDGET", "0.01"),
            ("ERROR_BUDGET_ALERT_THRESHOLD", "0.02"),
        ]));
        assert!(matches!(result, Err(BudgetError::Config(_))));
    }

    #[test]
    fn test_unparseable_value_rejected() {
        let result = Config::from_lookup(lookup(&[("ERROR_BUDGET", "one percent")]));
        assert!(matches!(result, Err(BudgetError::Config(_))));
    }

    #[tokio::test]
    async fn test_tracker_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "logging:\n  level: warn\nbudget:\n  error_budget: 0.1\n  alert_threshold: 0.05\n  alert_channel: \"#payments\""
        )
        .unwrap();

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.budget.alert_channel, "#payments");
        assert_eq!(config.budget.cooldown_ms, 60_000);

        let tracker = ErrorBudgetTracker::from_config(&config).unwrap();
        for _ in 0..18 {
            tracker.record_success();
        }
        tracker.record_error();
        tracker.record_error();

        let evaluation = tracker.check_error_budget().await.unwrap();
        assert!(evaluation.warning_fired);
        assert!(!evaluation.critical_fired);
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let result = Config::from_file("/nonexistent/errbudget.yaml").await;
        assert!(matches!(result, Err(BudgetError::Config(_))));
    }
}
