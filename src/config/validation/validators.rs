//! Validators for each configuration section

use super::trait_def::Validate;
use crate::config::Config;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration");

        self.logging
            .validate()
            .map_err(|e| format!("Logging config error: {}", e))?;
        self.budget
            .validate()
            .map_err(|e| format!("Budget config error: {}", e))?;
        self.alerting
            .validate()
            .map_err(|e| format!("Alerting config error: {}", e))?;

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.redaction.censor.is_empty() {
            return Err("Redaction censor cannot be empty".to_string());
        }

        for path in &self.redaction.paths {
            if path.is_empty() || path.split('.').any(str::is_empty) {
                return Err(format!("Invalid redaction path: '{}'", path));
            }
        }

        Ok(())
    }
}

impl Validate for BudgetConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.error_budget > 0.0 && self.error_budget <= 1.0) {
            return Err(format!(
                "error_budget must be in (0, 1], got {}",
                self.error_budget
            ));
        }

        if !(self.alert_threshold > 0.0 && self.alert_threshold <= 1.0) {
            return Err(format!(
                "alert_threshold must be in (0, 1], got {}",
                self.alert_threshold
            ));
        }

        if self.alert_threshold >= self.error_budget {
            return Err(format!(
                "alert_threshold ({}) must be lower than error_budget ({})",
                self.alert_threshold, self.error_budget
            ));
        }

        if self.cooldown_ms == 0 {
            return Err("cooldown_ms must be greater than 0".to_string());
        }

        if self.alert_channel.trim().is_empty() {
            return Err("alert_channel cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for AlertingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(webhook_url) = &self.webhook_url {
            let url = Url::parse(webhook_url)
                .map_err(|e| format!("webhook_url has invalid URL format: {}", e))?;

            match url.scheme() {
                "http" | "https" => {}
                scheme => {
                    return Err(format!(
                        "webhook_url must use http:// or https:// scheme, got: {}",
                        scheme
                    ));
                }
            }
        }

        if self.webhook_timeout_secs == 0 {
            return Err("webhook_timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
