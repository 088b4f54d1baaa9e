//! Path-based redaction for log fields
//!
//! Paths are dot-separated keys into the record's field map. A `*` segment matches
//! every key of an object or every element of an array. The value found at a matching
//! path is replaced with the censor marker; missing paths are left alone.

use super::types::Fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Redacted value placeholder
pub const REDACTED: &str = "[REDACTED]";

/// Field paths redacted when no explicit list is configured
pub const DEFAULT_REDACT_PATHS: &[&str] = &[
    "user.email",
    "user.password",
    "apiKey",
    "session.token",
    "req.headers.authorization",
    "auth.*.password",
    "config.*.secret",
    "env.*",
];

/// Redaction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Dot-separated field paths to censor
    #[serde(default = "default_paths")]
    pub paths: Vec<String>,
    /// Replacement value
    #[serde(default = "default_censor")]
    pub censor: String,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            censor: default_censor(),
        }
    }
}

impl RedactionConfig {
    /// A config that redacts nothing
    pub fn disabled() -> Self {
        Self {
            paths: Vec::new(),
            censor: default_censor(),
        }
    }

    /// Add a path to the list
    pub fn with_path<S: Into<String>>(mut self, path: S) -> Self {
        self.paths.push(path.into());
        self
    }
}

fn default_paths() -> Vec<String> {
    DEFAULT_REDACT_PATHS.iter().map(|p| p.to_string()).collect()
}

fn default_censor() -> String {
    REDACTED.to_string()
}

/// Censor every configured path in `fields`
pub fn redact_paths(fields: &mut Fields, config: &RedactionConfig) {
    for path in &config.paths {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        redact_in_map(fields, &segments, &config.censor);
    }
}

fn redact_in_map(map: &mut Map<String, Value>, segments: &[&str], censor: &str) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if *head == "*" {
        for value in map.values_mut() {
            redact_at(value, rest, censor);
        }
    } else if let Some(value) = map.get_mut(*head) {
        redact_at(value, rest, censor);
    }
}

fn redact_in_array(items: &mut [Value], segments: &[&str], censor: &str) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    if *head == "*" {
        for item in items.iter_mut() {
            redact_at(item, rest, censor);
        }
    } else if let Some(item) = head.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
        redact_at(item, rest, censor);
    }
}

/// `target` was reached by the path so far; censor it or keep descending
fn redact_at(target: &mut Value, rest: &[&str], censor: &str) {
    if rest.is_empty() {
        *target = Value::String(censor.to_string());
        return;
    }

    match target {
        Value::Object(map) => redact_in_map(map, rest, censor),
        Value::Array(items) => redact_in_array(items, rest, censor),
        _ => {}
    }
}
