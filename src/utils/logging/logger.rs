//! Scoped logger with bindings, level filtering and redaction

use super::redaction::{RedactionConfig, redact_paths};
use super::sink::{LogSink, TracingSink};
use super::types::{Fields, LogLevel, LogPayload, LogRecord};
use crate::config::LoggingConfig;
use std::fmt;
use std::sync::Arc;

/// Leveled logging with `(message, payload)` argument order.
///
/// `child` returns a logger whose records carry `bindings` in addition to the
/// parent's. Bindings accumulate down the chain and a later key replaces an earlier
/// one; fields passed at the call site replace both.
pub trait ScopedLogger: Send + Sync + fmt::Debug {
    fn log(&self, level: LogLevel, message: &str, payload: Option<LogPayload>);

    fn child(&self, bindings: Fields) -> Arc<dyn ScopedLogger>;

    fn debug(&self, message: &str, fields: Option<Fields>) {
        self.log(LogLevel::Debug, message, fields.map(LogPayload::Fields));
    }

    fn info(&self, message: &str, fields: Option<Fields>) {
        self.log(LogLevel::Info, message, fields.map(LogPayload::Fields));
    }

    fn warn(&self, message: &str, fields: Option<Fields>) {
        self.log(LogLevel::Warn, message, fields.map(LogPayload::Fields));
    }

    fn error(&self, message: &str, payload: Option<LogPayload>) {
        self.log(LogLevel::Error, message, payload);
    }
}

/// Default [`ScopedLogger`] implementation
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    redaction: Arc<RedactionConfig>,
    bindings: Fields,
    sink: Arc<dyn LogSink>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(
            LogLevel::default(),
            RedactionConfig::default(),
            Arc::new(TracingSink),
        )
    }
}

impl Logger {
    pub fn new(level: LogLevel, redaction: RedactionConfig, sink: Arc<dyn LogSink>) -> Self {
        Self {
            level,
            redaction: Arc::new(redaction),
            bindings: Fields::new(),
            sink,
        }
    }

    /// Logger writing to `tracing`, configured from `config`
    pub fn from_config(config: &LoggingConfig) -> Self {
        Self::new(config.level, config.redaction.clone(), Arc::new(TracingSink))
    }

    /// Minimum level this logger emits
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Bindings attached to every record
    pub fn bindings(&self) -> &Fields {
        &self.bindings
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Concrete form of [`ScopedLogger::child`]
    pub fn with_bindings(&self, bindings: Fields) -> Logger {
        let mut merged = self.bindings.clone();
        merged.extend(bindings);

        Logger {
            level: self.level,
            redaction: self.redaction.clone(),
            bindings: merged,
            sink: self.sink.clone(),
        }
    }
}

impl ScopedLogger for Logger {
    fn log(&self, level: LogLevel, message: &str, payload: Option<LogPayload>) {
        if !self.is_enabled(level) {
            return;
        }

        let mut fields = self.bindings.clone();
        if let Some(payload) = payload {
            fields.extend(payload.into_fields());
        }
        redact_paths(&mut fields, &self.redaction);

        self.sink.emit(LogRecord {
            timestamp: chrono::Utc::now(),
            level,
            message: message.to_string(),
            fields,
        });
    }

    fn child(&self, bindings: Fields) -> Arc<dyn ScopedLogger> {
        Arc::new(self.with_bindings(bindings))
    }
}
