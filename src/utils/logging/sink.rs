//! Log sinks: where finished records go

use super::types::{LogLevel, LogRecord};
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Destination for finished, redacted records
pub trait LogSink: Send + Sync + fmt::Debug {
    fn emit(&self, record: LogRecord);
}

/// Forwards records to the process-wide `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, record: LogRecord) {
        let fields = Value::Object(record.fields).to_string();
        let message = record.message;

        match record.level {
            LogLevel::Debug => debug!(fields = %fields, "{}", message),
            LogLevel::Info => info!(fields = %fields, "{}", message),
            LogLevel::Warn => warn!(fields = %fields, "{}", message),
            LogLevel::Error => error!(fields = %fields, "{}", message),
        }
    }
}

/// Keeps records in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    buffer: Arc<RwLock<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything captured so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.buffer.read().clone()
    }

    /// Captured records at exactly `level`
    pub fn records_at(&self, level: LogLevel) -> Vec<LogRecord> {
        self.buffer
            .read()
            .iter()
            .filter(|r| r.level == level)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.read().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.write().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, record: LogRecord) {
        self.buffer.write().push(record);
    }
}
