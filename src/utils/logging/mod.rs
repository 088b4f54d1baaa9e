//! Scoped structured logging
//!
//! A thin layer over `tracing` that takes `(message, payload)` calls, carries child
//! bindings, drops records under a minimum level and redacts sensitive field paths
//! before a record leaves the process.

mod init;
mod logger;
mod macros;
mod redaction;
mod sink;
mod types;

pub use init::init_tracing;
pub use logger::{Logger, ScopedLogger};
pub use redaction::{DEFAULT_REDACT_PATHS, REDACTED, RedactionConfig, redact_paths};
pub use sink::{LogSink, MemorySink, TracingSink};
pub use types::{Fields, LogLevel, LogPayload, LogRecord};
