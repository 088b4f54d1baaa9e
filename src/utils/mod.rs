//! Shared utilities
//!
//! - **error**: crate error type and helpers
//! - **logging**: scoped structured logger with redaction

pub mod error;
pub mod logging;

pub use error::{BudgetError, Result};
pub use logging::{LogLevel, LogPayload, Logger, ScopedLogger};
