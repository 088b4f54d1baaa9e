//! Error handling
//!
//! This module defines the error type shared by configuration loading, alert delivery
//! and budget evaluation. Counter operations never fail and do not appear here.

mod helpers;
mod types;

pub use types::{BudgetError, Result};
