//! Alert payload types

use serde::{Deserialize, Serialize};

/// A message for a named delivery channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMessage {
    /// Channel identifier, e.g. `#alerts`
    pub channel: String,
    /// Human-readable text
    pub message: String,
}

impl AlertMessage {
    pub fn new<C: Into<String>, M: Into<String>>(channel: C, message: M) -> Self {
        Self {
            channel: channel.into(),
            message: message.into(),
        }
    }
}
