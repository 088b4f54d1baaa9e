//! Configuration data models

pub mod alerting;
pub mod budget;
pub mod logging;

pub use alerting::*;
pub use budget::*;
pub use logging::*;
