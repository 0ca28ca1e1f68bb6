//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

use crate::display::OutputFormat;

/// Default refresh interval in seconds.
pub const INTERVAL_SECS: u64 = 4;

/// Default output format.
pub const FORMAT: OutputFormat = OutputFormat::Text;

/// Default refresh interval as Duration.
#[must_use]
pub const fn interval() -> Duration {
    Duration::from_secs(INTERVAL_SECS)
}
