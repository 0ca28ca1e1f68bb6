//! Rendering of selection results for the host.
//!
//! This module provides:
//! - The `(text, tooltip)` pair handed to the host ([`DisplayText`])
//! - Output sinks that render it ([`DisplaySink`], [`WriterSink`])
//! - Output formats ([`OutputFormat`])

mod sink;

pub use sink::{DisplaySink, OutputFormat, WriterSink};

use serde::Serialize;

use crate::selector::SelectionResult;

/// Label shown when no address qualified.
pub const NO_IP_TEXT: &str = "No IP found";

/// What the host renders: a short label plus its tooltip.
///
/// `Found` results show the address with the interface name as tooltip.
/// `NotFound` shows [`NO_IP_TEXT`] with an empty tooltip, whatever the
/// underlying cause was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    /// The label text (e.g., "192.168.1.42").
    pub text: String,
    /// The tooltip text (e.g., "eth0").
    pub tooltip: String,
}

impl DisplayText {
    /// Creates a display pair.
    #[must_use]
    pub fn new(text: impl Into<String>, tooltip: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: tooltip.into(),
        }
    }
}

impl From<&SelectionResult> for DisplayText {
    fn from(result: &SelectionResult) -> Self {
        match result {
            SelectionResult::Found { address, interface } => Self::new(address, interface),
            SelectionResult::NotFound => Self::new(NO_IP_TEXT, ""),
        }
    }
}

impl From<SelectionResult> for DisplayText {
    fn from(result: SelectionResult) -> Self {
        match result {
            SelectionResult::Found { address, interface } => Self {
                text: address,
                tooltip: interface,
            },
            SelectionResult::NotFound => Self::new(NO_IP_TEXT, ""),
        }
    }
}
