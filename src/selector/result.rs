//! The value produced by one selection.

use std::fmt;

use serde::Serialize;

/// Outcome of one selection over the interface table.
///
/// A plain value: produced fresh on every call and never stored by the
/// selector itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionResult {
    /// An address qualified.
    Found {
        /// Presentation form of the address (dotted-decimal or colon-hex).
        address: String,
        /// Name of the interface the address is bound to.
        interface: String,
    },
    /// No binding qualified, or the interface table could not be read.
    NotFound,
}

impl SelectionResult {
    /// Creates a `Found` result.
    #[must_use]
    pub fn found(address: impl Into<String>, interface: impl Into<String>) -> Self {
        Self::Found {
            address: address.into(),
            interface: interface.into(),
        }
    }

    /// Returns true if an address was selected.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Returns the selected address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Found { address, .. } => Some(address),
            Self::NotFound => None,
        }
    }

    /// Returns the interface the address came from, if any.
    #[must_use]
    pub fn interface(&self) -> Option<&str> {
        match self {
            Self::Found { interface, .. } => Some(interface),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for SelectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { address, interface } => write!(f, "{address} on {interface}"),
            Self::NotFound => write!(f, "no address"),
        }
    }
}
