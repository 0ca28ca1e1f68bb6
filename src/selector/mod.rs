//! Primary address selection.
//!
//! This module provides:
//! - The selection outcome ([`SelectionResult`])
//! - The pure priority policy ([`select_from`])
//! - The fetch-then-select entry point ([`InterfaceAddressSelector`])
//!
//! # Failure Semantics
//!
//! Selection never fails. An unreadable interface table is logged and
//! reported as [`SelectionResult::NotFound`], exactly like a table with
//! nothing usable in it. The next call simply tries again.

mod policy;
mod result;


pub use policy::{LOOPBACK_INTERFACE, PREFERRED_WIRED_INTERFACE, WIRELESS_PREFIX, select_from};
pub use result::SelectionResult;

use crate::network::AddressFetcher;

/// Selects the display address from the live interface table.
///
/// Every call to [`select`](Self::select) performs a fresh fetch; no state is
/// kept between calls, so two calls over an unchanged table return equal
/// results.
///
/// # Example
///
/// ```no_run
/// use showip::network::platform::SystemFetcher;
/// use showip::selector::InterfaceAddressSelector;
///
/// let selector = InterfaceAddressSelector::new(SystemFetcher::new());
/// println!("{}", selector.select());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterfaceAddressSelector<F> {
    fetcher: F,
}

impl<F> InterfaceAddressSelector<F>
where
    F: AddressFetcher,
{
    /// Creates a selector reading from the given fetcher.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns the underlying fetcher.
    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetches the interface table and applies the priority policy.
    #[must_use]
    pub fn select(&self) -> SelectionResult {
        let result = match self.fetcher.fetch() {
            Ok(bindings) => select_from(&bindings),
            Err(e) => {
                tracing::warn!("Failed to enumerate network interfaces: {e}");
                SelectionResult::NotFound
            }
        };

        tracing::debug!("Selected {result}");
        result
    }
}
