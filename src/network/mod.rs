//! Network layer for fetching and representing interface bindings.
//!
//! This module provides types and traits for:
//! - Representing interface/address bindings ([`InterfaceAddress`])
//! - Address family classification ([`AddressFamily`])
//! - Fetching the OS interface table ([`AddressFetcher`])
//! - Platform-specific implementations ([`platform`])

mod binding;
mod fetcher;
pub mod platform;

pub use binding::{AddressFamily, InterfaceAddress};
pub use fetcher::{AddressFetcher, FetchError};
