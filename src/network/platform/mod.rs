//! Platform network interface fetcher implementation.
//!
//! This module provides the [`AddressFetcher`](super::AddressFetcher)
//! implementation backed by the operating system.
//!
//! # Platform Support
//!
//! - **Linux / macOS / BSD**: `getifaddrs(3)` via the `if-addrs` crate.
//! - **Windows**: `GetAdaptersAddresses` via the `if-addrs` crate.

mod system;

pub use system::SystemFetcher;

// Re-export the platform fetcher as PlatformFetcher for convenience
pub use system::SystemFetcher as PlatformFetcher;
