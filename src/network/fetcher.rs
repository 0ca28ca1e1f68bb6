//! Address fetching trait and error types.

use super::InterfaceAddress;
use thiserror::Error;

/// Error type for address fetching operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The selector absorbs all of these; other callers may not.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Permission denied to access network information.
    #[error("Permission denied: {context}")]
    PermissionDenied {
        /// Additional context about what permission was denied.
        context: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },

    /// The enumeration system call failed.
    #[error("Interface enumeration failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for fetching the OS interface/address table.
///
/// # Design
///
/// - The platform implementation lives in [`super::platform`]
/// - Enables dependency injection for testing with mock implementations
///
/// # Example
///
/// ```
/// use showip::network::{AddressFetcher, FetchError, InterfaceAddress};
///
/// struct FixedFetcher(Vec<InterfaceAddress>);
///
/// impl AddressFetcher for FixedFetcher {
///     fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let fetcher = FixedFetcher(vec![InterfaceAddress::new("eth0", "10.0.0.9".parse().unwrap())]);
/// assert_eq!(fetcher.fetch().unwrap().len(), 1);
/// ```
pub trait AddressFetcher: Send + Sync {
    /// Fetches every interface/address binding currently known to the OS.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when:
    /// - The enumeration call fails (`FetchError::Io`)
    /// - Insufficient permissions to access network information (`FetchError::PermissionDenied`)
    /// - Other platform-specific failures (`FetchError::Platform`)
    ///
    /// # Implementation Notes
    ///
    /// - Implementations return ALL bindings, loopback included
    /// - Bindings must keep the OS enumeration order
    /// - This is a synchronous, blocking call
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError>;
}
