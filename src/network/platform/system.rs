//! OS interface enumeration using the `if-addrs` crate.

use std::io;

use crate::network::{AddressFetcher, FetchError, InterfaceAddress};

/// [`AddressFetcher`] backed by the live OS interface table.
///
/// Each call performs a fresh enumeration; nothing is cached between calls.
/// Entries keep the order the OS reported them in, and families other than
/// IPv4/IPv6 are already dropped by the enumeration layer.
///
/// # Example
///
/// ```no_run
/// use showip::network::{AddressFetcher, platform::SystemFetcher};
///
/// let fetcher = SystemFetcher::new();
/// for binding in fetcher.fetch().expect("Failed to enumerate interfaces") {
///     println!("{binding}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SystemFetcher {
    _private: (),
}

impl SystemFetcher {
    /// Creates a new system fetcher.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AddressFetcher for SystemFetcher {
    fn fetch(&self) -> Result<Vec<InterfaceAddress>, FetchError> {
        let interfaces = if_addrs::get_if_addrs().map_err(map_io_error)?;

        Ok(interfaces
            .into_iter()
            .map(|iface| {
                let address = iface.ip();
                InterfaceAddress::new(iface.name, address)
            })
            .collect())
    }
}

/// Classifies an enumeration failure.
fn map_io_error(error: io::Error) -> FetchError {
    if error.kind() == io::ErrorKind::PermissionDenied {
        FetchError::PermissionDenied {
            context: error.to_string(),
        }
    } else {
        FetchError::Io(error)
    }
}
