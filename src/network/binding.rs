//! Core network types for interface/address bindings.

use std::fmt;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Address family of a binding.
///
/// Only IPv4 and IPv6 are represented; the platform layer drops every
/// other family before bindings reach the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressFamily {
    /// `AF_INET`
    V4,
    /// `AF_INET6`
    V6,
}

impl AddressFamily {
    /// Returns the family of the given address.
    #[must_use]
    pub const fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// One interface/address association as reported by the OS.
///
/// An interface with several addresses shows up as several bindings, in the
/// order the OS enumerated them.
///
/// # Missing addresses
///
/// `address` is `None` when the OS reported the interface without an
/// address record. Such bindings are kept so the enumeration order stays
/// intact, but the selector never picks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    /// The interface name (e.g., "eth0", "wlan0").
    pub name: String,
    /// The bound address, if any.
    pub address: Option<IpAddr>,
}

impl InterfaceAddress {
    /// Creates a binding with an address.
    #[must_use]
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address: Some(address),
        }
    }

    /// Creates a binding for an interface that reported no address.
    #[must_use]
    pub fn without_address(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    /// Returns the address family, or `None` when there is no address.
    #[must_use]
    pub fn family(&self) -> Option<AddressFamily> {
        self.address.as_ref().map(AddressFamily::of)
    }

    /// Returns the address if it belongs to the given family.
    #[must_use]
    pub fn address_in(&self, family: AddressFamily) -> Option<IpAddr> {
        self.address
            .filter(|address| AddressFamily::of(address) == family)
    }
}

impl fmt::Display for InterfaceAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address {
            Some(address) => write!(f, "{} {address}", self.name),
            None => write!(f, "{} <no address>", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod address_family {
        use super::*;

        #[test]
        fn of_classifies_v4_and_v6() {
            assert_eq!(
                AddressFamily::of(&"10.0.0.1".parse().unwrap()),
                AddressFamily::V4
            );
            assert_eq!(
                AddressFamily::of(&"fe80::1".parse().unwrap()),
                AddressFamily::V6
            );
        }

        #[test]
        fn display_formats_correctly() {
            assert_eq!(format!("{}", AddressFamily::V4), "IPv4");
            assert_eq!(format!("{}", AddressFamily::V6), "IPv6");
        }
    }

    mod interface_address {
        use super::*;

        #[test]
        fn new_stores_name_and_address() {
            let binding = InterfaceAddress::new("eth0", "192.168.1.42".parse().unwrap());

            assert_eq!(binding.name, "eth0");
            assert_eq!(binding.address, Some("192.168.1.42".parse().unwrap()));
            assert_eq!(binding.family(), Some(AddressFamily::V4));
        }

        #[test]
        fn without_address_has_no_family() {
            let binding = InterfaceAddress::without_address("eth0");

            assert!(binding.address.is_none());
            assert!(binding.family().is_none());
        }

        #[test]
        fn address_in_filters_by_family() {
            let binding = InterfaceAddress::new("eth0", "fe80::1".parse().unwrap());

            assert!(binding.address_in(AddressFamily::V4).is_none());
            assert_eq!(
                binding.address_in(AddressFamily::V6),
                Some("fe80::1".parse().unwrap())
            );
        }

        #[test]
        fn address_in_is_none_without_address() {
            let binding = InterfaceAddress::without_address("wlan0");

            assert!(binding.address_in(AddressFamily::V4).is_none());
            assert!(binding.address_in(AddressFamily::V6).is_none());
        }

        #[test]
        fn display_shows_name_and_address() {
            let binding = InterfaceAddress::new("wlan0", "192.168.1.5".parse().unwrap());
            assert_eq!(binding.to_string(), "wlan0 192.168.1.5");
        }

        #[test]
        fn display_marks_missing_address() {
            let binding = InterfaceAddress::without_address("eth1");
            assert_eq!(binding.to_string(), "eth1 <no address>");
        }
    }
}
