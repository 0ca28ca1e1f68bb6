//! The interface priority policy.
//!
//! Three ordered passes over the same table, each one only running when the
//! previous passes produced nothing:
//!
//! 1. **Wired IPv4**: every non-loopback IPv4 binding overwrites the
//!    tentative answer; the pass stops as soon as it reaches `eth0`.
//! 2. **Wireless IPv4**: the last IPv4 binding on an interface whose name
//!    starts with `w`.
//! 3. **IPv6**: the first non-loopback IPv6 binding.
//!
//! Passes 1 and 2 are last-write-wins, pass 3 is first-match. Multi-homed
//! hosts without `eth0` therefore get the LAST qualifying IPv4 binding in
//! enumeration order, not the first.

use std::net::IpAddr;

use crate::network::{AddressFamily, InterfaceAddress};

use super::SelectionResult;

/// Name of the loopback interface, never selected by passes 1 and 3.
pub const LOOPBACK_INTERFACE: &str = "lo";

/// Name of the preferred wired interface; reaching it ends pass 1.
pub const PREFERRED_WIRED_INTERFACE: &str = "eth0";

/// Leading character of wireless interface names (e.g., `wlan0`, `wlp2s0`).
pub const WIRELESS_PREFIX: char = 'w';

/// A candidate answer borrowed from the table.
type Tentative<'a> = Option<(&'a str, IpAddr)>;

/// Applies the priority policy to an already-fetched table.
///
/// Bindings without an address are skipped in every pass.
#[must_use]
pub fn select_from(bindings: &[InterfaceAddress]) -> SelectionResult {
    let answer = wired_ipv4(bindings)
        .or_else(|| wireless_ipv4(bindings))
        .or_else(|| first_ipv6(bindings));

    match answer {
        Some((interface, address)) => SelectionResult::found(address.to_string(), interface),
        None => SelectionResult::NotFound,
    }
}

/// Pass 1.
fn wired_ipv4(bindings: &[InterfaceAddress]) -> Tentative<'_> {
    let mut tentative = None;

    for (name, address) in scan(bindings, AddressFamily::V4) {
        if name != LOOPBACK_INTERFACE {
            tentative = Some((name, address));
        }

        if name == PREFERRED_WIRED_INTERFACE {
            break;
        }
    }

    tentative
}

/// Pass 2. Loopback needs no exclusion here since `lo` never matches the prefix.
fn wireless_ipv4(bindings: &[InterfaceAddress]) -> Tentative<'_> {
    let mut tentative = None;

    for (name, address) in scan(bindings, AddressFamily::V4) {
        if name.starts_with(WIRELESS_PREFIX) {
            tentative = Some((name, address));
        }
    }

    tentative
}

/// Pass 3.
fn first_ipv6(bindings: &[InterfaceAddress]) -> Tentative<'_> {
    scan(bindings, AddressFamily::V6).find(|(name, _)| *name != LOOPBACK_INTERFACE)
}

/// Iterates the bindings of one family in enumeration order, logging each one
/// as it is visited.
fn scan(
    bindings: &[InterfaceAddress],
    family: AddressFamily,
) -> impl Iterator<Item = (&str, IpAddr)> {
    bindings
        .iter()
        .filter_map(move |binding| {
            binding
                .address_in(family)
                .map(|address| (binding.name.as_str(), address))
        })
        .inspect(|(name, address)| tracing::debug!("{name} IP address {address}"))
}
