//! showip: primary IP address display
//!
//! A library for picking the host's primary IP address from its network
//! interfaces (wired IPv4, then wireless IPv4, then IPv6) and rendering it
//! as a short label plus the interface name.

pub mod config;
pub mod display;
pub mod network;
pub mod selector;
pub mod widget;
