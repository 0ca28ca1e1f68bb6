//! Configuration layer for showip.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! # Boolean Flag Semantics
//!
//! `--changes-only` uses OR semantics: once set `true` in TOML, the CLI
//! cannot turn it off. `--once` and `--verbose` are CLI-only.
//!
//! # Fixed Behavior
//!
//! The interface priority order (wired IPv4, wireless IPv4, IPv6) and the
//! "No IP found" label are not configurable.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FormatArg};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
