//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use crate::display::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Refresh interval
    pub interval: Duration,

    /// Select once and exit
    pub once: bool,

    /// Output format
    pub format: OutputFormat,

    /// Only render when the selection changes
    pub changes_only: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            interval: defaults::interval(),
            once: false,
            format: defaults::FORMAT,
            changes_only: false,
            verbose: false,
        }
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ interval: {}s, once: {}, format: {}, changes_only: {} }}",
            self.interval.as_secs(),
            self.once,
            self.format,
            self.changes_only,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The interval is zero
    /// - The output format is unknown
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let interval = Self::resolve_interval(cli, toml)?;
        let format = Self::resolve_format(cli, toml)?;

        // Flags only enable: true in either source wins
        let changes_only = cli.changes_only || toml.is_some_and(|t| t.monitor.changes_only);

        Ok(Self {
            interval,
            once: cli.once,
            format,
            changes_only,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_interval(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Duration, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let seconds = cli
            .interval
            .or_else(|| toml.and_then(|t| t.monitor.interval))
            .unwrap_or(defaults::INTERVAL_SECS);

        if seconds == 0 {
            return Err(ConfigError::InvalidDuration {
                field: field::INTERVAL,
                reason: "must be greater than 0".to_string(),
            });
        }

        Ok(Duration::from_secs(seconds))
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(value) => parse_format(value),
            None => Ok(defaults::FORMAT),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
