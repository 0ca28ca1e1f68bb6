//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Refresh configuration
    #[serde(default)]
    pub monitor: MonitorSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Refresh configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonitorSection {
    /// Refresh interval in seconds
    pub interval: Option<u64>,

    /// Only print when the selected address changes
    #[serde(default)]
    pub changes_only: bool,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# showip Configuration File

[monitor]
# Refresh interval in seconds (default: 4)
interval = 4

# Only print when the selected address changes (default: false)
# changes_only = false

[output]
# Output format: "text" or "json" (default: "text")
# text: 192.168.1.42 (eth0)
# json: {"text":"192.168.1.42","tooltip":"eth0"}
format = "text"
"#
    .to_string()
}
