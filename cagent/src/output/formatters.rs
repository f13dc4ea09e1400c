//! Formatter implementations.

use crate::config::{encode, Config};
use crate::error::{Error, Result};

use super::OutputFormatter;

/// Formatter for commented TOML output.
pub struct TomlFormatter;

impl OutputFormatter for TomlFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        encode(config)
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        serde_json::to_string_pretty(config).map_err(|e| Error::Encode {
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, config: &Config) -> Result<String> {
        serde_yaml::to_string(config).map_err(|e| Error::Encode {
            message: format!("failed to serialize to YAML: {e}"),
        })
    }
}
