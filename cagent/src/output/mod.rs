//! Output formatting for resolved configurations.
//!
//! TOML output carries the documentation comments of the schema; JSON and
//! YAML are plain serde renderings for tooling.

mod formatters;

use std::fmt;

use crate::config::Config;
use crate::Result;

pub use formatters::{JsonFormatter, TomlFormatter, YamlFormatter};

/// Trait for rendering a configuration into text.
pub trait OutputFormatter {
    /// Render `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encode`] if serialization fails.
    fn format(&self, config: &Config) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Commented TOML, as written to config files.
    #[default]
    Toml,
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Toml => Box::new(TomlFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }

    /// Render `config` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Encode`] if serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::{Config, HostEnv, HostOs};
    /// use cagent::output::OutputFormat;
    ///
    /// let config = Config::new(&HostEnv::new(HostOs::Linux, "/usr/bin", None));
    /// let json = OutputFormat::Json.render(&config).unwrap();
    /// assert!(json.contains("\"operation_mode\": \"full\""));
    /// ```
    pub fn render(self, config: &Config) -> Result<String> {
        self.create_formatter().format(config)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Toml => write!(f, "toml"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
