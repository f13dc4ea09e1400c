//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: config path
//! resolution, builder setup, log level selection and output formats.

use cagent::config::HostEnv;
use cagent::output::OutputFormat;
use cagent::{init_logger, ConfigBuilder, LogLevel};
use clap::ValueEnum;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the config file location.
    pub config: Option<PathBuf>,
}

impl GlobalOptions {
    /// Log level forced by `--verbose` or `--quiet`, if any.
    pub fn log_override(&self) -> Option<LogLevel> {
        if self.verbose {
            Some(LogLevel::Debug)
        } else if self.quiet {
            Some(LogLevel::Error)
        } else {
            None
        }
    }
}

/// Resolve the config file path.
///
/// The `--config` flag (or `CAGENT_CONFIG`) wins over the platform default.
pub fn resolve_config_path(global: &GlobalOptions, host: &HostEnv) -> PathBuf {
    global
        .config
        .clone()
        .unwrap_or_else(|| host.default_paths().config_file)
}

/// Create a builder for the running host honoring the global options.
pub fn config_builder(global: &GlobalOptions) -> ConfigBuilder {
    let host = HostEnv::detect();
    let path = resolve_config_path(global, &host);
    ConfigBuilder::new(host).with_path(path)
}

/// Switch logging to the level from the config file unless a flag overrides it.
pub fn apply_log_level(global: &GlobalOptions, configured: LogLevel) {
    init_logger(global.log_override().unwrap_or(configured));
}

/// Output format for printed configurations.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Commented TOML, as written to config files
    Toml,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => OutputFormat::Toml,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
        }
    }
}
