//! Logging infrastructure for cagent.
//!
//! The library itself logs through the `log` facade. This module provides the
//! `log_level` configuration type and a simple stderr backend that binaries
//! can install.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Logging level as written in the `log_level` config key.
///
/// Log levels are ordered from least verbose (Error) to most verbose (Debug).
///
/// # Examples
///
/// ```
/// use cagent::LogLevel;
///
/// assert!(LogLevel::Error < LogLevel::Info);
/// assert!(LogLevel::Info < LogLevel::Debug);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors and warnings only.
    #[default]
    Error,
    /// Informational output.
    Info,
    /// Everything, including debug detail.
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "error", "info", "debug" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("info").unwrap(), LogLevel::Info);
    /// assert_eq!(LogLevel::parse("DEBUG").unwrap(), LogLevel::Debug);
    /// assert!(LogLevel::parse("verbose").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` crate filter matching this level.
    ///
    /// Warnings are shown at `Error` as well, since they report values that
    /// were auto-corrected.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
        }
    }
}

/// A simple stderr-based `log` backend.
///
/// # Examples
///
/// ```
/// use cagent::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Info);
/// assert_eq!(logger.level(), LogLevel::Info);
/// ```
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Error)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        // Nothing sensible to do if stderr is gone.
        let _ = writeln!(stderr, "{}: {}", record.level(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the stderr logger as the global `log` backend.
///
/// The first call installs the backend; later calls only move the maximum
/// level, so a level read from the config file can replace the bootstrap
/// level chosen from CLI flags.
///
/// # Examples
///
/// ```
/// use cagent::{init_logger, LogLevel};
///
/// init_logger(LogLevel::Error);
/// init_logger(LogLevel::Debug);
/// assert_eq!(log::max_level(), log::LevelFilter::Debug);
/// ```
pub fn init_logger(level: LogLevel) {
    let logger = LOGGER.get_or_init(|| Logger::new(LogLevel::Debug));
    // Another backend may already be installed by an embedding binary.
    let _ = log::set_logger(logger);
    log::set_max_level(level.filter());
}
