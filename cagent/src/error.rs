//! Error types for the cagent configuration pipeline.
//!
//! This module provides the error hierarchy surfaced by every stage of
//! configuration resolution, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a cagent error.
///
/// # Examples
///
/// ```
/// use cagent::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(90)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Message substituted for integer-into-float decode failures.
pub(crate) const DECIMAL_POINT_HINT: &str =
    "please use numbers with a decimal point for numerical values";

/// The main error type for the cagent configuration pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file does not exist.
    ///
    /// This is an expected condition: the caller reacts by generating a
    /// bootstrap configuration.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The configuration file could not be decoded.
    #[error("config load error in {}: {message}", path.display())]
    Decode {
        /// The file being decoded.
        path: PathBuf,
        /// Description of the decode failure.
        message: String,
    },

    /// A validation rule rejected a configuration value.
    #[error("invalid '{field}': {message}")]
    Validation {
        /// The key that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("failed to {operation} '{}': {source}", path.display())]
    Io {
        /// The path the operation was applied to.
        path: PathBuf,
        /// The attempted operation (e.g. "open", "create directory").
        operation: &'static str,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A bootstrap config was requested but a file is already present.
    #[error("config file already exists at path: {}", path.display())]
    ConfigExists {
        /// The path that already exists.
        path: PathBuf,
    },

    /// A value could not be encoded into the configuration format.
    #[error("failed to encode config: {message}")]
    Encode {
        /// Description of the encode failure.
        message: String,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("environment variable {variable}: {message}")]
    Environment {
        /// The variable name.
        variable: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl Error {
    /// Build an I/O error tagged with path and operation.
    pub(crate) fn io(
        path: impl Into<PathBuf>,
        operation: &'static str,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Build a decode error from a `toml` decoder failure.
    ///
    /// Integer-into-float mismatches are rewritten into an actionable hint.
    pub(crate) fn decode(path: impl Into<PathBuf>, err: &toml::de::Error) -> Self {
        let raw = err.message().to_string();
        let message = if is_integer_into_float(&raw) {
            DECIMAL_POINT_HINT.to_string()
        } else {
            raw
        };
        Self::Decode {
            path: path.into(),
            message,
        }
    }

    /// Wrap a nested subsystem validation error with the table name.
    #[must_use]
    pub(crate) fn within(self, table: &str) -> Self {
        match self {
            Self::Validation { field, message } => Self::Validation {
                field: format!("{table}.{field}"),
                message: format!("invalid [{table}] config: {message}"),
            },
            other => other,
        }
    }

    /// Check if error indicates the config file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::ConfigNotFound { path: PathBuf::from("/etc/cagent/cagent.conf") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ConfigNotFound { .. })
    }

    /// Check if error came from a validation rule.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

fn is_integer_into_float(message: &str) -> bool {
    message.contains("invalid type: integer") && message.contains("expected f64")
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }
}
