#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # cagent
//!
//! Configuration resolution for the cagent host-monitoring agent.
//!
//! This library builds the agent's runtime configuration from OS-specific
//! defaults, an optional config file and a few environment variables,
//! generating a minimal bootstrap file on first run.
//!
//! ## Core Types
//!
//! - [`Config`] and [`config::MinValuableConfig`]: the configuration model
//! - [`ConfigBuilder`] and [`handle_all_config_setup`]: end-to-end resolution
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use cagent::config::{parse_max_speed, Config, HostEnv, HostOs};
//!
//! let config = Config::new(&HostEnv::new(HostOs::Linux, "/usr/bin", None));
//! assert_eq!(config.hub_request_timeout, 30);
//!
//! assert_eq!(parse_max_speed("125M").unwrap(), 125_000_000);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

// Re-export key types at crate root for convenience
pub use config::{handle_all_config_setup, Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
