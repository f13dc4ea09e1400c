//! Configuration resolution for the cagent agent.
//!
//! The agent configuration is resolved from three layers:
//!
//! 1. Built-in defaults, which depend on the host operating system
//! 2. The config file, overlaying only the keys it contains
//! 3. `CAGENT_HUB_*` environment variables, used when a bootstrap file is
//!    generated because no config file exists
//!
//! Deprecated keys found in the file are migrated, then the result is
//! validated. Some tunables are clamped with a warning instead of failing.
//!
//! # Examples
//!
//! Resolving a config for the running host:
//!
//! ```no_run
//! use cagent::config::handle_all_config_setup;
//! use std::path::Path;
//!
//! let config = handle_all_config_setup(Path::new("/etc/cagent/cagent.conf")).unwrap();
//! println!("pushing every {} seconds", config.interval);
//! ```
//!
//! Resolving for an explicit host with injected environment:
//!
//! ```
//! use cagent::config::{ConfigBuilder, HostEnv, HostOs, IoMode};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let config = ConfigBuilder::new(HostEnv::new(HostOs::Linux, "/usr/bin", None))
//!     .with_path(temp.path().join("cagent.conf"))
//!     .with_env_lookup(|name| {
//!         (name == "CAGENT_HUB_URL").then(|| "https://hub.example.com".to_string())
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.min.io_mode, IoMode::Http);
//! ```

pub mod bandwidth;
pub mod bootstrap;
pub mod codec;
pub mod environment;
pub mod loader;
pub mod migrate;
pub mod platform;
pub mod schema;
pub mod setup;
pub mod validator;

#[cfg(test)]
mod proptests;

// Re-export key types at module root
pub use bandwidth::{parse_max_speed, ParseSpeedError};
pub use bootstrap::{save_config_file, BootstrapGenerator, CONFIG_HEADER};
pub use codec::{encode, Document, Documented, Emit, FieldDoc, KeyPresence, Schema, TableDoc};
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use migrate::{ConfigMigrator, DeprecatedConfig, MigrationPolicy};
pub use platform::{DefaultPaths, HostEnv, HostOs};
pub use schema::{
    Config, CpuUtilisationAnalysisConfig, DockerMonitoringConfig, IoMode, JobMonitoringConfig,
    LogsConfig, MinValuableConfig, MysqlMonitoringConfig, ProcessMonitoringConfig,
    SelfUpdateConfig, StorCliConfig, SystemUpdatesChecksConfig, OPERATION_MODES,
};
pub use setup::{handle_all_config_setup, ConfigBuilder};
pub use validator::{ConfigValidator, RetryClampPolicy, ValidationOptions};
