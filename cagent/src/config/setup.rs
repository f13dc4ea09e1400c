//! End-to-end configuration resolution.
//!
//! Defaults are built for the host, the config file is merged on top and its
//! deprecated keys migrated. A missing file is replaced by a freshly generated
//! bootstrap file. The result is validated before it is handed out.

use std::path::{Path, PathBuf};

use crate::config::bootstrap::BootstrapGenerator;
use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::migrate::{ConfigMigrator, MigrationPolicy};
use crate::config::platform::HostEnv;
use crate::config::schema::{Config, MinValuableConfig};
use crate::config::validator::{ConfigValidator, ValidationOptions};
use crate::error::Result;

type EnvLookup = Box<dyn Fn(&str) -> Option<String>>;

/// Builder for resolving a configuration.
///
/// # Examples
///
/// ```
/// use cagent::config::{ConfigBuilder, HostEnv, HostOs, IoMode};
/// use tempfile::TempDir;
///
/// let temp = TempDir::new().unwrap();
/// let path = temp.path().join("cagent.conf");
/// let host = HostEnv::new(HostOs::Linux, "/usr/bin", None);
///
/// let config = ConfigBuilder::new(host)
///     .with_path(&path)
///     .with_env_lookup(|_| None)
///     .build()
///     .unwrap();
///
/// assert!(path.exists());
/// assert_eq!(config.min.io_mode, IoMode::File);
/// ```
pub struct ConfigBuilder {
    host: HostEnv,
    path: Option<PathBuf>,
    env_lookup: Option<EnvLookup>,
    validation: ValidationOptions,
    migration: MigrationPolicy,
}

impl ConfigBuilder {
    /// Create a builder for a host.
    #[must_use]
    pub fn new(host: HostEnv) -> Self {
        Self {
            host,
            path: None,
            env_lookup: None,
            validation: ValidationOptions::default(),
            migration: MigrationPolicy::default(),
        }
    }

    /// Use this config file instead of the host default.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Read `CAGENT_HUB_*` values through `lookup` instead of the process
    /// environment.
    #[must_use]
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.env_lookup = Some(Box::new(lookup));
        self
    }

    /// Set validation options.
    #[must_use]
    pub fn with_validation(mut self, options: ValidationOptions) -> Self {
        self.validation = options;
        self
    }

    /// Set the deprecated-key conflict policy.
    #[must_use]
    pub fn with_migration_policy(mut self, policy: MigrationPolicy) -> Self {
        self.migration = policy;
        self
    }

    /// The config file this builder resolves.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| self.host.default_paths().config_file)
    }

    /// Resolve, bootstrapping the file if it is missing.
    ///
    /// # Errors
    ///
    /// Returns any load, decode, migration, generation or validation error.
    pub fn build(self) -> Result<Config> {
        let path = self.config_path();
        let mut config = Config::new(&self.host);

        match ConfigLoader::merge_file(&mut config, &path) {
            Ok(document) => {
                ConfigMigrator::migrate_document(
                    &mut config,
                    &document,
                    &path,
                    self.host.os,
                    self.migration,
                )?;
            }
            Err(e) if e.is_not_found() => {
                let mvc = self.bootstrap_config()?;
                BootstrapGenerator::generate(&mvc, &path)?;
                config.min = mvc;
            }
            Err(e) => return Err(e),
        }

        ConfigValidator::validate_with(&mut config, &self.validation)?;
        Ok(config)
    }

    /// Resolve an existing file without ever writing one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConfigNotFound`] if the file is missing, or
    /// any decode, migration or validation error.
    pub fn load_existing(self) -> Result<Config> {
        let path = self.config_path();
        let mut config = Config::new(&self.host);
        let document = ConfigLoader::merge_file(&mut config, &path)?;
        ConfigMigrator::migrate_document(
            &mut config,
            &document,
            &path,
            self.host.os,
            self.migration,
        )?;
        ConfigValidator::validate_with(&mut config, &self.validation)?;
        Ok(config)
    }

    /// The bootstrap config this builder would generate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Environment`] if the process environment holds
    /// an unusable value.
    pub fn bootstrap_config(&self) -> Result<MinValuableConfig> {
        match &self.env_lookup {
            Some(lookup) => Ok(MinValuableConfig::bootstrap(self.host.os, lookup)),
            None => MinValuableConfig::bootstrap_from_env(self.host.os),
        }
    }

    /// Environment overrides for `mvc`, honoring the injected lookup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Environment`] if the process environment holds
    /// an unusable value.
    pub fn apply_env(&self, mvc: &mut MinValuableConfig, force: bool) -> Result<()> {
        match &self.env_lookup {
            Some(lookup) => {
                EnvironmentConfig::apply_from(mvc, force, lookup);
                Ok(())
            }
            None => EnvironmentConfig::apply(mvc, force),
        }
    }
}

/// Resolve the agent configuration at `path` for the running host.
///
/// Generates a bootstrap file at `path` if none exists.
///
/// # Errors
///
/// Returns any load, decode, migration, generation or validation error.
pub fn handle_all_config_setup(path: &Path) -> Result<Config> {
    ConfigBuilder::new(HostEnv::detect()).with_path(path).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bootstrap::CONFIG_HEADER;
    use crate::config::platform::HostOs;
    use crate::config::schema::IoMode;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    fn linux() -> HostEnv {
        HostEnv::new(HostOs::Linux, "/usr/bin", None)
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_missing_file_bootstraps() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("etc").join("cagent.conf");

        let config = ConfigBuilder::new(linux())
            .with_path(&path)
            .with_env_lookup(no_env)
            .build()
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(CONFIG_HEADER));
        assert_eq!(config.min.io_mode, IoMode::File);
        assert_eq!(config.min.out_file, "/dev/null");
        assert_eq!(config.operation_mode, "full");
    }

    #[test]
    fn test_missing_file_with_hub_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");

        let config = ConfigBuilder::new(linux())
            .with_path(&path)
            .with_env_lookup(|name| {
                (name == "CAGENT_HUB_URL").then(|| "https://hub.example.com".to_string())
            })
            .build()
            .unwrap();

        assert_eq!(config.min.io_mode, IoMode::Http);
        assert_eq!(config.min.hub_url, "https://hub.example.com");
    }

    #[test]
    fn test_bootstrapped_file_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        let first = ConfigBuilder::new(linux())
            .with_path(&path)
            .with_env_lookup(no_env)
            .build()
            .unwrap();

        let second = ConfigBuilder::new(linux())
            .with_path(&path)
            .with_env_lookup(|_| Some("ignored".to_string()))
            .build()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_existing_file_is_merged_and_validated() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        fs::write(&path, "interval = 60.0\non_http_5xx_retries = 9\n").unwrap();

        let config = ConfigBuilder::new(linux()).with_path(&path).build().unwrap();

        assert!((config.interval - 60.0).abs() < f64::EPSILON);
        assert_eq!(config.on_http_5xx_retries, 5);
    }

    #[test]
    fn test_invalid_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        fs::write(&path, "operation_mode = \"turbo\"\n").unwrap();

        let err = ConfigBuilder::new(linux()).with_path(&path).build().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_decode_error_is_returned() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        fs::write(&path, "interval = [\n").unwrap();

        let err = ConfigBuilder::new(linux()).with_path(&path).build().unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_migration_on_windows_host() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        fs::write(&path, "windows_updates_watcher_interval = 7200\n").unwrap();
        let host = HostEnv::new(HostOs::Windows, temp.path(), None);

        let config = ConfigBuilder::new(host).with_path(&path).build().unwrap();

        assert_eq!(config.system_updates_checks.check_interval, 7200);
    }

    #[test]
    fn test_migration_conflict_policy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");
        fs::write(
            &path,
            "windows_updates_watcher_interval = 0\n[system_updates_checks]\nenabled = true\n",
        )
        .unwrap();
        let host = HostEnv::new(HostOs::Windows, temp.path(), None);

        let err = ConfigBuilder::new(host)
            .with_path(&path)
            .with_migration_policy(MigrationPolicy::ErrorOnConflict)
            .build()
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_load_existing_never_writes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cagent.conf");

        let err = ConfigBuilder::new(linux())
            .with_path(&path)
            .load_existing()
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(!path.exists());
    }

    #[test]
    fn test_default_path_from_host() {
        let builder = ConfigBuilder::new(HostEnv::new(HostOs::Windows, "/agent", None));
        assert_eq!(builder.config_path(), PathBuf::from("/agent").join("cagent.conf"));
    }

    #[test]
    fn test_apply_env_uses_injected_lookup() {
        let builder = ConfigBuilder::new(linux())
            .with_env_lookup(|name| (name == "CAGENT_HUB_USER").then(|| "forced".to_string()));
        let mut mvc = MinValuableConfig {
            hub_user: "old".to_string(),
            ..MinValuableConfig::default()
        };

        builder.apply_env(&mut mvc, false).unwrap();
        assert_eq!(mvc.hub_user, "old");
        builder.apply_env(&mut mvc, true).unwrap();
        assert_eq!(mvc.hub_user, "forced");
    }
}
