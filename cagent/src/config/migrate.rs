//! Deprecated key migration.
//!
//! Keys removed from the schema are still honored for one release cycle.
//! Migration looks at key presence in the decoded document, not at values,
//! so an explicit `0` is migrated while an absent key is not.

use std::path::Path;

use serde::Deserialize;

use crate::config::codec::{Document, KeyPresence};
use crate::config::platform::HostOs;
use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Retired Windows update watcher interval, in seconds.
pub const WINDOWS_UPDATES_WATCHER_INTERVAL: &str = "windows_updates_watcher_interval";

const UPDATES_ENABLED: &str = "system_updates_checks.enabled";
const UPDATES_CHECK_INTERVAL: &str = "system_updates_checks.check_interval";

/// Keys that were removed from the schema but are still read from old files.
///
/// Only ever built from a decoded document, never from defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeprecatedConfig {
    /// Replaced by `[system_updates_checks]`.
    pub windows_updates_watcher_interval: i64,
}

impl DeprecatedConfig {
    /// Read the deprecated keys out of a decoded document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if a deprecated key has the wrong type.
    pub fn from_document(document: &Document, path: &Path) -> Result<Self> {
        toml::Value::Table(document.table().clone())
            .try_into()
            .map_err(|e| Error::decode(path, &e))
    }
}

/// What to do when a file sets both a deprecated key and its replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MigrationPolicy {
    /// Keep the replacement key's value and warn about the deprecated one.
    #[default]
    NewKeyWins,
    /// Reject the file.
    ErrorOnConflict,
}

/// Translates deprecated keys into the current schema.
pub struct ConfigMigrator;

impl ConfigMigrator {
    /// Migrate deprecated keys found in `document` into `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if a deprecated key has the wrong type, or
    /// [`Error::Validation`] on a conflict under
    /// [`MigrationPolicy::ErrorOnConflict`].
    pub fn migrate_document(
        config: &mut Config,
        document: &Document,
        path: &Path,
        os: HostOs,
        policy: MigrationPolicy,
    ) -> Result<()> {
        let deprecated = DeprecatedConfig::from_document(document, path)?;
        Self::migrate(config, &deprecated, document.presence(), os, policy)
    }

    /// Apply deprecated values that are present according to `presence`.
    ///
    /// The watcher interval only applies on Windows: a value of 0 or less
    /// disables update checks, a positive value becomes the check interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] on a conflict under
    /// [`MigrationPolicy::ErrorOnConflict`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::{
    ///     Config, ConfigMigrator, DeprecatedConfig, Document, HostEnv, HostOs, MigrationPolicy,
    /// };
    ///
    /// let host = HostEnv::new(HostOs::Windows, "/agent", None);
    /// let mut config = Config::new(&host);
    /// let document = Document::parse("windows_updates_watcher_interval = 7200").unwrap();
    /// let deprecated = DeprecatedConfig { windows_updates_watcher_interval: 7200 };
    ///
    /// ConfigMigrator::migrate(
    ///     &mut config,
    ///     &deprecated,
    ///     document.presence(),
    ///     host.os,
    ///     MigrationPolicy::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(config.system_updates_checks.check_interval, 7200);
    /// ```
    pub fn migrate(
        config: &mut Config,
        deprecated: &DeprecatedConfig,
        presence: &KeyPresence,
        os: HostOs,
        policy: MigrationPolicy,
    ) -> Result<()> {
        if !presence.is_defined(WINDOWS_UPDATES_WATCHER_INTERVAL) {
            return Ok(());
        }
        if !os.is_windows() {
            log::debug!("ignoring {WINDOWS_UPDATES_WATCHER_INTERVAL}: only used on windows");
            return Ok(());
        }

        let interval = deprecated.windows_updates_watcher_interval;
        let replacement = if interval <= 0 {
            UPDATES_ENABLED
        } else {
            UPDATES_CHECK_INTERVAL
        };

        if presence.is_defined(replacement) {
            return match policy {
                MigrationPolicy::NewKeyWins => {
                    log::warn!(
                        "both {WINDOWS_UPDATES_WATCHER_INTERVAL} and {replacement} are set; \
                         using {replacement}"
                    );
                    Ok(())
                }
                MigrationPolicy::ErrorOnConflict => Err(Error::Validation {
                    field: WINDOWS_UPDATES_WATCHER_INTERVAL.to_string(),
                    message: format!("conflicts with {replacement}; remove the deprecated key"),
                }),
            };
        }

        if interval <= 0 {
            config.system_updates_checks.enabled = false;
        } else {
            config.system_updates_checks.check_interval =
                u32::try_from(interval).unwrap_or(u32::MAX);
        }
        log::warn!("{WINDOWS_UPDATES_WATCHER_INTERVAL} is deprecated, migrated to {replacement}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::platform::HostEnv;
    use std::path::PathBuf;

    fn config_for(os: HostOs) -> Config {
        Config::new(&HostEnv::new(os, "/agent", None))
    }

    fn migrate(text: &str, os: HostOs, policy: MigrationPolicy) -> Result<Config> {
        let mut config = config_for(os);
        let document = Document::parse(text).unwrap();
        crate::config::loader::ConfigLoader::merge_document(
            &mut config,
            &document,
            &PathBuf::from("cagent.conf"),
        )?;
        ConfigMigrator::migrate_document(
            &mut config,
            &document,
            &PathBuf::from("cagent.conf"),
            os,
            policy,
        )?;
        Ok(config)
    }

    #[test]
    fn test_zero_disables_update_checks() {
        let config = migrate(
            "windows_updates_watcher_interval = 0\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert!(!config.system_updates_checks.enabled);
        assert_eq!(config.system_updates_checks.check_interval, 14400);
    }

    #[test]
    fn test_negative_disables_update_checks() {
        let config = migrate(
            "windows_updates_watcher_interval = -1\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert!(!config.system_updates_checks.enabled);
    }

    #[test]
    fn test_positive_sets_check_interval() {
        let config = migrate(
            "windows_updates_watcher_interval = 7200\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert!(config.system_updates_checks.enabled);
        assert_eq!(config.system_updates_checks.check_interval, 7200);
    }

    #[test]
    fn test_huge_value_saturates() {
        let config = migrate(
            "windows_updates_watcher_interval = 99999999999\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert_eq!(config.system_updates_checks.check_interval, u32::MAX);
    }

    #[test]
    fn test_absent_key_changes_nothing() {
        let config = migrate("interval = 60.0\n", HostOs::Windows, MigrationPolicy::NewKeyWins)
            .unwrap();

        assert!(config.system_updates_checks.enabled);
        assert_eq!(config.system_updates_checks.check_interval, 14400);
    }

    #[test]
    fn test_ignored_off_windows() {
        let config = migrate(
            "windows_updates_watcher_interval = 0\n",
            HostOs::Linux,
            MigrationPolicy::ErrorOnConflict,
        )
        .unwrap();

        assert!(config.system_updates_checks.enabled);
    }

    #[test]
    fn test_new_key_wins_on_conflict() {
        let config = migrate(
            "windows_updates_watcher_interval = 7200\n[system_updates_checks]\ncheck_interval = 3600\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert_eq!(config.system_updates_checks.check_interval, 3600);
    }

    #[test]
    fn test_new_key_wins_keeps_explicit_enable() {
        let config = migrate(
            "windows_updates_watcher_interval = 0\n[system_updates_checks]\nenabled = true\n",
            HostOs::Windows,
            MigrationPolicy::NewKeyWins,
        )
        .unwrap();

        assert!(config.system_updates_checks.enabled);
    }

    #[test]
    fn test_error_on_conflict() {
        let err = migrate(
            "windows_updates_watcher_interval = 7200\n[system_updates_checks]\ncheck_interval = 3600\n",
            HostOs::Windows,
            MigrationPolicy::ErrorOnConflict,
        )
        .unwrap_err();

        match err {
            Error::Validation { field, message } => {
                assert_eq!(field, WINDOWS_UPDATES_WATCHER_INTERVAL);
                assert!(message.contains("system_updates_checks.check_interval"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unrelated_replacement_key_is_no_conflict() {
        let config = migrate(
            "windows_updates_watcher_interval = 7200\n[system_updates_checks]\nfetch_timeout = 60\n",
            HostOs::Windows,
            MigrationPolicy::ErrorOnConflict,
        )
        .unwrap();

        assert_eq!(config.system_updates_checks.check_interval, 7200);
        assert_eq!(config.system_updates_checks.fetch_timeout, 60);
    }

    #[test]
    fn test_wrong_type_is_decode_error() {
        let document = Document::parse("windows_updates_watcher_interval = \"soon\"\n").unwrap();
        let err = DeprecatedConfig::from_document(&document, Path::new("cagent.conf")).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }
}
