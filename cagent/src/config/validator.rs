//! Configuration validation.
//!
//! Rules run in a fixed order and mutate the config in place: a few tunables
//! are clamped with a warning, everything else fails hard on the first
//! violation.

use std::path::Path;

use crate::config::schema::{
    Config, JobMonitoringConfig, MysqlMonitoringConfig, SelfUpdateConfig,
    SystemUpdatesChecksConfig, JOBMON_SEVERITIES, OPERATION_MODES,
};
use crate::error::{Error, Result};

/// Minimum `interval` in seconds.
pub const MIN_INTERVAL: f64 = 30.0;
/// Minimum `heartbeat` in seconds.
pub const MIN_HEARTBEAT: f64 = 5.0;
/// Minimum `hub_request_timeout` in seconds.
pub const MIN_HUB_REQUEST_TIMEOUT: i64 = 1;
/// Maximum `hub_request_timeout` in seconds.
pub const MAX_HUB_REQUEST_TIMEOUT: i64 = 600;
/// Floor for `[system_updates_checks] check_interval`; lower values are raised.
pub const MIN_SYSTEM_UPDATES_CHECK_INTERVAL: u32 = 300;
/// Floor for `[self_update] check_interval`; lower values are rejected.
pub const MIN_SELF_UPDATE_CHECK_INTERVAL: u32 = 600;
/// Largest accepted `on_http_5xx_retries`, also the clamp target.
pub const MAX_HTTP_5XX_RETRIES: i64 = 5;
/// Smallest accepted `on_http_5xx_retry_interval`.
pub const MIN_HTTP_5XX_RETRY_INTERVAL: f64 = 1.0;
/// Largest accepted `on_http_5xx_retry_interval`, also the clamp target.
pub const MAX_HTTP_5XX_RETRY_INTERVAL: f64 = 3.0;

/// What happens after `on_http_5xx_retries` had to be clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryClampPolicy {
    /// Stop validating and report success; the retry interval is not checked.
    #[default]
    ShortCircuit,
    /// Keep going and check the retry interval too.
    Continue,
}

/// Knobs for [`ConfigValidator::validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationOptions {
    /// Behavior after clamping the retry count.
    pub retry_clamp: RetryClampPolicy,
}

/// Validates and sanitizes a resolved configuration.
///
/// # Examples
///
/// ```
/// use cagent::config::{Config, ConfigValidator, HostEnv, HostOs};
///
/// let mut config = Config::new(&HostEnv::new(HostOs::Linux, "/usr/bin", None));
/// config.on_http_5xx_retries = 9;
/// ConfigValidator::validate(&mut config).unwrap();
/// assert_eq!(config.on_http_5xx_retries, 5);
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending key.
    pub fn validate(config: &mut Config) -> Result<()> {
        Self::validate_with(config, &ValidationOptions::default())
    }

    /// Validate a complete configuration.
    ///
    /// Normalizes `hub_proxy`, raises a too-small system updates interval and
    /// clamps out-of-range retry settings, logging a warning for each clamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending key.
    pub fn validate_with(config: &mut Config, options: &ValidationOptions) -> Result<()> {
        Self::normalize_proxy(&mut config.hub_proxy)?;

        if config.interval.is_nan() || config.interval < MIN_INTERVAL {
            return Err(Error::Validation {
                field: "interval".into(),
                message: format!("interval value must be >= {MIN_INTERVAL:.1}"),
            });
        }

        if config.heartbeat_interval.is_nan() || config.heartbeat_interval < MIN_HEARTBEAT {
            return Err(Error::Validation {
                field: "heartbeat".into(),
                message: format!("heartbeat value must be >= {MIN_HEARTBEAT:.1}"),
            });
        }

        Self::validate_operation_mode(&config.operation_mode)?;

        config
            .parsed_net_interface_max_speed()
            .map_err(|e| Error::Validation {
                field: "net_interface_max_speed".into(),
                message: format!("invalid net_interface_max_speed value supplied: {e}"),
            })?;

        if !(MIN_HUB_REQUEST_TIMEOUT..=MAX_HUB_REQUEST_TIMEOUT)
            .contains(&config.hub_request_timeout)
        {
            return Err(Error::Validation {
                field: "hub_request_timeout".into(),
                message: format!(
                    "hub_request_timeout must be between {MIN_HUB_REQUEST_TIMEOUT} and {MAX_HUB_REQUEST_TIMEOUT}"
                ),
            });
        }

        Self::validate_job_monitoring(&config.job_monitoring).map_err(|e| e.within("jobmon"))?;
        Self::validate_system_updates(&mut config.system_updates_checks)
            .map_err(|e| e.within("system_updates_checks"))?;
        Self::validate_mysql(&config.mysql_monitoring)
            .map_err(|e| e.within("mysql_monitoring"))?;
        Self::validate_self_update(&config.self_update).map_err(|e| e.within("self_update"))?;

        if !(0..=MAX_HTTP_5XX_RETRIES).contains(&config.on_http_5xx_retries) {
            log::warn!(
                "on_http_5xx_retries value {} out of range (0-{MAX_HTTP_5XX_RETRIES}). was reset to {MAX_HTTP_5XX_RETRIES}",
                config.on_http_5xx_retries
            );
            config.on_http_5xx_retries = MAX_HTTP_5XX_RETRIES;
            if options.retry_clamp == RetryClampPolicy::ShortCircuit {
                return Ok(());
            }
        }

        if !(MIN_HTTP_5XX_RETRY_INTERVAL..=MAX_HTTP_5XX_RETRY_INTERVAL)
            .contains(&config.on_http_5xx_retry_interval)
        {
            log::warn!(
                "on_http_5xx_retry_interval value {} out of range (1-3). was reset to {MAX_HTTP_5XX_RETRY_INTERVAL}",
                config.on_http_5xx_retry_interval
            );
            config.on_http_5xx_retry_interval = MAX_HTTP_5XX_RETRY_INTERVAL;
        }

        Ok(())
    }

    /// Prefix a scheme-less proxy with `http://` and check it parses.
    fn normalize_proxy(proxy: &mut String) -> Result<()> {
        if proxy.is_empty() {
            return Ok(());
        }
        if !proxy.starts_with("http") {
            proxy.insert_str(0, "http://");
        }
        url::Url::parse(proxy).map_err(|e| Error::Validation {
            field: "hub_proxy".into(),
            message: format!("failed to parse 'hub_proxy' URL: {e}"),
        })?;
        Ok(())
    }

    /// Check `operation_mode` against the accepted set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for any value outside
    /// [`OPERATION_MODES`].
    pub fn validate_operation_mode(mode: &str) -> Result<()> {
        if OPERATION_MODES.contains(&mode) {
            return Ok(());
        }
        Err(Error::Validation {
            field: "operation_mode".into(),
            message: format!(
                "invalid operation_mode supplied. Must be one of [{}]",
                OPERATION_MODES.join(", ")
            ),
        })
    }

    fn validate_job_monitoring(config: &JobMonitoringConfig) -> Result<()> {
        if config.spool_dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: "spool_dir".into(),
                message: "spool_dir is empty".into(),
            });
        }

        if !Self::is_absolute(&config.spool_dir) {
            return Err(Error::Validation {
                field: "spool_dir".into(),
                message: "spool_dir path must be absolute".into(),
            });
        }

        if !JOBMON_SEVERITIES.contains(&config.severity.as_str()) {
            return Err(Error::Validation {
                field: "severity".into(),
                message: format!(
                    "severity has invalid value. Must be one of [{}]",
                    JOBMON_SEVERITIES.join(", ")
                ),
            });
        }

        Ok(())
    }

    fn validate_system_updates(config: &mut SystemUpdatesChecksConfig) -> Result<()> {
        if config.fetch_timeout >= config.check_interval {
            return Err(Error::Validation {
                field: "fetch_timeout".into(),
                message: "fetch_timeout should be less than check_interval".into(),
            });
        }

        if config.check_interval < MIN_SYSTEM_UPDATES_CHECK_INTERVAL {
            log::warn!(
                "system_updates_checks.check_interval is less than minimum({MIN_SYSTEM_UPDATES_CHECK_INTERVAL}). It was set to {MIN_SYSTEM_UPDATES_CHECK_INTERVAL}"
            );
            config.check_interval = MIN_SYSTEM_UPDATES_CHECK_INTERVAL;
        }

        Ok(())
    }

    fn validate_mysql(config: &MysqlMonitoringConfig) -> Result<()> {
        if config.enabled && config.connect.trim().is_empty() {
            return Err(Error::Validation {
                field: "connect".into(),
                message: "connect must be set when monitoring is enabled".into(),
            });
        }
        Ok(())
    }

    fn validate_self_update(config: &SelfUpdateConfig) -> Result<()> {
        if config.check_interval < MIN_SELF_UPDATE_CHECK_INTERVAL {
            return Err(Error::Validation {
                field: "check_interval".into(),
                message: format!(
                    "check_interval must be at least {MIN_SELF_UPDATE_CHECK_INTERVAL} seconds"
                ),
            });
        }
        Ok(())
    }

    /// Absolute on the running host, or a Windows drive/UNC path.
    fn is_absolute(path: &Path) -> bool {
        if path.is_absolute() {
            return true;
        }
        let text = path.to_string_lossy();
        let bytes = text.as_bytes();
        let drive = bytes.len() >= 3
            && bytes[0].is_ascii_alphabetic()
            && bytes[1] == b':'
            && (bytes[2] == b'\\' || bytes[2] == b'/');
        drive || text.starts_with(r"\\")
    }
}
