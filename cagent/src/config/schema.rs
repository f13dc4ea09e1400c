//! Configuration schema definitions.
//!
//! This module defines the complete agent configuration, the minimal subset
//! written to bootstrap files, and the default values for every field. Each
//! monitoring area owns a nested block with its own defaults.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::bandwidth::{self, ParseSpeedError};
use super::codec::{self, Documented, FieldDoc, Schema, TableDoc};
use super::platform::{HostEnv, HostOs};
use crate::logging::LogLevel;

/// Perform all checks unless disabled individually.
pub const OPERATION_MODE_FULL: &str = "full";
/// Perform only CPU, load, memory and disk fill-level checks.
pub const OPERATION_MODE_MINIMAL: &str = "minimal";
/// Send heartbeats only.
pub const OPERATION_MODE_HEARTBEAT: &str = "heartbeat";

/// Accepted `operation_mode` values.
pub const OPERATION_MODES: [&str; 3] = [
    OPERATION_MODE_FULL,
    OPERATION_MODE_MINIMAL,
    OPERATION_MODE_HEARTBEAT,
];

/// Accepted `[jobmon] severity` values.
pub const JOBMON_SEVERITIES: [&str; 3] = ["alert", "warning", "none"];

/// Feed polled by the Windows self-updater.
pub const SELF_UPDATES_FEED_URL: &str = "https://repo.cloudradar.io/windows/cagent/feed/rolling";

/// Where collected metrics go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IoMode {
    /// Write results to `out_file`.
    File,
    /// Send results to the hub.
    #[default]
    Http,
}

impl fmt::Display for IoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::Http => write!(f, "http"),
        }
    }
}

/// The minimal configuration needed to connect an agent.
///
/// This is the key set written to a generated bootstrap file. Inside
/// [`Config`] it is flattened, so its keys live at the top level of the
/// document.
///
/// # Examples
///
/// ```
/// use cagent::config::{IoMode, MinValuableConfig};
/// use cagent::LogLevel;
///
/// let mvc = MinValuableConfig::default();
/// assert_eq!(mvc.log_level, LogLevel::Error);
/// assert_eq!(mvc.io_mode, IoMode::Http);
/// assert!(mvc.hub_url.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MinValuableConfig {
    /// Verbosity of the agent log.
    pub log_level: LogLevel,

    /// Output sink for collected metrics.
    pub io_mode: IoMode,

    /// Output file used when `io_mode = "file"`.
    pub out_file: String,

    /// Hub endpoint.
    pub hub_url: String,

    /// Hub user name.
    pub hub_user: String,

    /// Hub password.
    pub hub_password: String,
}

/// Complete configuration structure.
///
/// Every field has a deterministic default produced by [`Config::new`]; fields
/// never touched by a config file or the environment keep that default.
///
/// # Examples
///
/// ```
/// use cagent::config::{Config, HostEnv, HostOs};
///
/// let config = Config::new(&HostEnv::new(HostOs::Linux, "/usr/bin", None));
/// assert_eq!(config.operation_mode, "full");
/// assert!((config.interval - 90.0).abs() < f64::EPSILON);
/// assert!(config.fs_metrics.contains(&"inodes_used_percent".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// One of [`OPERATION_MODES`].
    pub operation_mode: String,

    /// Seconds between metric pushes.
    #[serde(deserialize_with = "strict_float")]
    pub interval: f64,

    /// Seconds between heartbeats.
    #[serde(rename = "heartbeat", deserialize_with = "strict_float")]
    pub heartbeat_interval: f64,

    /// PID file location.
    #[serde(rename = "pid", default)]
    pub pid_file: PathBuf,

    /// Log file location.
    #[serde(rename = "log", default)]
    pub log_file: PathBuf,

    /// Syslog target: `local` or a URL.
    #[serde(default)]
    pub log_syslog: String,

    /// Connection essentials.
    #[serde(flatten)]
    pub min: MinValuableConfig,

    /// Compress hub payloads.
    pub hub_gzip: bool,

    /// Hub request time limit in seconds.
    pub hub_request_timeout: i64,

    /// Proxy used to reach the hub.
    #[serde(default)]
    pub hub_proxy: String,

    /// Proxy user name.
    #[serde(default)]
    pub hub_proxy_user: String,

    /// Proxy password.
    #[serde(default)]
    pub hub_proxy_password: String,

    /// CPU load averages to collect.
    pub cpu_load_data_gathering_mode: Vec<String>,

    /// CPU utilisation averages to collect.
    pub cpu_utilisation_gathering_mode: Vec<String>,

    /// CPU utilisation kinds to collect.
    pub cpu_utilisation_types: Vec<String>,

    /// Filesystem types to monitor.
    pub fs_type_include: Vec<String>,

    /// Filesystem paths to skip.
    #[serde(default)]
    pub fs_path_exclude: Vec<String>,

    /// Whether `fs_path_exclude` also excludes nested mountpoints.
    pub fs_path_exclude_recurse: bool,

    /// Filesystem metrics to collect.
    pub fs_metrics: Vec<String>,

    /// Identify mountpoints by device to skip bind mounts.
    pub fs_identify_mountpoints_by_device: bool,

    /// Interface names to skip.
    #[serde(default)]
    pub net_interface_exclude: Vec<String>,

    /// Interface name patterns to skip.
    pub net_interface_exclude_regex: Vec<String>,

    /// Skip disconnected interfaces.
    pub net_interface_exclude_disconnected: bool,

    /// Skip loopback interfaces.
    pub net_interface_exclude_loopback: bool,

    /// Network metrics to collect.
    pub net_metrics: Vec<String>,

    /// Fixed interface speed such as `125M`; empty means detect.
    #[serde(default)]
    pub net_interface_max_speed: String,

    /// Host facts to report.
    pub system_fields: Vec<String>,

    /// Hypervisors to query.
    #[serde(default)]
    pub virtual_machines_stat: Vec<String>,

    /// Report hardware inventory.
    pub hardware_inventory: bool,

    /// Only discover services that start automatically.
    pub discover_autostarting_services_only: bool,

    /// Top-process analysis on high CPU usage.
    pub cpu_utilisation_analysis: CpuUtilisationAnalysisConfig,

    /// Report temperature sensors.
    pub temperature_monitoring: bool,

    /// Monitor software RAID arrays.
    pub software_raid_monitoring: bool,

    /// Monitor S.M.A.R.T. data.
    pub smart_monitoring: bool,

    /// Path to the smartctl binary.
    #[serde(default)]
    pub smartctl: String,

    /// Extra log files.
    #[serde(default)]
    pub logs: LogsConfig,

    /// MegaRAID monitoring through storcli.
    #[serde(default)]
    pub storcli: StorCliConfig,

    /// Job monitoring wrapper settings.
    #[serde(rename = "jobmon")]
    pub job_monitoring: JobMonitoringConfig,

    /// Package update checks.
    pub system_updates_checks: SystemUpdatesChecksConfig,

    /// MySQL/MariaDB monitoring.
    #[serde(default)]
    pub mysql_monitoring: MysqlMonitoringConfig,

    /// Process list reporting.
    #[serde(default)]
    pub process_monitoring: ProcessMonitoringConfig,

    /// Agent self-update settings.
    pub self_update: SelfUpdateConfig,

    /// Docker container reporting.
    #[serde(default)]
    pub docker_monitoring: DockerMonitoringConfig,

    /// Memory monitoring toggle.
    pub mem_monitoring: bool,

    /// CPU monitoring toggle.
    pub cpu_monitoring: bool,

    /// Filesystem monitoring toggle.
    pub fs_monitoring: bool,

    /// Network monitoring toggle.
    pub net_monitoring: bool,

    /// Retries on a hub 5xx reply.
    pub on_http_5xx_retries: i64,

    /// Seconds between 5xx retries.
    #[serde(deserialize_with = "strict_float")]
    pub on_http_5xx_retry_interval: f64,
}

impl Config {
    /// Build the default configuration for a host.
    ///
    /// Construction is total: every field receives a value, with paths,
    /// interface exclusions and OS-specific monitors chosen by `host.os`.
    #[must_use]
    pub fn new(host: &HostEnv) -> Self {
        let paths = host.default_paths();
        let mut config = Self {
            operation_mode: OPERATION_MODE_FULL.to_string(),
            interval: 90.0,
            heartbeat_interval: 15.0,
            pid_file: PathBuf::new(),
            log_file: paths.log_file,
            log_syslog: String::new(),
            min: MinValuableConfig::default(),
            hub_gzip: true,
            hub_request_timeout: 30,
            hub_proxy: String::new(),
            hub_proxy_user: String::new(),
            hub_proxy_password: String::new(),
            cpu_load_data_gathering_mode: strings(&["avg1"]),
            cpu_utilisation_gathering_mode: strings(&["avg1"]),
            cpu_utilisation_types: strings(&["user", "system", "idle", "iowait"]),
            fs_type_include: strings(&[
                "ext3", "ext4", "xfs", "jfs", "ntfs", "btrfs", "hfs", "apfs", "fat32", "smbfs",
                "nfs",
            ]),
            fs_path_exclude: Vec::new(),
            fs_path_exclude_recurse: false,
            fs_metrics: strings(&[
                "free_B",
                "free_percent",
                "total_B",
                "read_B_per_s",
                "write_B_per_s",
                "read_ops_per_s",
                "write_ops_per_s",
            ]),
            fs_identify_mountpoints_by_device: true,
            net_interface_exclude: Vec::new(),
            net_interface_exclude_regex: strings(&[
                "^vnet(.*)$",
                "^virbr(.*)$",
                "^vmnet(.*)$",
                "^vEthernet(.*)$",
            ]),
            net_interface_exclude_disconnected: true,
            net_interface_exclude_loopback: true,
            net_metrics: strings(&[
                "in_B_per_s",
                "out_B_per_s",
                "total_out_B_per_s",
                "total_in_B_per_s",
            ]),
            net_interface_max_speed: String::new(),
            system_fields: strings(&[
                "uname",
                "os_kernel",
                "os_family",
                "os_arch",
                "cpu_model",
                "fqdn",
                "memory_total_B",
            ]),
            virtual_machines_stat: Vec::new(),
            hardware_inventory: true,
            discover_autostarting_services_only: true,
            cpu_utilisation_analysis: CpuUtilisationAnalysisConfig::default(),
            temperature_monitoring: true,
            software_raid_monitoring: true,
            smart_monitoring: false,
            smartctl: String::new(),
            logs: LogsConfig::default(),
            storcli: StorCliConfig::default(),
            job_monitoring: JobMonitoringConfig {
                spool_dir: paths.jobmon_spool_dir,
                ..JobMonitoringConfig::default()
            },
            system_updates_checks: SystemUpdatesChecksConfig::default(),
            mysql_monitoring: MysqlMonitoringConfig::default(),
            process_monitoring: ProcessMonitoringConfig::default(),
            self_update: SelfUpdateConfig::default(),
            docker_monitoring: DockerMonitoringConfig::default(),
            mem_monitoring: true,
            cpu_monitoring: true,
            fs_monitoring: true,
            net_monitoring: true,
            on_http_5xx_retries: 4,
            on_http_5xx_retry_interval: 2.0,
        };

        match host.os {
            HostOs::Windows => {
                config
                    .net_interface_exclude_regex
                    .push("Pseudo-Interface".to_string());
                config.cpu_load_data_gathering_mode.clear();
                config.cpu_utilisation_types = strings(&["user", "system", "idle"]);
                config.virtual_machines_stat = strings(&["hyper-v"]);
                config.self_update.enabled = true;
                config.self_update.url = SELF_UPDATES_FEED_URL.to_string();
            }
            HostOs::MacOs => {}
            HostOs::Linux | HostOs::Other => {
                config.fs_metrics.push("inodes_used_percent".to_string());
            }
        }

        config
    }

    /// Parse `net_interface_max_speed` into bytes per second.
    ///
    /// An empty value yields 0, meaning the speed is detected at runtime.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseSpeedError`] for malformed values.
    pub fn parsed_net_interface_max_speed(&self) -> Result<u64, ParseSpeedError> {
        bandwidth::parse_max_speed(&self.net_interface_max_speed)
    }

    /// Render the whole configuration with documentation comments.
    ///
    /// Encoding failures are logged and produce an empty string.
    #[must_use]
    pub fn render_toml(&self) -> String {
        match codec::encode(self) {
            Ok(text) => text,
            Err(e) => {
                log::error!("failed to render config: {e}");
                String::new()
            }
        }
    }
}

/// Top-process analysis thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpuUtilisationAnalysisConfig {
    /// Value that starts the analysis.
    #[serde(deserialize_with = "strict_float")]
    pub threshold: f64,
    /// Compare function: `lt`, `lte`, `gt` or `gte`.
    pub function: String,
    /// Utilisation kind compared against the threshold.
    pub metric: String,
    /// One of `cpu_utilisation_gathering_mode`.
    pub gathering_mode: String,
    /// Number of processes to report.
    pub report_processes: u32,
    /// Minutes the analysis continues after usage returns to normal.
    pub trailing_process_analysis_minutes: u32,
}

impl Default for CpuUtilisationAnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            function: "lt".to_string(),
            metric: "idle".to_string(),
            gathering_mode: "avg1".to_string(),
            report_processes: 5,
            trailing_process_analysis_minutes: 5,
        }
    }
}

/// Extra log outputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogsConfig {
    /// File receiving a copy of every hub payload.
    pub hub_file: String,
}

/// storcli integration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorCliConfig {
    /// Path to the storcli binary; empty disables the check.
    pub binary: String,
}

/// Job monitoring wrapper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobMonitoringConfig {
    /// Directory holding job records. Must be absolute.
    pub spool_dir: PathBuf,
    /// Keep the tail of a job's error output.
    pub record_stderr: bool,
    /// Keep the tail of a job's standard output.
    pub record_stdout: bool,
    /// One of [`JOBMON_SEVERITIES`].
    pub severity: String,
}

impl Default for JobMonitoringConfig {
    fn default() -> Self {
        Self {
            spool_dir: PathBuf::from("/var/lib/cagent/jobmon"),
            record_stderr: true,
            record_stdout: false,
            severity: "alert".to_string(),
        }
    }
}

/// Package update checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemUpdatesChecksConfig {
    /// Whether updates are checked at all.
    pub enabled: bool,
    /// Seconds the package manager may spend fetching.
    pub fetch_timeout: u32,
    /// Seconds between checks.
    pub check_interval: u32,
}

impl Default for SystemUpdatesChecksConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fetch_timeout: 30,
            check_interval: 14400,
        }
    }
}

/// MySQL/MariaDB monitoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MysqlMonitoringConfig {
    /// Whether the database is monitored.
    pub enabled: bool,
    /// Connection string, required when enabled.
    pub connect: String,
}

/// Process list reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessMonitoringConfig {
    /// Whether processes are reported.
    pub enabled: bool,
    /// Whether kernel tasks are included.
    pub enable_kernel_task_monitoring: bool,
}

impl Default for ProcessMonitoringConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            enable_kernel_task_monitoring: true,
        }
    }
}

/// Self-update settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfUpdateConfig {
    /// Whether updates are installed automatically.
    pub enabled: bool,
    /// Update feed URL.
    pub url: String,
    /// Seconds between feed checks.
    pub check_interval: u32,
}

impl Default for SelfUpdateConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: String::new(),
            check_interval: 21600,
        }
    }
}

impl SelfUpdateConfig {
    /// The check interval as a [`Duration`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::SelfUpdateConfig;
    /// use std::time::Duration;
    ///
    /// let config = SelfUpdateConfig::default();
    /// assert_eq!(config.check_interval_duration(), Duration::from_secs(21600));
    /// ```
    #[must_use]
    pub fn check_interval_duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.check_interval))
    }
}

/// Docker container reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockerMonitoringConfig {
    /// Whether containers are reported.
    pub enabled: bool,
}

impl Default for DockerMonitoringConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

/// Deserialize a float, rejecting integer literals.
///
/// The resulting "invalid type: integer, expected f64" error is turned into a
/// hint about decimal points when the file is loaded.
fn strict_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    struct FloatVisitor;

    impl Visitor<'_> for FloatVisitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("f64")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
            Ok(v)
        }
    }

    deserializer.deserialize_f64(FloatVisitor)
}

const MIN_FIELDS: [FieldDoc; 6] = [
    FieldDoc::plain(
        "log_level",
        "\"debug\", \"info\", \"error\" verbose level; can be overridden with -v flag",
    ),
    FieldDoc::plain("io_mode", "\"http\" sends results to the hub, \"file\" writes them to out_file"),
    FieldDoc::omit_empty(
        "out_file",
        "output file path in io_mode=\"file\"\ncan be overridden with -o flag\non windows backslashes must be escaped\nfor example out_file = \"C:\\\\cagent.data.txt\"",
    ),
    FieldDoc::commented("hub_url", ""),
    FieldDoc::commented("hub_user", ""),
    FieldDoc::commented("hub_password", ""),
];

static MIN_SCHEMA: Schema = Schema {
    fields: &MIN_FIELDS,
    tables: &[],
};

impl Documented for MinValuableConfig {
    fn schema() -> &'static Schema {
        &MIN_SCHEMA
    }
}

static CONFIG_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain(
        "operation_mode",
        "operation_mode, possible values:\n\"full\": perform all checks unless disabled individually through other config options. Default.\n\"minimal\": perform just the checks for CPU utilization, CPU load, memory usage and disk fill levels.\n\"heartbeat\": just send the heartbeat according to the heartbeat interval.\nApplies only to io_mode = http, ignored on the command line.",
    ),
    FieldDoc::plain("interval", "interval to push metrics to the hub, in seconds. Min: 30.0"),
    FieldDoc::plain("heartbeat", "send a heartbeat without metrics to the hub every X seconds. Min: 5.0"),
    FieldDoc::plain("pid", "pid file location"),
    FieldDoc::omit_empty("log", "log file location"),
    FieldDoc::plain(
        "log_syslog",
        "\"local\" for local unix socket or URL e.g. \"udp://localhost:514\" for remote syslog server",
    ),
    MIN_FIELDS[0],
    MIN_FIELDS[1],
    MIN_FIELDS[2],
    MIN_FIELDS[3],
    MIN_FIELDS[4],
    MIN_FIELDS[5],
    FieldDoc::plain("hub_gzip", "enable gzip when sending results to the hub"),
    FieldDoc::plain(
        "hub_request_timeout",
        "time limit in seconds for requests made to the hub.\nThe timeout includes connection time, any redirects, and reading the response body.\nMin: 1, Max: 600. default: 30",
    ),
    FieldDoc::commented("hub_proxy", ""),
    FieldDoc::commented("hub_proxy_user", ""),
    FieldDoc::commented("hub_proxy_password", ""),
    FieldDoc::plain("cpu_load_data_gathering_mode", "default ['avg1']"),
    FieldDoc::plain("cpu_utilisation_gathering_mode", "default ['avg1']"),
    FieldDoc::plain("cpu_utilisation_types", "default ['user','system','idle','iowait']"),
    FieldDoc::plain(
        "fs_type_include",
        "default ['ext3','ext4','xfs','jfs','ntfs','btrfs','hfs','apfs','fat32','smbfs','nfs']",
    ),
    FieldDoc::plain("fs_path_exclude", "Exclude file systems by name, disabled by default"),
    FieldDoc::plain(
        "fs_path_exclude_recurse",
        "With fs_path_exclude_recurse = false the specified path must match a mountpoint or it is ignored\nWith fs_path_exclude_recurse = true the specified path can be any folder and all mountpoints underneath are excluded",
    ),
    FieldDoc::plain(
        "fs_metrics",
        "default ['free_B', 'free_percent', 'total_B', 'read_B_per_s', 'write_B_per_s', 'read_ops_per_s', 'write_ops_per_s', 'inodes_used_percent']",
    ),
    FieldDoc::plain(
        "fs_identify_mountpoints_by_device",
        "Mountpoints are identified by path and device name to skip bind mounts.\nMountpoints pointing to an already seen device are ignored.\nApplies only to Linux",
    ),
    FieldDoc::commented("net_interface_exclude", ""),
    FieldDoc::plain(
        "net_interface_exclude_regex",
        "default [\"^vnet(.*)$\", \"^virbr(.*)$\", \"^vmnet(.*)$\", \"^vEthernet(.*)$\"]. On Windows \"Pseudo-Interface\" is added as well",
    ),
    FieldDoc::plain("net_interface_exclude_disconnected", "default true"),
    FieldDoc::plain("net_interface_exclude_loopback", "default true"),
    FieldDoc::plain(
        "net_metrics",
        "default ['in_B_per_s','out_B_per_s','total_out_B_per_s','total_in_B_per_s']",
    ),
    FieldDoc::plain(
        "net_interface_max_speed",
        "If empty, the maximum speed of each network card is queried to calculate bandwidth usage (default)\nSome virtual network cards report a maximum speed lower than the real one.\nSet a fixed value as <bytes per second> followed by K, M or G.\nExamples: \"125M\" (1 GigaBit), \"12.5M\" (100 MegaBits), \"12.5G\" (100 GigaBit)",
    ),
    FieldDoc::plain(
        "system_fields",
        "default ['uname','os_kernel','os_family','os_arch','cpu_model','fqdn','memory_total_B']",
    ),
    FieldDoc::plain("virtual_machines_stat", "default ['hyper-v'] on Windows, available options 'hyper-v'"),
    FieldDoc::plain("hardware_inventory", "default true"),
    FieldDoc::plain("discover_autostarting_services_only", "default true"),
    FieldDoc::plain("temperature_monitoring", "default true"),
    FieldDoc::plain(
        "software_raid_monitoring",
        "Software raid monitoring\nAuto-detect software raids by reading /proc/mdstat and monitor them\ndefault true",
    ),
    FieldDoc::plain("smart_monitoring", "Enable S.M.A.R.T monitoring of hard disks\ndefault false"),
    FieldDoc::plain(
        "smartctl",
        "Path to a smartctl binary (smartctl.exe on windows, path must be escaped) version >= 7\nsmartctl = \"C:\\\\Program Files\\\\smartmontools\\\\bin\\\\smartctl.exe\"\nsmartctl = \"/usr/local/bin/smartctl\"",
    ),
    FieldDoc::plain(
        "mem_monitoring",
        "\nTurn on or off parts of the monitoring.\nPresets of the operation_mode have precedence.\nWhat's disabled by the operation_mode can't be turned on here.\nBut it can still be turned off.\n\nTurn on/off the monitoring of memory",
    ),
    FieldDoc::plain(
        "cpu_monitoring",
        "Turn on/off any CPU related monitoring including the cpu_utilisation_analysis",
    ),
    FieldDoc::plain(
        "fs_monitoring",
        "Turn on/off any disk- and filesystem-related monitoring like fill levels and iops",
    ),
    FieldDoc::plain("net_monitoring", "Turn on/off any network-related monitoring"),
    FieldDoc::plain("on_http_5xx_retries", "Number of retries if the hub replies with a 5xx code. Range: 0-5"),
    FieldDoc::plain(
        "on_http_5xx_retry_interval",
        "Seconds between retries after a 5xx reply. Range: 1.0-3.0",
    ),
];

static CPU_ANALYSIS_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("threshold", "target value to start the analysis"),
    FieldDoc::plain(
        "function",
        "threshold compare function, possible values: 'lt', 'lte', 'gt', 'gte'",
    ),
    FieldDoc::plain("metric", "possible values: 'user','system','idle','iowait'"),
    FieldDoc::plain(
        "gathering_mode",
        "should be one of values of cpu_utilisation_gathering_mode",
    ),
    FieldDoc::plain("report_processes", "number of processes to return"),
    FieldDoc::plain(
        "trailing_process_analysis_minutes",
        "how long the analysis continues after CPU utilisation returns to normal",
    ),
];

static LOGS_FIELDS: &[FieldDoc] = &[FieldDoc::omit_empty(
    "hub_file",
    "log hub objects sent to the hub",
)];

static STORCLI_FIELDS: &[FieldDoc] = &[FieldDoc::plain(
    "binary",
    "Enable on Windows:\n  binary = 'C:\\Program Files\\storcli\\storcli64.exe'\nEnable on Linux:\n  binary = '/opt/storcli/sbin/storcli64'",
)];

static JOBMON_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("spool_dir", "Path to spool dir"),
    FieldDoc::plain(
        "record_stderr",
        "Record the last 4 KB of the error output. Default: true",
    ),
    FieldDoc::plain(
        "record_stdout",
        "Record the last 4 KB of the standard output. Default: false",
    ),
    FieldDoc::plain(
        "severity",
        "Failed jobs will be processed as alerts. Possible values alert, warning or none. Default: alert",
    ),
];

static SYSTEM_UPDATES_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("enabled", "Set 'false' to disable checking available updates"),
    FieldDoc::plain(
        "fetch_timeout",
        "Maximum time the package manager may spend fetching available updates, ignored on windows",
    ),
    FieldDoc::plain(
        "check_interval",
        "Check for available updates every N seconds. Minimum is 300 seconds",
    ),
];

static MYSQL_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("enabled", "Set 'true' to enable MySQL monitoring"),
    FieldDoc::plain(
        "connect",
        "Connection string, for example \"user:password@tcp(127.0.0.1:3306)/\"",
    ),
];

static PROCESS_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("enabled", "Set 'false' to disable process monitoring"),
    FieldDoc::plain(
        "enable_kernel_task_monitoring",
        "Set 'false' to skip kernel tasks",
    ),
];

static SELF_UPDATE_FIELDS: &[FieldDoc] = &[
    FieldDoc::plain("enabled", "Set 'false' to disable self-updates"),
    FieldDoc::plain("url", "URL for updates feed"),
    FieldDoc::plain(
        "check_interval",
        "cagent will check for new versions every N seconds. Minimum is 600 seconds",
    ),
];

static DOCKER_FIELDS: &[FieldDoc] = &[FieldDoc::plain(
    "enabled",
    "Set 'false' to disable docker monitoring",
)];

static CONFIG_TABLES: &[TableDoc] = &[
    TableDoc {
        key: "cpu_utilisation_analysis",
        doc: "Report the top processes when CPU utilisation crosses a threshold",
        fields: CPU_ANALYSIS_FIELDS,
    },
    TableDoc {
        key: "logs",
        doc: "",
        fields: LOGS_FIELDS,
    },
    TableDoc {
        key: "storcli",
        doc: "Enable monitoring of hardware health for MegaRaids\nreported by the storcli command-line tool\nOn Linux make sure a sudo rule exists. The storcli command is always executed via sudo. Example:\ncagent ALL= NOPASSWD: /opt/MegaRAID/storcli/storcli64 /call show all J",
        fields: STORCLI_FIELDS,
    },
    TableDoc {
        key: "jobmon",
        doc: "Settings for the jobmon wrapper for the job monitoring",
        fields: JOBMON_FIELDS,
    },
    TableDoc {
        key: "system_updates_checks",
        doc: "Monitor the available updates using the operating system updates service\nUses apt-get, apt-check or yum, requires sudo rules. DEB and RPM packages install them automatically.\nOn Windows, it requires windows updates to be switched on, ignored if windows updates are switched off",
        fields: SYSTEM_UPDATES_FIELDS,
    },
    TableDoc {
        key: "mysql_monitoring",
        doc: "Monitor the basic performance metrics of a MySQL or MariaDB database\n** EXPERIMENTAL                          **\n** Do not use in production environments **",
        fields: MYSQL_FIELDS,
    },
    TableDoc {
        key: "process_monitoring",
        doc: "All running processes are reported to the hub.\nOn heavily loaded systems, or if you don't need process monitoring at all,\nyou can change the following settings.",
        fields: PROCESS_FIELDS,
    },
    TableDoc {
        key: "self_update",
        doc: "Control how cagent installs self-updates. Windows-only",
        fields: SELF_UPDATE_FIELDS,
    },
    TableDoc {
        key: "docker_monitoring",
        doc: "All running docker containers are reported to the hub.",
        fields: DOCKER_FIELDS,
    },
];

static CONFIG_SCHEMA: Schema = Schema {
    fields: CONFIG_FIELDS,
    tables: CONFIG_TABLES,
};

impl Documented for Config {
    fn schema() -> &'static Schema {
        &CONFIG_SCHEMA
    }
}
