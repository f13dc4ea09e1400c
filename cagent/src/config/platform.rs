//! Host facts that drive OS-specific defaults.
//!
//! Default paths are computed by a pure function of the host operating system,
//! the directory holding the agent executable and the user's home directory.
//! Nothing here is cached in globals, so tests can ask for any host.

use std::path::{Path, PathBuf};

/// Operating system family the agent runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOs {
    /// Microsoft Windows.
    Windows,
    /// Apple macOS.
    MacOs,
    /// Linux.
    Linux,
    /// Any other Unix-like system; treated like Linux for defaults.
    Other,
}

impl HostOs {
    /// The OS this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` style name to a host OS.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::HostOs;
    ///
    /// assert_eq!(HostOs::from_name("windows"), HostOs::Windows);
    /// assert_eq!(HostOs::from_name("macos"), HostOs::MacOs);
    /// assert_eq!(HostOs::from_name("freebsd"), HostOs::Other);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "windows" => Self::Windows,
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// Whether this is Windows.
    #[must_use]
    pub const fn is_windows(self) -> bool {
        matches!(self, Self::Windows)
    }

    /// Path of the null device used as the bootstrap output target.
    #[must_use]
    pub const fn null_device(self) -> &'static str {
        match self {
            Self::Windows => "NUL",
            _ => "/dev/null",
        }
    }
}

/// The host facts needed to compute defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    /// Host operating system.
    pub os: HostOs,
    /// Directory containing the agent executable.
    pub exe_dir: PathBuf,
    /// The invoking user's home directory, if known.
    pub home: Option<PathBuf>,
}

impl HostEnv {
    /// Describe a host explicitly.
    #[must_use]
    pub fn new(os: HostOs, exe_dir: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            os,
            exe_dir: exe_dir.into(),
            home,
        }
    }

    /// Describe the host this process runs on.
    ///
    /// Falls back to the current directory when the executable path cannot be
    /// resolved.
    #[must_use]
    pub fn detect() -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(HostOs::current(), exe_dir, home::home_dir())
    }

    /// Default paths for this host.
    #[must_use]
    pub fn default_paths(&self) -> DefaultPaths {
        DefaultPaths::for_host(self)
    }
}

/// OS-dependent default locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultPaths {
    /// Where the config file is read from and generated at.
    pub config_file: PathBuf,
    /// Default `log` value.
    pub log_file: PathBuf,
    /// Default `[jobmon] spool_dir` value.
    pub jobmon_spool_dir: PathBuf,
}

impl DefaultPaths {
    /// Compute default paths for a host.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::{DefaultPaths, HostEnv, HostOs};
    /// use std::path::PathBuf;
    ///
    /// let host = HostEnv::new(HostOs::Linux, "/usr/bin", None);
    /// let paths = DefaultPaths::for_host(&host);
    /// assert_eq!(paths.config_file, PathBuf::from("/etc/cagent/cagent.conf"));
    /// ```
    #[must_use]
    pub fn for_host(host: &HostEnv) -> Self {
        match host.os {
            HostOs::Windows => Self {
                config_file: host.exe_dir.join("cagent.conf"),
                log_file: host.exe_dir.join("cagent.log"),
                jobmon_spool_dir: PathBuf::from(r"C:\ProgramData\cagent\jobmon"),
            },
            HostOs::MacOs => {
                let base = host
                    .home
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("/"))
                    .join(".cagent");
                Self {
                    config_file: base.join("cagent.conf"),
                    log_file: base.join("cagent.log"),
                    jobmon_spool_dir: PathBuf::from("/usr/local/var/lib/cagent/jobmon"),
                }
            }
            HostOs::Linux | HostOs::Other => Self {
                config_file: PathBuf::from("/etc/cagent/cagent.conf"),
                log_file: PathBuf::from("/var/log/cagent/cagent.log"),
                jobmon_spool_dir: PathBuf::from("/var/lib/cagent/jobmon"),
            },
        }
    }
}
