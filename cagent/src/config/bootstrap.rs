//! Bootstrap config generation and config persistence.
//!
//! When no config file exists, a minimal one is derived from defaults and the
//! environment and written with an explanatory header.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::codec::{self, Documented};
use crate::config::environment::EnvironmentConfig;
use crate::config::platform::HostOs;
use crate::config::schema::{IoMode, MinValuableConfig};
use crate::error::{Error, Result};

/// Header written at the top of generated and saved config files.
pub const CONFIG_HEADER: &str = "# This is an auto-generated config to connect with the cloudradar service\n\
# To see all options of cagent run cagent -p\n\n";

impl MinValuableConfig {
    /// Build the bootstrap config for a host, filling blanks from `lookup`.
    ///
    /// Without a hub URL the agent writes to the null device; with one it
    /// talks to the hub.
    ///
    /// # Examples
    ///
    /// ```
    /// use cagent::config::{HostOs, IoMode, MinValuableConfig};
    ///
    /// let mvc = MinValuableConfig::bootstrap(HostOs::Linux, |_| None);
    /// assert_eq!(mvc.io_mode, IoMode::File);
    /// assert_eq!(mvc.out_file, "/dev/null");
    /// ```
    #[must_use]
    pub fn bootstrap<F>(os: HostOs, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut mvc = Self::default();
        EnvironmentConfig::apply_from(&mut mvc, false, lookup);
        mvc.select_io_mode(os);
        mvc
    }

    /// Build the bootstrap config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Environment`] for non-UTF-8 variable values.
    pub fn bootstrap_from_env(os: HostOs) -> Result<Self> {
        let mut mvc = Self::default();
        EnvironmentConfig::apply(&mut mvc, false)?;
        mvc.select_io_mode(os);
        Ok(mvc)
    }

    fn select_io_mode(&mut self, os: HostOs) {
        if self.hub_url.is_empty() {
            self.io_mode = IoMode::File;
            self.out_file = os.null_device().to_string();
        } else {
            self.io_mode = IoMode::Http;
        }
    }
}

/// Writes bootstrap config files.
pub struct BootstrapGenerator;

impl BootstrapGenerator {
    /// Write `mvc` to a new file at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigExists`] if a file is already present at `path`,
    /// [`Error::Encode`] if encoding fails, and [`Error::Io`] for directory
    /// creation or write failures.
    pub fn generate(mvc: &MinValuableConfig, path: &Path) -> Result<()> {
        let text = codec::encode(mvc)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Error::io(parent, "create directory", e))?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    Error::ConfigExists {
                        path: path.to_path_buf(),
                    }
                } else {
                    Error::io(path, "create", e)
                }
            })?;

        write_config(file, path, &text)?;
        log::info!("generated config file at {}", path.display());
        Ok(())
    }
}

/// Write a documented value to `path` with the standard header.
///
/// An existing file is overwritten.
///
/// # Errors
///
/// Returns [`Error::Encode`] if encoding fails and [`Error::Io`] if the file
/// cannot be opened or written.
pub fn save_config_file<T: Documented>(value: &T, path: &Path) -> Result<()> {
    let text = codec::encode(value)?;
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, "open", e))?;
    write_config(file, path, &text)
}

fn write_config(file: File, path: &Path, text: &str) -> Result<()> {
    let mut writer = BufWriter::new(file);
    writer
        .write_all(CONFIG_HEADER.as_bytes())
        .and_then(|()| writer.write_all(text.as_bytes()))
        .map_err(|e| Error::io(path, "write", e))?;

    let file = writer
        .into_inner()
        .map_err(|e| Error::io(path, "write", e.into_error()))?;
    file.sync_all().map_err(|e| Error::io(path, "close", e))
}
