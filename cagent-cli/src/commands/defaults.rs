//! Defaults command implementation.
//!
//! Prints every option with its default value and documentation, so the
//! output can serve as a starting point for a full config file.

use crate::error::CliError;
use crate::utils::{FormatArg, GlobalOptions};
use cagent::config::{Config, HostEnv, HostOs};
use cagent::output::OutputFormat;
use clap::{Args, ValueEnum};

/// Print the default configuration with documentation.
#[derive(Args)]
pub struct DefaultsCommand {
    /// Platform to print defaults for (defaults to the running host)
    #[arg(long, value_enum, ignore_case = true)]
    pub os: Option<OsArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "toml", ignore_case = true)]
    pub format: FormatArg,
}

/// Target platform for default values.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OsArg {
    /// Linux and other Unix systems
    Linux,
    /// macOS
    Macos,
    /// Windows
    Windows,
}

impl From<OsArg> for HostOs {
    fn from(os: OsArg) -> Self {
        match os {
            OsArg::Linux => HostOs::Linux,
            OsArg::Macos => HostOs::MacOs,
            OsArg::Windows => HostOs::Windows,
        }
    }
}

impl DefaultsCommand {
    /// Execute the defaults command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut host = HostEnv::detect();
        if let Some(os) = self.os {
            host.os = os.into();
        }

        let config = Config::new(&host);
        let output = OutputFormat::from(self.format).render(&config)?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
