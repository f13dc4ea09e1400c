//! Command to validate a cagent config file.

use crate::error::CliError;
use crate::utils::{config_builder, GlobalOptions};
use clap::Args;
use std::path::PathBuf;

/// Validate a config file without generating one.
#[derive(Args)]
pub struct ValidateCommand {
    /// Config file to validate (defaults to the resolved config path)
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut builder = config_builder(global);
        if let Some(path) = self.config_path {
            builder = builder.with_path(path);
        }
        let path = builder.config_path();

        builder.load_existing()?;

        if !global.quiet {
            println!("Configuration is valid: {}", path.display());
        }
        Ok(())
    }
}
