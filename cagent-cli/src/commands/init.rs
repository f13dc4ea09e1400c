//! Init command implementation.
//!
//! Writes the bootstrap config file derived from the `CAGENT_HUB_*`
//! environment variables. With `--force-env` an existing file is kept but its
//! hub settings are overwritten from the environment.

use crate::error::CliError;
use crate::utils::{config_builder, GlobalOptions};
use cagent::config::{save_config_file, BootstrapGenerator};
use clap::Args;

/// Write a bootstrap config file.
#[derive(Args)]
pub struct InitCommand {
    /// Let environment values replace settings already in the config file
    #[arg(long)]
    pub force_env: bool,
}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let builder = config_builder(global);
        let path = builder.config_path();

        if self.force_env && path.exists() {
            let mut config = config_builder(global).load_existing()?;
            builder.apply_env(&mut config.min, true)?;
            save_config_file(&config, &path)?;
            if !global.quiet {
                println!("Updated {} from the environment", path.display());
            }
            return Ok(());
        }

        let mvc = builder.bootstrap_config()?;
        BootstrapGenerator::generate(&mvc, &path)?;
        if !global.quiet {
            println!("Created {} (io_mode = {})", path.display(), mvc.io_mode);
        }
        Ok(())
    }
}
