//! Show command implementation.
//!
//! Resolves the config file the way the agent does on startup, generating a
//! bootstrap file when none exists, and prints the result.

use crate::error::CliError;
use crate::utils::{apply_log_level, config_builder, FormatArg, GlobalOptions};
use cagent::output::OutputFormat;
use clap::Args;

/// Resolve the config file and print the result.
#[derive(Args)]
pub struct ShowCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "toml", ignore_case = true)]
    pub format: FormatArg,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = config_builder(global).build()?;
        apply_log_level(global, config.min.log_level);

        let output = OutputFormat::from(self.format).render(&config)?;
        print!("{output}");
        if !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
