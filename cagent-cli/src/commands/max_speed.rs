//! Max-speed command implementation.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use cagent::config::parse_max_speed;
use clap::Args;

/// Parse a network interface speed such as `125M` into bytes per second.
#[derive(Args)]
pub struct MaxSpeedCommand {
    /// Speed with a K, M or G suffix
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,
}

impl MaxSpeedCommand {
    /// Execute the max-speed command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let bytes = parse_max_speed(&self.value)
            .map_err(|e| CliError::InvalidArguments(format!("'{}': {e}", self.value)))?;
        println!("{bytes}");
        Ok(())
    }
}
