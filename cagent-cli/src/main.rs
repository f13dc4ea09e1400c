//! Main entry point for the cagent-config CLI.
//!
//! Resolves, validates and generates configuration files for the cagent
//! monitoring agent:
//! - `show`: Resolve the config file, bootstrapping it if missing
//! - `defaults`: Print every option with its default value
//! - `validate`: Check an existing config file
//! - `init`: Write a bootstrap config file

mod cli;
mod commands;
mod error;
mod utils;

use cagent::LogLevel;
use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Until a config file is read only the flags decide
    cagent::init_logger(global.log_override().unwrap_or(LogLevel::Error));

    let result = match cli.command {
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::Defaults(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
        cli::Command::MaxSpeed(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
