//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, DefaultsCommand, InitCommand, MaxSpeedCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Resolve, validate and generate cagent configuration files.
#[derive(Parser)]
#[command(name = "cagent-config")]
#[command(version, about = "Resolve and generate cagent configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Config file to use instead of the platform default
    #[arg(short, long, value_name = "PATH", global = true, env = "CAGENT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve the config file and print the result
    Show(ShowCommand),

    /// Print the default configuration with documentation
    Defaults(DefaultsCommand),

    /// Validate a config file without generating one
    Validate(ValidateCommand),

    /// Write a bootstrap config file
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),

    /// Parse a network interface speed into bytes per second
    MaxSpeed(MaxSpeedCommand),
}
