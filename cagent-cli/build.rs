//! Build script for cagent-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("cagent-config")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and generate cagent configuration")
        .long_about(
            "Resolve, validate and generate configuration files for the cagent monitoring agent",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Config file to use instead of the platform default")
                .value_name("PATH")
                .global(true)
                .env("CAGENT_CONFIG"),
        )
        .subcommands(vec![
            Command::new("show")
                .about("Resolve the config file and print the result")
                .long_about(
                    "Resolve the config file as the agent does on startup, \
                     generating a bootstrap file if none exists",
                ),
            Command::new("defaults")
                .about("Print the default configuration with documentation")
                .long_about("Print every option with its default value and documentation"),
            Command::new("validate")
                .about("Validate a config file without generating one")
                .long_about("Decode, migrate and validate an existing config file"),
            Command::new("init")
                .about("Write a bootstrap config file")
                .long_about(
                    "Write a minimal config file derived from the CAGENT_HUB_* environment variables",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
            Command::new("max-speed")
                .about("Parse a network interface speed into bytes per second")
                .long_about("Parse a speed such as 125M into bytes per second"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("cagent-config.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
