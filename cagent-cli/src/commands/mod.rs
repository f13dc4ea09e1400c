//! CLI command implementations.
//!
//! - `show`: Resolve the config file and print the result
//! - `defaults`: Print the default configuration with documentation
//! - `validate`: Validate a config file without generating one
//! - `init`: Write a bootstrap config file
//! - `completions`: Generate shell completion scripts
//! - `max_speed`: Parse a network interface speed

pub mod completions;
pub mod defaults;
pub mod init;
pub mod max_speed;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use defaults::DefaultsCommand;
pub use init::InitCommand;
pub use max_speed::MaxSpeedCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
