//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the caller's `CAGENT_*` variables
//! - Config file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables read by the binary that must not leak in from the test runner.
const ISOLATED_VARS: [&str; 4] = [
    "CAGENT_CONFIG",
    "CAGENT_HUB_URL",
    "CAGENT_HUB_USER",
    "CAGENT_HUB_PASSWORD",
];

/// Test environment with an isolated config location.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the config file (not created yet)
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("etc").join("cagent.conf");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// Get a command builder with no `CAGENT_*` variables and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("cagent-config").expect("Failed to find cagent-config");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with `--config` pointing into this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `contents` to the environment's config file.
    pub fn write_config(&self, contents: &str) {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Read the environment's config file.
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).expect("Failed to read config")
    }
}
