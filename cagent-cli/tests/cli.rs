//! Integration tests for the cagent-config commands.
//!
//! Every test runs the binary against a config path inside a temporary
//! directory and with the `CAGENT_*` variables cleared.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_bootstraps_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("operation_mode = \"full\""))
        .stdout(predicate::str::contains("io_mode = \"file\""));

    let text = env.read_config();
    assert!(text.starts_with("# This is an auto-generated config"));
    assert!(text.contains("out_file = \"/dev/null\""));
}

#[test]
fn test_show_uses_hub_env_for_bootstrap() {
    let env = TestEnv::new();

    env.command()
        .env("CAGENT_HUB_URL", "https://hub.example.com")
        .env("CAGENT_HUB_USER", "agent")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("io_mode = \"http\""));

    let text = env.read_config();
    assert!(text.contains("hub_url = \"https://hub.example.com\""));
    assert!(text.contains("hub_user = \"agent\""));
    assert!(text.contains("# hub_password = \"\""));
}

#[test]
fn test_show_json_reflects_file() {
    let env = TestEnv::new();
    env.write_config("interval = 120.0\nhub_proxy = \"proxy:3128\"\n");

    let output = env
        .command()
        .args(["show", "--format", "json"])
        .output()
        .expect("Failed to run show");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["interval"], 120.0);
    assert_eq!(value["hub_proxy"], "http://proxy:3128");
    assert_eq!(value["jobmon"]["severity"], "alert");
}

#[test]
fn test_show_toml_parses_back() {
    let env = TestEnv::new();
    env.write_config("[cpu_utilisation_analysis]\nthreshold = 25.0\n");

    let output = env.command().arg("show").output().unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert_eq!(
        value["cpu_utilisation_analysis"]["threshold"].as_float(),
        Some(25.0)
    );
}

#[test]
fn test_show_config_from_env_var() {
    let env = TestEnv::new();
    env.write_config("operation_mode = \"minimal\"\n");

    env.command_bare()
        .env("CAGENT_CONFIG", &env.config_path)
        .args(["show", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("operation_mode: minimal"));
}

#[test]
fn test_show_decode_error_exit_code() {
    let env = TestEnv::new();
    env.write_config("interval = 60\n");

    env.command()
        .arg("show")
        .assert()
        .code(7)
        .stderr(predicate::str::contains(
            "please use numbers with a decimal point",
        ));
}

#[test]
fn test_show_validation_error_exit_code() {
    let env = TestEnv::new();
    env.write_config("heartbeat = 1.0\n");

    env.command()
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("heartbeat"));
}

#[test]
fn test_show_warns_about_clamped_retries() {
    let env = TestEnv::new();
    env.write_config("on_http_5xx_retries = 9\n");

    env.command()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("on_http_5xx_retries = 5"))
        .stderr(predicate::str::contains("was reset to 5"));
}

// ============================================================================
// defaults
// ============================================================================

#[test]
fn test_defaults_has_documentation() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["defaults", "--os", "linux"])
        .assert()
        .success()
        .stdout(predicate::str::contains("interval = 90.0"))
        .stdout(predicate::str::contains("[jobmon]"))
        .stdout(predicate::str::contains("inodes_used_percent"))
        .stdout(predicate::str::contains("# "));
}

#[test]
fn test_defaults_for_windows() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["defaults", "--os", "windows", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hyper-v"))
        .stdout(predicate::str::contains(
            "https://repo.cloudradar.io/windows/cagent/feed/rolling",
        ));
}

#[test]
fn test_defaults_never_writes() {
    let env = TestEnv::new();

    env.command().arg("defaults").assert().success();

    assert!(!env.config_path.exists());
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_valid_file() {
    let env = TestEnv::new();
    env.write_config("interval = 30.0\n[jobmon]\nseverity = \"none\"\n");

    env.command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_positional_path() {
    let env = TestEnv::new();
    let path = env.path().join("other.conf");
    std::fs::write(&path, "operation_mode = \"turbo\"\n").unwrap();

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("operation_mode"));
}

#[test]
fn test_validate_missing_file_does_not_create_it() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("not found"));

    assert!(!env.config_path.exists());
}

#[test]
fn test_validate_quiet_prints_nothing() {
    let env = TestEnv::new();
    env.write_config("");

    env.command()
        .args(["--quiet", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ============================================================================
// init
// ============================================================================

#[test]
fn test_init_creates_bootstrap() {
    let env = TestEnv::new();

    env.command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("io_mode = file"));

    let text = env.read_config();
    assert!(text.contains("log_level = \"error\""));
    assert!(text.contains("# hub_url = \"\""));
}

#[test]
fn test_init_refuses_existing_file() {
    let env = TestEnv::new();
    env.write_config("interval = 60.0\n");

    env.command()
        .arg("init")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(env.read_config(), "interval = 60.0\n");
}

#[test]
fn test_init_force_env_overwrites_hub_settings() {
    let env = TestEnv::new();
    env.write_config("interval = 60.0\nhub_url = \"https://old.example.com\"\n");

    env.command()
        .env("CAGENT_HUB_URL", "https://new.example.com")
        .args(["init", "--force-env"])
        .assert()
        .success();

    let value: toml::Value = toml::from_str(&env.read_config()).unwrap();
    assert_eq!(value["hub_url"].as_str(), Some("https://new.example.com"));
    assert_eq!(value["interval"].as_float(), Some(60.0));
}

// ============================================================================
// max-speed / completions / arguments
// ============================================================================

#[test]
fn test_max_speed_units() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["max-speed", "125M"])
        .assert()
        .success()
        .stdout("125000000\n");

    env.command_bare()
        .args(["max-speed", "1.5G"])
        .assert()
        .success()
        .stdout("1500000000\n");
}

#[test]
fn test_max_speed_invalid_unit() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["max-speed", "10X"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid arguments"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();

    env.command_bare()
        .args(["--quiet", "completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cagent-config"));
}

#[test]
fn test_unknown_format_is_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["show", "--format", "xml"])
        .assert()
        .failure();

    assert!(!env.config_path.exists());
}
