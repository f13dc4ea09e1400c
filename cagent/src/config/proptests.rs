//! Property-based tests for configuration system.

use std::path::Path;

use super::bandwidth::parse_max_speed;
use super::codec::{encode, Document};
use super::loader::ConfigLoader;
use super::platform::{HostEnv, HostOs};
use super::schema::{Config, OPERATION_MODES};
use super::validator::{ConfigValidator, MIN_HEARTBEAT, MIN_INTERVAL};
use crate::error::Error;
use proptest::prelude::*;

fn defaults() -> Config {
    Config::new(&HostEnv::new(HostOs::Linux, "/usr/bin", None))
}

// Printable ASCII, including quotes and backslashes
fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

// Strategy for generating configs that differ from the defaults
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::sample::select(OPERATION_MODES.to_vec()),
        30.0f64..100_000.0,
        5.0f64..10_000.0,
        text_strategy(),
        text_strategy(),
        text_strategy(),
        text_strategy(),
        prop::collection::vec("[a-zA-Z_]{1,12}", 0..5),
        prop::collection::vec(text_strategy(), 0..3),
        any::<bool>(),
        any::<u32>(),
        -10i64..10,
    )
        .prop_map(
            |(
                mode,
                interval,
                heartbeat,
                hub_url,
                hub_password,
                out_file,
                proxy,
                fs_metrics,
                exclude,
                gzip,
                check_interval,
                retries,
            )| {
                let mut config = defaults();
                config.operation_mode = mode.to_string();
                config.interval = interval;
                config.heartbeat_interval = heartbeat;
                config.min.hub_url = hub_url;
                config.min.hub_password = hub_password;
                config.min.out_file = out_file;
                config.hub_proxy = proxy;
                config.fs_metrics = fs_metrics;
                config.net_interface_exclude = exclude;
                config.hub_gzip = gzip;
                config.self_update.check_interval = check_interval;
                config.on_http_5xx_retries = retries;
                config
            },
        )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= f64::EPSILON * a.abs().max(1.0)
}

fn assert_equivalent(decoded: &Config, original: &Config) -> Result<(), TestCaseError> {
    prop_assert!(close(decoded.interval, original.interval));
    prop_assert!(close(decoded.heartbeat_interval, original.heartbeat_interval));
    prop_assert!(close(
        decoded.on_http_5xx_retry_interval,
        original.on_http_5xx_retry_interval
    ));

    let mut decoded = decoded.clone();
    decoded.interval = original.interval;
    decoded.heartbeat_interval = original.heartbeat_interval;
    decoded.on_http_5xx_retry_interval = original.on_http_5xx_retry_interval;
    prop_assert_eq!(&decoded, original);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Encoding and decoding back preserves every field
    #[test]
    fn config_encode_decode_roundtrip(config in config_strategy()) {
        let text = encode(&config).unwrap();
        let decoded: Config = toml::from_str(&text).unwrap();
        assert_equivalent(&decoded, &config)?;
    }

    // Merging a file twice equals merging it once
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let text = encode(&config).unwrap();
        let document = Document::parse(&text).unwrap();
        let path = Path::new("cagent.conf");

        let mut once = defaults();
        ConfigLoader::merge_document(&mut once, &document, path).unwrap();
        let mut twice = once.clone();
        ConfigLoader::merge_document(&mut twice, &document, path).unwrap();

        prop_assert_eq!(once, twice);
    }

    // Every accepted operation mode validates
    #[test]
    fn valid_operation_modes_pass(mode in prop::sample::select(OPERATION_MODES.to_vec())) {
        let mut config = defaults();
        config.operation_mode = mode.to_string();
        prop_assert!(ConfigValidator::validate(&mut config).is_ok());
    }

    // Any other operation mode fails on that field
    #[test]
    fn invalid_operation_modes_fail(
        mode in "[a-zA-Z ]{0,12}".prop_filter("must not be a valid mode", |m| {
            !OPERATION_MODES.contains(&m.as_str())
        })
    ) {
        let mut config = defaults();
        config.operation_mode = mode;
        let err = ConfigValidator::validate(&mut config).unwrap_err();
        let names_mode =
            matches!(&err, Error::Validation { field, .. } if field == "operation_mode");
        prop_assert!(names_mode);
    }

    // Intervals below the floor fail, at or above it pass
    #[test]
    fn interval_floor(below in 0.0f64..MIN_INTERVAL, above in MIN_INTERVAL..1e9) {
        let mut config = defaults();
        config.interval = below;
        prop_assert!(ConfigValidator::validate(&mut config).is_err());

        config.interval = above;
        prop_assert!(ConfigValidator::validate(&mut config).is_ok());
    }

    // Heartbeats below the floor fail, at or above it pass
    #[test]
    fn heartbeat_floor(below in 0.0f64..MIN_HEARTBEAT, above in MIN_HEARTBEAT..1e9) {
        let mut config = defaults();
        config.heartbeat_interval = below;
        prop_assert!(ConfigValidator::validate(&mut config).is_err());

        config.heartbeat_interval = above;
        prop_assert!(ConfigValidator::validate(&mut config).is_ok());
    }

    // Whole numbers with a unit scale by powers of 1000
    #[test]
    fn max_speed_units_scale(
        amount in 1u64..1_000_000,
        (unit, multiplier) in prop::sample::select(vec![
            ('K', 1_000u64),
            ('M', 1_000_000),
            ('G', 1_000_000_000),
        ])
    ) {
        let parsed = parse_max_speed(&format!("{amount}{unit}")).unwrap();
        prop_assert_eq!(parsed, amount * multiplier);
    }

    // Any other unit letter is rejected
    #[test]
    fn max_speed_rejects_unknown_units(
        amount in 1u32..100_000,
        unit in "[a-zA-Z]".prop_filter("must not be a valid unit", |u| {
            !matches!(u.as_str(), "K" | "M" | "G")
        })
    ) {
        let rejected = parse_max_speed(&format!("{amount}{unit}")).is_err();
        prop_assert!(rejected);
    }
}
