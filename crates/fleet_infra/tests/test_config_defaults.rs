//! Dashboard configuration resolution.

use std::time::Duration;

use fleet_infra::config::{
    ALL_PARAMS, ConfigError, ConfigLoadError, DashboardParam, UnmappedPolicy, load_config,
    param_default, param_name, resolve_param,
};

#[test]
fn test_missing_poll_interval_defaults_to_ten_seconds() {
    let resolved = load_config("{}").expect("empty config resolves");
    assert_eq!(resolved.poll_interval, Duration::from_millis(10_000));
    assert_eq!(resolved.unmapped_policy, UnmappedPolicy::Fallback);
}

#[test]
fn test_explicit_values_take_precedence() {
    let resolved = load_config(
        r#"{"poll_interval_ms": 2500, "badge_background_alpha": 64, "unmapped_policy": "reject"}"#,
    )
    .unwrap();
    assert_eq!(resolved.poll_interval, Duration::from_millis(2500));
    assert_eq!(resolved.badge_alpha, 64);
    assert_eq!(resolved.header_alpha, 0x15);
    assert_eq!(resolved.unmapped_policy, UnmappedPolicy::Reject);
}

#[test]
fn test_all_params_resolve_through_resolver() {
    for &param in ALL_PARAMS {
        let resolved = resolve_param(param, None);
        assert_eq!(resolved.ok(), param_default(param), "{}", param_name(param));
    }
}

#[test]
fn test_invalid_values_are_rejected_not_clamped() {
    let cases = [
        (DashboardParam::BadgeBackgroundAlpha, 256.0, "exceeds 255"),
        (DashboardParam::HeaderBackgroundAlpha, -1.0, "negative"),
        (DashboardParam::PollIntervalMs, 0.0, "positive"),
        (DashboardParam::PollIntervalMs, f64::NAN, "non-finite"),
        (DashboardParam::MaxReportedUnmapped, 1.5, "whole number"),
    ];
    for (param, value, fragment) in cases {
        let err = resolve_param(param, Some(value)).unwrap_err();
        assert_eq!(err.param_name, param_name(param));
        assert!(err.reason.contains(fragment), "{param:?}: {}", err.reason);
    }
}

#[test]
fn test_load_config_reports_parse_and_validation_errors() {
    match load_config("{not json") {
        Err(ConfigLoadError::Parse(_)) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
    match load_config(r#"{"poll_interval": 5}"#) {
        Err(ConfigLoadError::Parse(msg)) => assert!(msg.contains("poll_interval")),
        other => panic!("expected unknown-field error, got {other:?}"),
    }
    match load_config(r#"{"header_background_alpha": 300}"#) {
        Err(ConfigLoadError::Invalid(ConfigError { param_name, .. })) => {
            assert_eq!(param_name, "header_background_alpha");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
