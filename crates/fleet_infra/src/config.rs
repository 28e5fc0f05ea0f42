//! Dashboard configuration with documented defaults.
//!
//! Every numeric parameter has a default. An explicit value is validated
//! (finite, non-negative, in range) and rejected rather than clamped.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use fleet_core::classify::{DEFAULT_MAX_REPORTED_UNMAPPED, UnmappedStateLog};

/// Numeric dashboard parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardParam {
    /// Refresh interval of list/summary polling.
    PollIntervalMs,
    /// Alpha suffix of status badge backgrounds (0..=255).
    BadgeBackgroundAlpha,
    /// Alpha suffix of page header backgrounds (0..=255).
    HeaderBackgroundAlpha,
    /// Distinct unmapped states warned about before further ones are only counted.
    MaxReportedUnmapped,
}

/// Expected number of `DashboardParam` variants. Update when adding new variants.
pub const EXPECTED_PARAM_COUNT: usize = 4;

/// All known `DashboardParam` variants (for exhaustive iteration in tests).
pub const ALL_PARAMS: &[DashboardParam] = &[
    DashboardParam::PollIntervalMs,
    DashboardParam::BadgeBackgroundAlpha,
    DashboardParam::HeaderBackgroundAlpha,
    DashboardParam::MaxReportedUnmapped,
];

/// Returns the default for a parameter, or `None` if it must be configured.
pub fn param_default(param: DashboardParam) -> Option<f64> {
    match param {
        DashboardParam::PollIntervalMs => Some(10_000.0),
        DashboardParam::BadgeBackgroundAlpha => Some(37.0),
        DashboardParam::HeaderBackgroundAlpha => Some(21.0),
        DashboardParam::MaxReportedUnmapped => Some(DEFAULT_MAX_REPORTED_UNMAPPED as f64),
    }
}

/// Returns the snake_case config key for a parameter.
pub fn param_name(param: DashboardParam) -> &'static str {
    match param {
        DashboardParam::PollIntervalMs => "poll_interval_ms",
        DashboardParam::BadgeBackgroundAlpha => "badge_background_alpha",
        DashboardParam::HeaderBackgroundAlpha => "header_background_alpha",
        DashboardParam::MaxReportedUnmapped => "max_reported_unmapped",
    }
}

fn param_max(param: DashboardParam) -> Option<f64> {
    match param {
        DashboardParam::BadgeBackgroundAlpha | DashboardParam::HeaderBackgroundAlpha => {
            Some(u8::MAX as f64)
        }
        DashboardParam::PollIntervalMs | DashboardParam::MaxReportedUnmapped => None,
    }
}

/// Invalid or missing configuration value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigError {
    pub param_name: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dashboard config '{}': {}", self.param_name, self.reason)
    }
}

impl std::error::Error for ConfigError {}

/// Resolve a parameter value.
///
/// - `Some(v)` is validated and returned.
/// - `None` falls back to the default, or errors if there is none.
pub fn resolve_param(param: DashboardParam, value: Option<f64>) -> Result<f64, ConfigError> {
    let err = |reason| ConfigError {
        param_name: param_name(param),
        reason,
    };
    let Some(v) = value else {
        return param_default(param).ok_or_else(|| err("missing and has no default"));
    };
    if !v.is_finite() {
        return Err(err("value is non-finite (NaN or Infinity)"));
    }
    if v < 0.0 {
        return Err(err("value is negative"));
    }
    if v.fract() != 0.0 {
        return Err(err("value must be a whole number"));
    }
    if let Some(max) = param_max(param) {
        if v > max {
            return Err(err("value exceeds 255"));
        }
    }
    if param == DashboardParam::PollIntervalMs && v == 0.0 {
        return Err(err("poll interval must be positive"));
    }
    Ok(v)
}

/// What to do with a state value outside its kind's closed set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmappedPolicy {
    /// Render as Unknown and warn once per value.
    #[default]
    Fallback,
    /// Fail the snapshot.
    Reject,
}

/// Dashboard configuration as written by the operator. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    #[serde(default)]
    pub poll_interval_ms: Option<f64>,
    #[serde(default)]
    pub badge_background_alpha: Option<f64>,
    #[serde(default)]
    pub header_background_alpha: Option<f64>,
    #[serde(default)]
    pub max_reported_unmapped: Option<f64>,
    #[serde(default)]
    pub unmapped_policy: UnmappedPolicy,
}

/// Validated configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub poll_interval: Duration,
    pub badge_alpha: u8,
    pub header_alpha: u8,
    pub max_reported_unmapped: usize,
    pub unmapped_policy: UnmappedPolicy,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        // Defaults always validate.
        DashboardConfig::default()
            .resolve()
            .unwrap_or(ResolvedConfig {
                poll_interval: Duration::from_millis(10_000),
                badge_alpha: 0x25,
                header_alpha: 0x15,
                max_reported_unmapped: DEFAULT_MAX_REPORTED_UNMAPPED,
                unmapped_policy: UnmappedPolicy::Fallback,
            })
    }
}

impl ResolvedConfig {
    /// Fresh unmapped-state reporter sized by `max_reported_unmapped`.
    pub fn unmapped_log(&self) -> UnmappedStateLog {
        UnmappedStateLog::new(self.max_reported_unmapped)
    }
}

impl DashboardConfig {
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        let poll_ms = resolve_param(DashboardParam::PollIntervalMs, self.poll_interval_ms)?;
        let badge = resolve_param(
            DashboardParam::BadgeBackgroundAlpha,
            self.badge_background_alpha,
        )?;
        let header = resolve_param(
            DashboardParam::HeaderBackgroundAlpha,
            self.header_background_alpha,
        )?;
        let max_unmapped = resolve_param(
            DashboardParam::MaxReportedUnmapped,
            self.max_reported_unmapped,
        )?;
        Ok(ResolvedConfig {
            poll_interval: Duration::from_millis(poll_ms as u64),
            badge_alpha: badge as u8,
            header_alpha: header as u8,
            max_reported_unmapped: max_unmapped as usize,
            unmapped_policy: self.unmapped_policy,
        })
    }
}

/// Failure to load a configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigLoadError {
    Parse(String),
    Invalid(ConfigError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Parse(msg) => write!(f, "failed to parse dashboard config: {msg}"),
            ConfigLoadError::Invalid(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

impl From<ConfigError> for ConfigLoadError {
    fn from(err: ConfigError) -> Self {
        ConfigLoadError::Invalid(err)
    }
}

/// Parse and resolve a JSON configuration document.
pub fn load_config(json: &str) -> Result<ResolvedConfig, ConfigLoadError> {
    let raw: DashboardConfig =
        serde_json::from_str(json).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
    let resolved = raw.resolve()?;
    tracing::debug!(
        "dashboard config poll_interval_ms={} unmapped_policy={:?}",
        resolved.poll_interval.as_millis(),
        resolved.unmapped_policy
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_params_have_defaults() {
        for &param in ALL_PARAMS {
            assert!(
                param_default(param).is_some(),
                "DashboardParam::{:?} ({}) missing from param_default()",
                param,
                param_name(param),
            );
        }
    }

    #[test]
    fn all_params_listed_in_constant() {
        assert_eq!(ALL_PARAMS.len(), EXPECTED_PARAM_COUNT);
        let mut names: Vec<&str> = ALL_PARAMS.iter().map(|&p| param_name(p)).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ALL_PARAMS.len(), "ALL_PARAMS has duplicate entries");
    }

    #[test]
    fn defaults_resolve() {
        let resolved = DashboardConfig::default().resolve().unwrap();
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.badge_alpha, 0x25);
        assert_eq!(resolved.header_alpha, 0x15);
    }
}
