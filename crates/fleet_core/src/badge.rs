//! Badge, icon and page-header derivations from a `Reading`.
//!
//! These only decide text and color tokens; layout belongs to the renderer.

use crate::classify::Reading;
use crate::resource::{DeploymentState, ResourceKind, ResourceState};
use crate::severity::{Severity, background_with_alpha, color_tokens};

/// Raw value rendered as a two-word label instead of its literal spelling.
pub const NOT_OK_RAW: &str = "NotOk";
const NOT_OK_LABEL: &str = "Not Ok";

/// Badge text: upper-spaced raw value (`not_deployed` -> `NOT DEPLOYED`).
///
/// `NotOk` is the one exception and renders as `NOT OK`.
pub fn badge_text(raw: &str) -> String {
    let text = if raw == NOT_OK_RAW { NOT_OK_LABEL } else { raw };
    text.split('_')
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

/// A rendered status badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub severity: Severity,
    pub text_class: &'static str,
    /// Severity hex tinted with the configured alpha.
    pub background: String,
}

/// Status badge for a reading; `None` while no state has loaded or the
/// state text is empty.
pub fn status_badge(reading: &Reading, background_alpha: u8) -> Option<Badge> {
    let raw = reading.raw().filter(|r| !r.is_empty())?;
    let severity = reading.severity()?;
    Some(Badge {
        text: badge_text(raw),
        severity,
        text_class: color_tokens(severity).text_class,
        background: background_with_alpha(severity, background_alpha),
    })
}

/// Icon stroke class; `None` leaves the icon uncolored (no data yet).
pub fn icon_stroke(reading: &Reading) -> Option<&'static str> {
    let stroke = color_tokens(reading.severity()?).stroke_class;
    if stroke.is_empty() { None } else { Some(stroke) }
}

/// State label shown in a resource page header.
pub fn header_state_label(reading: &Reading) -> String {
    match reading {
        Reading::Known(ResourceState::Deployment(DeploymentState::NotDeployed)) => {
            "Not Deployed".to_string()
        }
        other => other.raw().unwrap_or_default().to_string(),
    }
}

/// Page header tokens for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub icon: &'static str,
    pub icon_stroke: Option<&'static str>,
    pub state_label: String,
    pub text_class: &'static str,
    pub background: String,
}

/// Header for a resource page. A loading reading is tinted like `Severity::None`.
pub fn page_header(kind: ResourceKind, reading: &Reading, background_alpha: u8) -> PageHeader {
    let severity = reading.severity().unwrap_or(Severity::None);
    PageHeader {
        icon: kind.icon_name(),
        icon_stroke: icon_stroke(reading),
        state_label: header_state_label(reading),
        text_class: color_tokens(severity).text_class,
        background: background_with_alpha(severity, background_alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_text_drops_empty_words() {
        assert_eq!(badge_text("_weird__value_"), "WEIRD VALUE");
    }
}
