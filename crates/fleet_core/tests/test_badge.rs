//! Badge, icon and page header tests.
//!
//! - badge text is the upper-spaced raw value, `NotOk` reads `NOT OK`
//! - no badge and no icon color until a non-empty state has loaded
//! - colors come from the severity, never from the raw state
//! - the icon shape is fixed per kind

use fleet_core::badge::{
    NOT_OK_RAW, badge_text, header_state_label, icon_stroke, page_header, status_badge,
};
use fleet_core::resource::{DeploymentState, RepoState, ServerState};
use fleet_core::{Reading, ResourceKind, ResourceState, Severity, UnmappedState, read_state};

#[test]
fn test_badge_text_upper_spaces_raw_values() {
    assert_eq!(badge_text("not_deployed"), "NOT DEPLOYED");
    assert_eq!(badge_text("running"), "RUNNING");
    assert_eq!(badge_text("Cloning"), "CLONING");
    assert_eq!(badge_text("Ok"), "OK");
}

#[test]
fn test_badge_text_not_ok_is_two_words() {
    assert_eq!(badge_text(NOT_OK_RAW), "NOT OK");
    // Literal spelling would have been one word.
    assert_ne!(badge_text(NOT_OK_RAW), "NOTOK");
}

#[test]
fn test_status_badge_absent_without_data() {
    assert_eq!(status_badge(&Reading::NoData, 0x25), None);
}

#[test]
fn test_status_badge_colors_from_severity() {
    let reading = read_state(ResourceKind::Server, Some("NotOk"));
    let badge = status_badge(&reading, 0x25).expect("badge for known state");
    assert_eq!(badge.text, "NOT OK");
    assert_eq!(badge.severity, Severity::Critical);
    assert_eq!(badge.text_class, Severity::Critical.tokens().text_class);
    assert_eq!(badge.background, "#EF444425");
}

#[test]
fn test_status_badge_for_unmapped_value() {
    let reading = read_state(ResourceKind::Repo, Some("Archived_Read_Only"));
    let badge = status_badge(&reading, 0x25).expect("unmapped still renders");
    assert_eq!(badge.text, "ARCHIVED READ ONLY");
    assert_eq!(badge.severity, Severity::Unknown);
}

#[test]
fn test_icon_stroke_only_with_state() {
    assert_eq!(icon_stroke(&Reading::NoData), None);
    let running = Reading::Known(ResourceState::Deployment(DeploymentState::Running));
    assert_eq!(icon_stroke(&running), Some("stroke-green-500"));
    let failed = Reading::Known(ResourceState::Repo(RepoState::Failed));
    assert_eq!(icon_stroke(&failed), Some("stroke-red-500"));
}

#[test]
fn test_header_label_and_fixed_icon() {
    let not_deployed = Reading::Known(ResourceState::Deployment(DeploymentState::NotDeployed));
    assert_eq!(header_state_label(&not_deployed), "Not Deployed");
    assert_eq!(header_state_label(&Reading::NoData), "");

    let disabled = Reading::Known(ResourceState::Server(ServerState::Disabled));
    let header = page_header(ResourceKind::Server, &disabled, 0x15);
    assert_eq!(header.icon, "server");
    assert_eq!(header.state_label, "Disabled");
    assert_eq!(header.background, "#3B82F615");

    let loading = page_header(ResourceKind::Server, &Reading::NoData, 0x15);
    assert_eq!(loading.icon, "server");
    assert_eq!(loading.icon_stroke, None);
    assert_eq!(loading.background, "");
}

#[test]
fn test_empty_state_text_renders_no_badge() {
    assert_eq!(status_badge(&read_state(ResourceKind::Stack, Some("")), 0x25), None);
    let empty_unmapped = Reading::Unmapped(UnmappedState {
        kind: ResourceKind::Stack,
        raw: String::new(),
    });
    assert_eq!(status_badge(&empty_unmapped, 0x25), None);
}
