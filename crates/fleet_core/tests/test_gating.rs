//! Tab gating tests.
//!
//! - logs/inspect need a container (not `not_deployed`, not unknown)
//! - terminal additionally needs `running` and exec enabled on a known host
//! - tabs without permission are hidden; a hidden or disabled view falls
//!   back to Config
//! - kinds without a runtime show Config only

use fleet_core::gating::{
    GateContext, ResourceTab, SpecificPermission, container_link_visible, tab_gates,
    update_available_visible,
};
use fleet_core::resource::{BuildState, DeploymentState, StackState};
use fleet_core::{Reading, ResourceKind, ResourceState, read_state};

const ALL_PERMS: &[SpecificPermission] = &[
    SpecificPermission::Logs,
    SpecificPermission::Inspect,
    SpecificPermission::Terminal,
];

fn deployment(state: DeploymentState) -> Reading {
    Reading::Known(ResourceState::Deployment(state))
}

#[test]
fn test_not_deployed_disables_logs_inspect_terminal() {
    let ctx = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    let gates = tab_gates(&deployment(DeploymentState::NotDeployed), &ctx);
    assert!(gates.is_disabled(ResourceTab::Log));
    assert!(gates.is_disabled(ResourceTab::Inspect));
    assert!(gates.is_disabled(ResourceTab::Terminal));
    assert!(!gates.is_disabled(ResourceTab::Config));
}

#[test]
fn test_unknown_and_missing_state_disable_runtime_tabs() {
    let ctx = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    for reading in [
        deployment(DeploymentState::Unknown),
        Reading::NoData,
        read_state(ResourceKind::Deployment, Some("hibernating")),
    ] {
        let gates = tab_gates(&reading, &ctx);
        assert!(gates.log_disabled, "{reading:?}");
        assert!(gates.inspect_disabled, "{reading:?}");
        assert!(gates.terminal_disabled, "{reading:?}");
    }
}

#[test]
fn test_running_with_exec_enabled_allows_terminal() {
    let ctx = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    let gates = tab_gates(&deployment(DeploymentState::Running), &ctx);
    assert!(!gates.terminal_disabled);
    assert!(!gates.log_disabled);
    assert!(!gates.inspect_disabled);
    assert_eq!(gates.resolve_view(ResourceTab::Terminal), ResourceTab::Terminal);
}

#[test]
fn test_terminal_requires_exec_and_running() {
    let exec_off = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(true),
    };
    assert!(tab_gates(&deployment(DeploymentState::Running), &exec_off).terminal_disabled);

    let server_unknown = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: None,
    };
    assert!(tab_gates(&deployment(DeploymentState::Running), &server_unknown).terminal_disabled);

    let exec_on = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    let exited = tab_gates(&deployment(DeploymentState::Exited), &exec_on);
    assert!(exited.terminal_disabled);
    // Stopped containers still have logs.
    assert!(!exited.log_disabled);
}

#[test]
fn test_tabs_hidden_without_permission_and_view_falls_back() {
    let ctx = GateContext {
        permissions: &[SpecificPermission::Logs],
        container_exec_disabled: Some(false),
    };
    let gates = tab_gates(&deployment(DeploymentState::Running), &ctx);
    assert_eq!(gates.visible_tabs(), vec![ResourceTab::Config, ResourceTab::Log]);
    assert!(gates.inspect_disabled);
    assert_eq!(gates.resolve_view(ResourceTab::Inspect), ResourceTab::Config);
    assert_eq!(gates.resolve_view(ResourceTab::Log), ResourceTab::Log);

    let not_deployed = tab_gates(&deployment(DeploymentState::NotDeployed), &ctx);
    // Visible (permission held) but disabled (no container).
    assert!(not_deployed.is_visible(ResourceTab::Log));
    assert_eq!(not_deployed.resolve_view(ResourceTab::Log), ResourceTab::Config);
}

#[test]
fn test_stack_gates_use_down_as_inactive() {
    let ctx = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    let down = tab_gates(&Reading::Known(ResourceState::Stack(StackState::Down)), &ctx);
    assert!(down.log_disabled);
    let running = tab_gates(&Reading::Known(ResourceState::Stack(StackState::Running)), &ctx);
    assert!(!running.terminal_disabled);
}

#[test]
fn test_kinds_without_runtime_show_config_only() {
    let ctx = GateContext {
        permissions: ALL_PERMS,
        container_exec_disabled: Some(false),
    };
    let gates = tab_gates(&Reading::Known(ResourceState::Build(BuildState::Ok)), &ctx);
    assert_eq!(gates.visible_tabs(), vec![ResourceTab::Config]);
}

#[test]
fn test_container_link_and_update_marker() {
    assert!(!container_link_visible(&deployment(DeploymentState::NotDeployed)));
    assert!(!container_link_visible(&deployment(DeploymentState::Unknown)));
    assert!(container_link_visible(&deployment(DeploymentState::Exited)));
    assert!(!container_link_visible(&Reading::NoData));

    assert!(update_available_visible(&deployment(DeploymentState::Running), true));
    assert!(!update_available_visible(&deployment(DeploymentState::Running), false));
    assert!(!update_available_visible(&deployment(DeploymentState::NotDeployed), true));
}
