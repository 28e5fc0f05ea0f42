//! Tab and action gating over raw states.
//!
//! Gating is a predicate over the raw state, independent of severity: a
//! stopped deployment (Warning) still has logs, a never-deployed one
//! (Neutral) does not.

use crate::classify::Reading;
use crate::resource::{DeploymentState, ResourceState, StackState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceTab {
    Config,
    Log,
    Inspect,
    Terminal,
}

/// Per-resource permissions granted on top of read access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecificPermission {
    Logs,
    Inspect,
    Terminal,
}

/// Non-state inputs to gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateContext<'a> {
    pub permissions: &'a [SpecificPermission],
    /// Container exec switch of the hosting server. `None` when the server is
    /// not (yet) known, which disables exec.
    pub container_exec_disabled: Option<bool>,
}

impl GateContext<'_> {
    fn has(&self, permission: SpecificPermission) -> bool {
        self.permissions.contains(&permission)
    }

    fn exec_disabled(&self) -> bool {
        self.container_exec_disabled.unwrap_or(true)
    }
}

/// Whether a deployment in `state` has a container to read logs/inspect from.
pub fn deployment_has_container(state: DeploymentState) -> bool {
    !matches!(state, DeploymentState::Unknown | DeploymentState::NotDeployed)
}

/// Whether a stack in `state` has services to read logs/inspect from.
pub fn stack_has_services(state: StackState) -> bool {
    !matches!(state, StackState::Unknown | StackState::Down)
}

/// Derived enablement and visibility of a resource's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabGates {
    pub log_visible: bool,
    pub inspect_visible: bool,
    pub terminal_visible: bool,
    pub log_disabled: bool,
    pub inspect_disabled: bool,
    pub terminal_disabled: bool,
}

impl TabGates {
    const CONFIG_ONLY: TabGates = TabGates {
        log_visible: false,
        inspect_visible: false,
        terminal_visible: false,
        log_disabled: true,
        inspect_disabled: true,
        terminal_disabled: true,
    };

    pub fn is_visible(&self, tab: ResourceTab) -> bool {
        match tab {
            ResourceTab::Config => true,
            ResourceTab::Log => self.log_visible,
            ResourceTab::Inspect => self.inspect_visible,
            ResourceTab::Terminal => self.terminal_visible,
        }
    }

    pub fn is_disabled(&self, tab: ResourceTab) -> bool {
        match tab {
            ResourceTab::Config => false,
            ResourceTab::Log => self.log_disabled,
            ResourceTab::Inspect => self.inspect_disabled,
            ResourceTab::Terminal => self.terminal_disabled,
        }
    }

    /// Tabs to render, in order. Disabled tabs are still listed when visible.
    pub fn visible_tabs(&self) -> Vec<ResourceTab> {
        [
            ResourceTab::Config,
            ResourceTab::Log,
            ResourceTab::Inspect,
            ResourceTab::Terminal,
        ]
        .into_iter()
        .filter(|tab| self.is_visible(*tab))
        .collect()
    }

    /// View to show for a remembered selection; falls back to `Config`.
    pub fn resolve_view(&self, selected: ResourceTab) -> ResourceTab {
        if self.is_visible(selected) && !self.is_disabled(selected) {
            selected
        } else {
            ResourceTab::Config
        }
    }
}

/// Tab gates for a resource reading.
///
/// Only deployments and stacks carry log/inspect/terminal tabs. A missing or
/// unmapped state disables every state-dependent tab.
pub fn tab_gates(reading: &Reading, ctx: &GateContext<'_>) -> TabGates {
    let (has_runtime, running) = match reading.known() {
        Some(ResourceState::Deployment(state)) => (
            deployment_has_container(state),
            state == DeploymentState::Running,
        ),
        Some(ResourceState::Stack(state)) => {
            (stack_has_services(state), state == StackState::Running)
        }
        Some(_) => return TabGates::CONFIG_ONLY,
        None => (false, false),
    };

    TabGates {
        log_visible: ctx.has(SpecificPermission::Logs),
        inspect_visible: ctx.has(SpecificPermission::Inspect),
        terminal_visible: ctx.has(SpecificPermission::Terminal),
        log_disabled: !ctx.has(SpecificPermission::Logs) || !has_runtime,
        inspect_disabled: !ctx.has(SpecificPermission::Inspect) || !has_runtime,
        terminal_disabled: !ctx.has(SpecificPermission::Terminal)
            || ctx.exec_disabled()
            || !running,
    }
}

/// Whether to link to the deployment's docker container.
pub fn container_link_visible(reading: &Reading) -> bool {
    matches!(
        reading.known(),
        Some(ResourceState::Deployment(state)) if deployment_has_container(state)
    )
}

/// Whether to show the "update available" marker for a deployment or stack.
pub fn update_available_visible(reading: &Reading, update_available: bool) -> bool {
    if !update_available {
        return false;
    }
    match reading.known() {
        Some(ResourceState::Deployment(state)) => deployment_has_container(state),
        Some(ResourceState::Stack(state)) => stack_has_services(state),
        _ => false,
    }
}
