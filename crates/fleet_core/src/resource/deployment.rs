//! Deployment (single container) lifecycle states.

use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

/// State of a deployment's container as last observed on its server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentState {
    /// Periphery agent could not report the container.
    Unknown,
    /// No container exists for this deployment yet.
    NotDeployed,
    Created,
    Restarting,
    Running,
    Removing,
    Paused,
    Exited,
    Dead,
}

impl LifecycleState for DeploymentState {
    const KIND: ResourceKind = ResourceKind::Deployment;
    const ALL: &'static [Self] = &[
        DeploymentState::Unknown,
        DeploymentState::NotDeployed,
        DeploymentState::Created,
        DeploymentState::Restarting,
        DeploymentState::Running,
        DeploymentState::Removing,
        DeploymentState::Paused,
        DeploymentState::Exited,
        DeploymentState::Dead,
    ];
    const UNKNOWN: Self = DeploymentState::Unknown;

    fn severity(self) -> Severity {
        match self {
            DeploymentState::Running => Severity::Good,
            DeploymentState::NotDeployed => Severity::Neutral,
            DeploymentState::Created
            | DeploymentState::Restarting
            | DeploymentState::Removing
            | DeploymentState::Paused
            | DeploymentState::Exited => Severity::Warning,
            DeploymentState::Dead => Severity::Critical,
            DeploymentState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            DeploymentState::Unknown => "unknown",
            DeploymentState::NotDeployed => "not_deployed",
            DeploymentState::Created => "created",
            DeploymentState::Restarting => "restarting",
            DeploymentState::Running => "running",
            DeploymentState::Removing => "removing",
            DeploymentState::Paused => "paused",
            DeploymentState::Exited => "exited",
            DeploymentState::Dead => "dead",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::Deployment(self)
    }

    fn inactive() -> Option<Self> {
        Some(DeploymentState::NotDeployed)
    }
}

/// Expected number of `DeploymentState` variants. Update when adding new variants.
pub const EXPECTED_DEPLOYMENT_STATE_COUNT: usize = 9;
