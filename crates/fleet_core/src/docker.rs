//! Docker object severities for container/network/image/volume links.
//!
//! Containers have their own closed status set. Networks, images and volumes
//! have no status; their severity comes from whether any container uses them.

use crate::severity::Severity;

/// Docker container status as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerState {
    Running,
    Created,
    Paused,
    Restarting,
    Removing,
    Exited,
    Dead,
    /// Container not found on the server.
    Empty,
}

/// Expected number of `ContainerState` variants. Update when adding new variants.
pub const EXPECTED_CONTAINER_STATE_COUNT: usize = 8;

pub const ALL_CONTAINER_STATES: &[ContainerState] = &[
    ContainerState::Running,
    ContainerState::Created,
    ContainerState::Paused,
    ContainerState::Restarting,
    ContainerState::Removing,
    ContainerState::Exited,
    ContainerState::Dead,
    ContainerState::Empty,
];

impl ContainerState {
    pub fn severity(self) -> Severity {
        match self {
            ContainerState::Running => Severity::Good,
            ContainerState::Created => Severity::Neutral,
            ContainerState::Paused | ContainerState::Restarting | ContainerState::Removing => {
                Severity::Warning
            }
            ContainerState::Exited | ContainerState::Dead => Severity::Critical,
            ContainerState::Empty => Severity::Unknown,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            ContainerState::Running => "running",
            ContainerState::Created => "created",
            ContainerState::Paused => "paused",
            ContainerState::Restarting => "restarting",
            ContainerState::Removing => "removing",
            ContainerState::Exited => "exited",
            ContainerState::Dead => "dead",
            ContainerState::Empty => "",
        }
    }

    /// Parse the engine spelling; `None` outside the closed set.
    pub fn from_wire(raw: &str) -> Option<Self> {
        ALL_CONTAINER_STATES
            .iter()
            .copied()
            .find(|s| s.as_wire() == raw)
    }
}

/// Summary of a container as listed on a server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub name: String,
    pub state: ContainerState,
    pub image_id: Option<String>,
    pub networks: Vec<String>,
    pub volumes: Vec<String>,
}

/// Severity of a named container on a server; missing containers are `Empty`.
pub fn container_link_severity(containers: &[ContainerSummary], name: &str) -> Severity {
    containers
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.state)
        .unwrap_or(ContainerState::Empty)
        .severity()
}

/// Networks docker creates itself; unused is their normal state.
pub const BUILTIN_NETWORKS: &[&str] = &["none", "host", "bridge"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DockerObject {
    Network,
    Image,
    Volume,
}

fn used_by(object: DockerObject, container: &ContainerSummary, name: &str) -> bool {
    match object {
        DockerObject::Network => container.networks.iter().any(|n| n == name),
        DockerObject::Image => container.image_id.as_deref() == Some(name),
        DockerObject::Volume => container.volumes.iter().any(|v| v == name),
    }
}

/// Severity of a network/image/volume link.
///
/// No (or empty) name -> Warning. Unused -> Critical (builtin networks -> None).
/// Used by at least one container -> Good.
pub fn object_link_severity(
    object: DockerObject,
    containers: &[ContainerSummary],
    name: Option<&str>,
) -> Severity {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return Severity::Warning;
    };
    if containers.iter().any(|c| used_by(object, c, name)) {
        return Severity::Good;
    }
    if object == DockerObject::Network && BUILTIN_NETWORKS.contains(&name) {
        return Severity::None;
    }
    Severity::Critical
}
