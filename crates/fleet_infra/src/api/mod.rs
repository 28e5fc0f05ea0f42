//! Wire model of the orchestration API's read endpoints.
//!
//! State fields are kept as raw strings: a state the backend added after this
//! build must still deserialize and reach the classifier as `Unmapped`
//! instead of failing the whole list.

pub mod summary;

use std::fmt;

use serde::Deserialize;

use fleet_core::docker::{ContainerState, ContainerSummary};
use fleet_core::{Reading, ResourceKind, read_state};

pub use summary::parse_summary;

/// Decode failure of a read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireError {
    pub request: &'static str,
    pub message: String,
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to decode {} response: {}", self.request, self.message)
    }
}

impl std::error::Error for WireError {}

/// One entry of a `List*` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceListItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub info: ListItemInfo,
}

/// Kind-specific info; fields absent for a kind stay at their default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ListItemInfo {
    /// Raw lifecycle state. Absent while the backend has not computed it.
    #[serde(default)]
    pub state: Option<String>,
    /// Free-form status line (container status, last error).
    #[serde(default)]
    pub status: Option<String>,
    /// Hosting server of deployments, stacks and repos.
    #[serde(default)]
    pub server_id: Option<String>,
    #[serde(default)]
    pub update_available: bool,
    /// Servers only.
    #[serde(default)]
    pub container_exec_disabled: Option<bool>,
}

impl ResourceListItem {
    /// Render-boundary reading of this item's state.
    pub fn reading(&self, kind: ResourceKind) -> Reading {
        read_state(kind, self.info.state.as_deref())
    }
}

/// Decode a `List*` response for `kind`.
pub fn parse_list(kind: ResourceKind, json: &str) -> Result<Vec<ResourceListItem>, WireError> {
    serde_json::from_str(json).map_err(|e| WireError {
        request: kind.list_request(),
        message: e.to_string(),
    })
}

/// One entry of a `ListDockerContainers` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContainerListItem {
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub networks: Vec<String>,
    #[serde(default)]
    pub volumes: Vec<String>,
}

impl ContainerListItem {
    /// Convert to the core summary. An unrecognized engine status is treated
    /// as `Empty` (rendered Unknown).
    pub fn into_summary(self) -> ContainerSummary {
        let state = ContainerState::from_wire(&self.state).unwrap_or_else(|| {
            tracing::warn!(
                container = %self.name,
                raw = %self.state,
                "container state outside closed set; rendering as unknown"
            );
            ContainerState::Empty
        });
        ContainerSummary {
            name: self.name,
            state,
            image_id: self.image_id,
            networks: self.networks,
            volumes: self.volumes,
        }
    }
}

/// Decode a `ListDockerContainers` response.
pub fn parse_containers(json: &str) -> Result<Vec<ContainerSummary>, WireError> {
    let items: Vec<ContainerListItem> = serde_json::from_str(json).map_err(|e| WireError {
        request: "ListDockerContainers",
        message: e.to_string(),
    })?;
    Ok(items.into_iter().map(ContainerListItem::into_summary).collect())
}
