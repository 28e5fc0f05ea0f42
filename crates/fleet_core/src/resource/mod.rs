//! Resource kinds and their raw lifecycle states.
//!
//! Each kind owns a closed state enum. Classification goes through
//! `LifecycleState::severity`, which every kind implements as an exhaustive
//! `match` without a wildcard arm: a new backend state does not compile until
//! it has been given a severity.

pub mod build;
pub mod deployment;
pub mod repo;
pub mod server;
pub mod stack;
pub mod sync;

pub use build::BuildState;
pub use deployment::DeploymentState;
pub use repo::RepoState;
pub use server::ServerState;
pub use stack::StackState;
pub use sync::{SyncInfo, SyncState, derive_sync_state};

use crate::severity::Severity;

/// Manageable entity kinds of the orchestration platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Deployment,
    Stack,
    Repo,
    Build,
    Server,
    ResourceSync,
}

/// Expected number of `ResourceKind` variants. Update when adding new variants.
pub const EXPECTED_KIND_COUNT: usize = 6;

/// All `ResourceKind` variants, for exhaustive iteration.
pub const ALL_KINDS: &[ResourceKind] = &[
    ResourceKind::Deployment,
    ResourceKind::Stack,
    ResourceKind::Repo,
    ResourceKind::Build,
    ResourceKind::Server,
    ResourceKind::ResourceSync,
];

impl ResourceKind {
    /// Name as used by the API (`"Deployment"`, `"ResourceSync"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Deployment => "Deployment",
            ResourceKind::Stack => "Stack",
            ResourceKind::Repo => "Repo",
            ResourceKind::Build => "Build",
            ResourceKind::Server => "Server",
            ResourceKind::ResourceSync => "ResourceSync",
        }
    }

    /// Icon shape for this kind. Fixed regardless of state; only the stroke
    /// color varies.
    pub fn icon_name(self) -> &'static str {
        match self {
            ResourceKind::Deployment => "rocket",
            ResourceKind::Stack => "layers",
            ResourceKind::Repo => "git-branch",
            ResourceKind::Build => "hammer",
            ResourceKind::Server => "server",
            ResourceKind::ResourceSync => "folder-sync",
        }
    }

    /// Read endpoint returning the list items for this kind.
    pub fn list_request(self) -> &'static str {
        match self {
            ResourceKind::Deployment => "ListDeployments",
            ResourceKind::Stack => "ListStacks",
            ResourceKind::Repo => "ListRepos",
            ResourceKind::Build => "ListBuilds",
            ResourceKind::Server => "ListServers",
            ResourceKind::ResourceSync => "ListResourceSyncs",
        }
    }

    /// Read endpoint returning the aggregate counts for this kind.
    pub fn summary_request(self) -> &'static str {
        match self {
            ResourceKind::Deployment => "GetDeploymentsSummary",
            ResourceKind::Stack => "GetStacksSummary",
            ResourceKind::Repo => "GetReposSummary",
            ResourceKind::Build => "GetBuildsSummary",
            ResourceKind::Server => "GetServersSummary",
            ResourceKind::ResourceSync => "GetResourceSyncsSummary",
        }
    }

    /// The explicit "unknown" state of this kind.
    pub fn unknown_state(self) -> ResourceState {
        match self {
            ResourceKind::Deployment => DeploymentState::UNKNOWN.into_state(),
            ResourceKind::Stack => StackState::UNKNOWN.into_state(),
            ResourceKind::Repo => RepoState::UNKNOWN.into_state(),
            ResourceKind::Build => BuildState::UNKNOWN.into_state(),
            ResourceKind::Server => ServerState::UNKNOWN.into_state(),
            ResourceKind::ResourceSync => SyncState::UNKNOWN.into_state(),
        }
    }

    /// The "never activated" state of this kind, if it has one.
    pub fn inactive_state(self) -> Option<ResourceState> {
        match self {
            ResourceKind::Deployment => DeploymentState::inactive().map(LifecycleState::into_state),
            ResourceKind::Stack => StackState::inactive().map(LifecycleState::into_state),
            ResourceKind::Repo => RepoState::inactive().map(LifecycleState::into_state),
            ResourceKind::Build => BuildState::inactive().map(LifecycleState::into_state),
            ResourceKind::Server => ServerState::inactive().map(LifecycleState::into_state),
            ResourceKind::ResourceSync => SyncState::inactive().map(LifecycleState::into_state),
        }
    }

    /// Every raw state of this kind, wrapped in the tagged union.
    pub fn all_states(self) -> Vec<ResourceState> {
        match self {
            ResourceKind::Deployment => wrap_all::<DeploymentState>(),
            ResourceKind::Stack => wrap_all::<StackState>(),
            ResourceKind::Repo => wrap_all::<RepoState>(),
            ResourceKind::Build => wrap_all::<BuildState>(),
            ResourceKind::Server => wrap_all::<ServerState>(),
            ResourceKind::ResourceSync => wrap_all::<SyncState>(),
        }
    }
}

fn wrap_all<S: LifecycleState>() -> Vec<ResourceState> {
    S::ALL.iter().map(|s| s.into_state()).collect()
}

/// Common contract of every per-kind raw state enum.
pub trait LifecycleState: Copy + Eq + std::fmt::Debug + 'static {
    /// Kind owning this state enum.
    const KIND: ResourceKind;
    /// Every variant, in declaration order.
    const ALL: &'static [Self];
    /// The single variant classified as `Severity::Unknown`.
    const UNKNOWN: Self;

    /// Severity of this state.
    fn severity(self) -> Severity;

    /// Literal spelling reported by the backend.
    fn as_wire(self) -> &'static str;

    /// Wrap into the cross-kind tagged union.
    fn into_state(self) -> ResourceState;

    /// "Never activated / not provisioned" variant, if the kind has one.
    fn inactive() -> Option<Self> {
        None
    }

    /// Parse the backend spelling. `None` for values outside the closed set.
    fn from_wire(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_wire() == raw)
    }
}

/// A raw state tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceState {
    Deployment(DeploymentState),
    Stack(StackState),
    Repo(RepoState),
    Build(BuildState),
    Server(ServerState),
    ResourceSync(SyncState),
}

impl ResourceState {
    pub fn kind(self) -> ResourceKind {
        match self {
            ResourceState::Deployment(_) => ResourceKind::Deployment,
            ResourceState::Stack(_) => ResourceKind::Stack,
            ResourceState::Repo(_) => ResourceKind::Repo,
            ResourceState::Build(_) => ResourceKind::Build,
            ResourceState::Server(_) => ResourceKind::Server,
            ResourceState::ResourceSync(_) => ResourceKind::ResourceSync,
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            ResourceState::Deployment(s) => s.severity(),
            ResourceState::Stack(s) => s.severity(),
            ResourceState::Repo(s) => s.severity(),
            ResourceState::Build(s) => s.severity(),
            ResourceState::Server(s) => s.severity(),
            ResourceState::ResourceSync(s) => s.severity(),
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            ResourceState::Deployment(s) => s.as_wire(),
            ResourceState::Stack(s) => s.as_wire(),
            ResourceState::Repo(s) => s.as_wire(),
            ResourceState::Build(s) => s.as_wire(),
            ResourceState::Server(s) => s.as_wire(),
            ResourceState::ResourceSync(s) => s.as_wire(),
        }
    }

    /// Parse `raw` within the closed set of `kind`.
    pub fn from_wire(kind: ResourceKind, raw: &str) -> Option<Self> {
        match kind {
            ResourceKind::Deployment => DeploymentState::from_wire(raw).map(Self::Deployment),
            ResourceKind::Stack => StackState::from_wire(raw).map(Self::Stack),
            ResourceKind::Repo => RepoState::from_wire(raw).map(Self::Repo),
            ResourceKind::Build => BuildState::from_wire(raw).map(Self::Build),
            ResourceKind::Server => ServerState::from_wire(raw).map(Self::Server),
            ResourceKind::ResourceSync => SyncState::from_wire(raw).map(Self::ResourceSync),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_listed() {
        assert_eq!(ALL_KINDS.len(), EXPECTED_KIND_COUNT);
    }

    #[test]
    fn wire_spelling_round_trips_for_every_state() {
        for &kind in ALL_KINDS {
            for state in kind.all_states() {
                assert_eq!(state.kind(), kind);
                assert_eq!(ResourceState::from_wire(kind, state.as_wire()), Some(state));
            }
        }
    }

    #[test]
    fn wire_spellings_unique_within_kind() {
        for &kind in ALL_KINDS {
            let mut names: Vec<&str> = kind.all_states().iter().map(|s| s.as_wire()).collect();
            let before = names.len();
            names.sort();
            names.dedup();
            assert_eq!(names.len(), before, "{kind:?} has duplicate wire spellings");
        }
    }
}
