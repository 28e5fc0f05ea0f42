use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

/// State of a source repository checked out on a server or builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepoState {
    Unknown,
    Ok,
    Cloning,
    Pulling,
    Building,
    /// Last clone, pull or build failed.
    Failed,
}

impl LifecycleState for RepoState {
    const KIND: ResourceKind = ResourceKind::Repo;
    const ALL: &'static [Self] = &[
        RepoState::Unknown,
        RepoState::Ok,
        RepoState::Cloning,
        RepoState::Pulling,
        RepoState::Building,
        RepoState::Failed,
    ];
    const UNKNOWN: Self = RepoState::Unknown;

    fn severity(self) -> Severity {
        match self {
            RepoState::Ok => Severity::Good,
            RepoState::Cloning | RepoState::Pulling | RepoState::Building => Severity::Warning,
            RepoState::Failed => Severity::Critical,
            RepoState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            RepoState::Unknown => "Unknown",
            RepoState::Ok => "Ok",
            RepoState::Cloning => "Cloning",
            RepoState::Pulling => "Pulling",
            RepoState::Building => "Building",
            RepoState::Failed => "Failed",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::Repo(self)
    }
}

/// Expected number of `RepoState` variants. Update when adding new variants.
pub const EXPECTED_REPO_STATE_COUNT: usize = 6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_states_listed() {
        assert_eq!(RepoState::ALL.len(), EXPECTED_REPO_STATE_COUNT);
    }

    #[test]
    fn repos_have_no_inactive_state() {
        assert_eq!(RepoState::inactive(), None);
    }
}
