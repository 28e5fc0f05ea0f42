use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

/// State of the most recent build run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildState {
    Unknown,
    Ok,
    Building,
    Failed,
}

impl LifecycleState for BuildState {
    const KIND: ResourceKind = ResourceKind::Build;
    const ALL: &'static [Self] = &[
        BuildState::Unknown,
        BuildState::Ok,
        BuildState::Building,
        BuildState::Failed,
    ];
    const UNKNOWN: Self = BuildState::Unknown;

    fn severity(self) -> Severity {
        match self {
            BuildState::Ok => Severity::Good,
            BuildState::Building => Severity::Warning,
            BuildState::Failed => Severity::Critical,
            BuildState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            BuildState::Unknown => "Unknown",
            BuildState::Ok => "Ok",
            BuildState::Building => "Building",
            BuildState::Failed => "Failed",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::Build(self)
    }
}

/// Expected number of `BuildState` variants. Update when adding new variants.
pub const EXPECTED_BUILD_STATE_COUNT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_states_listed() {
        assert_eq!(BuildState::ALL.len(), EXPECTED_BUILD_STATE_COUNT);
    }
}
