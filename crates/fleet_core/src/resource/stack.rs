//! Stack (compose project) lifecycle states.

use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

/// Aggregate state of a stack's services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackState {
    Unknown,
    /// No services exist; the stack has never been brought up (or was taken down).
    Down,
    Deploying,
    Created,
    Restarting,
    /// All services running.
    Running,
    Removing,
    Paused,
    Stopped,
    /// Services are in mixed or failing states.
    Unhealthy,
}

impl LifecycleState for StackState {
    const KIND: ResourceKind = ResourceKind::Stack;
    const ALL: &'static [Self] = &[
        StackState::Unknown,
        StackState::Down,
        StackState::Deploying,
        StackState::Created,
        StackState::Restarting,
        StackState::Running,
        StackState::Removing,
        StackState::Paused,
        StackState::Stopped,
        StackState::Unhealthy,
    ];
    const UNKNOWN: Self = StackState::Unknown;

    fn severity(self) -> Severity {
        match self {
            StackState::Running => Severity::Good,
            StackState::Down => Severity::Neutral,
            StackState::Deploying
            | StackState::Created
            | StackState::Restarting
            | StackState::Removing
            | StackState::Paused
            | StackState::Stopped => Severity::Warning,
            StackState::Unhealthy => Severity::Critical,
            StackState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            StackState::Unknown => "unknown",
            StackState::Down => "down",
            StackState::Deploying => "deploying",
            StackState::Created => "created",
            StackState::Restarting => "restarting",
            StackState::Running => "running",
            StackState::Removing => "removing",
            StackState::Paused => "paused",
            StackState::Stopped => "stopped",
            StackState::Unhealthy => "unhealthy",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::Stack(self)
    }

    fn inactive() -> Option<Self> {
        Some(StackState::Down)
    }
}

/// Expected number of `StackState` variants. Update when adding new variants.
pub const EXPECTED_STACK_STATE_COUNT: usize = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_states_listed() {
        assert_eq!(StackState::ALL.len(), EXPECTED_STACK_STATE_COUNT);
    }
}
