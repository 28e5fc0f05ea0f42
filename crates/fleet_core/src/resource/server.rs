//! Server (periphery agent host) states.

use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

/// Reachability of a server's periphery agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerState {
    /// Not polled yet since core start.
    Unknown,
    /// Agent reachable and healthy.
    Ok,
    /// Agent unreachable or reporting errors.
    NotOk,
    /// Polling switched off by the operator.
    Disabled,
}

impl LifecycleState for ServerState {
    const KIND: ResourceKind = ResourceKind::Server;
    const ALL: &'static [Self] = &[
        ServerState::Unknown,
        ServerState::Ok,
        ServerState::NotOk,
        ServerState::Disabled,
    ];
    const UNKNOWN: Self = ServerState::Unknown;

    fn severity(self) -> Severity {
        match self {
            ServerState::Ok => Severity::Good,
            ServerState::NotOk => Severity::Critical,
            ServerState::Disabled => Severity::Neutral,
            ServerState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            ServerState::Unknown => "Unknown",
            ServerState::Ok => "Ok",
            ServerState::NotOk => "NotOk",
            ServerState::Disabled => "Disabled",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::Server(self)
    }

    fn inactive() -> Option<Self> {
        Some(ServerState::Disabled)
    }
}

/// Expected number of `ServerState` variants. Update when adding new variants.
pub const EXPECTED_SERVER_STATE_COUNT: usize = 4;
