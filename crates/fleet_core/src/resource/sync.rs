//! Resource sync states and their derivation from sync bookkeeping.
//!
//! A resource sync compares declared resources (from files or a git repo)
//! against what the platform currently holds. Its state is not reported by an
//! agent; it is derived from the pending diff and the action-in-flight flag.

use super::{LifecycleState, ResourceKind, ResourceState};
use crate::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyncState {
    Unknown,
    /// Declared and actual resources match.
    Ok,
    /// Changes are waiting to be executed.
    Pending,
    /// A sync action is running.
    Syncing,
    /// Reading the declared resources failed.
    Failed,
}

impl LifecycleState for SyncState {
    const KIND: ResourceKind = ResourceKind::ResourceSync;
    const ALL: &'static [Self] = &[
        SyncState::Unknown,
        SyncState::Ok,
        SyncState::Pending,
        SyncState::Syncing,
        SyncState::Failed,
    ];
    const UNKNOWN: Self = SyncState::Unknown;

    fn severity(self) -> Severity {
        match self {
            SyncState::Ok => Severity::Good,
            SyncState::Pending | SyncState::Syncing => Severity::Warning,
            SyncState::Failed => Severity::Critical,
            SyncState::Unknown => Severity::Unknown,
        }
    }

    fn as_wire(self) -> &'static str {
        match self {
            SyncState::Unknown => "Unknown",
            SyncState::Ok => "Ok",
            SyncState::Pending => "Pending",
            SyncState::Syncing => "Syncing",
            SyncState::Failed => "Failed",
        }
    }

    fn into_state(self) -> ResourceState {
        ResourceState::ResourceSync(self)
    }
}

/// Expected number of `SyncState` variants. Update when adding new variants.
pub const EXPECTED_SYNC_STATE_COUNT: usize = 5;

/// Bookkeeping a sync state is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncInfo {
    /// A sync action is currently executing.
    pub syncing: bool,
    /// Error from computing the pending diff.
    pub pending_error: Option<String>,
    /// Errors reading the remote declaration files.
    pub remote_errors: Vec<String>,
    pub resource_updates: usize,
    pub variable_updates: usize,
    pub user_group_updates: usize,
    /// Deployments/stacks queued to deploy after the sync.
    pub pending_deploys: usize,
}

impl SyncInfo {
    fn has_errors(&self) -> bool {
        self.pending_error.is_some() || !self.remote_errors.is_empty()
    }

    fn has_pending_changes(&self) -> bool {
        self.resource_updates > 0
            || self.variable_updates > 0
            || self.user_group_updates > 0
            || self.pending_deploys > 0
    }
}

/// Derive a sync's state.
///
/// Precedence: `Syncing` > `Failed` > `Pending` > `Ok`. A running action wins
/// even when the previous diff had errors.
pub fn derive_sync_state(info: &SyncInfo) -> SyncState {
    if info.syncing {
        return SyncState::Syncing;
    }
    if info.has_errors() {
        return SyncState::Failed;
    }
    if info.has_pending_changes() {
        return SyncState::Pending;
    }
    SyncState::Ok
}
