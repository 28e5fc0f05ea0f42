//! Dashboard aggregation: per-kind summary counts -> ordered chart entries.
//!
//! Counts are produced by the data source (`Get*Summary`). The aggregator
//! trusts them; `check_counts` only reports when they disagree with the
//! number of resources actually listed.
//!
//! Entry rules:
//! - Every regular bucket is emitted in a fixed order, including zeros, so
//!   charts keep their zero slices.
//! - Each kind has one fallback entry. It is emitted only when every regular
//!   bucket is zero, and then it is the only entry.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::resource::{
    BuildState, DeploymentState, RepoState, ResourceKind, ResourceState, ServerState, StackState,
    SyncState,
};
use crate::severity::Severity;

static INCONSISTENT_COUNTS_TOTAL: AtomicU64 = AtomicU64::new(0);

/// One chart slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardEntry {
    pub label: &'static str,
    pub severity: Severity,
    pub value: u64,
}

const fn entry(label: &'static str, severity: Severity, value: u64) -> DashboardEntry {
    DashboardEntry {
        label,
        severity,
        value,
    }
}

/// Sum of wire-reported buckets; saturates instead of wrapping so an absurd
/// count still fails `check_counts`.
fn bucket_sum(buckets: &[u64]) -> u64 {
    buckets.iter().fold(0, |acc, &b| acc.saturating_add(b))
}

/// Label of the synthetic fallback for kinds without an inactive bucket.
pub const EMPTY_LABEL: &str = "Empty";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeploymentsSummary {
    pub running: u64,
    pub stopped: u64,
    pub unhealthy: u64,
    pub unknown: u64,
    pub not_deployed: u64,
}

impl DeploymentsSummary {
    pub fn record(&mut self, state: DeploymentState) {
        match state {
            DeploymentState::Running => self.running += 1,
            DeploymentState::Created
            | DeploymentState::Restarting
            | DeploymentState::Removing
            | DeploymentState::Paused
            | DeploymentState::Exited => self.stopped += 1,
            DeploymentState::Dead => self.unhealthy += 1,
            DeploymentState::Unknown => self.unknown += 1,
            DeploymentState::NotDeployed => self.not_deployed += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[
            self.running,
            self.stopped,
            self.unhealthy,
            self.unknown,
            self.not_deployed,
        ])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Running", Severity::Good, self.running),
                entry("Stopped", Severity::Warning, self.stopped),
                entry("Unhealthy", Severity::Critical, self.unhealthy),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry("Not Deployed", Severity::Neutral, self.not_deployed),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StacksSummary {
    pub running: u64,
    pub stopped: u64,
    pub unhealthy: u64,
    pub unknown: u64,
    pub down: u64,
}

impl StacksSummary {
    pub fn record(&mut self, state: StackState) {
        match state {
            StackState::Running => self.running += 1,
            StackState::Deploying
            | StackState::Created
            | StackState::Restarting
            | StackState::Removing
            | StackState::Paused
            | StackState::Stopped => self.stopped += 1,
            StackState::Unhealthy => self.unhealthy += 1,
            StackState::Unknown => self.unknown += 1,
            StackState::Down => self.down += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[
            self.running,
            self.stopped,
            self.unhealthy,
            self.unknown,
            self.down,
        ])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Running", Severity::Good, self.running),
                entry("Stopped", Severity::Warning, self.stopped),
                entry("Unhealthy", Severity::Critical, self.unhealthy),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry("Down", Severity::Neutral, self.down),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReposSummary {
    pub ok: u64,
    pub cloning: u64,
    pub pulling: u64,
    pub building: u64,
    pub failed: u64,
    pub unknown: u64,
}

impl ReposSummary {
    pub fn record(&mut self, state: RepoState) {
        match state {
            RepoState::Ok => self.ok += 1,
            RepoState::Cloning => self.cloning += 1,
            RepoState::Pulling => self.pulling += 1,
            RepoState::Building => self.building += 1,
            RepoState::Failed => self.failed += 1,
            RepoState::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[
            self.ok,
            self.cloning,
            self.pulling,
            self.building,
            self.failed,
            self.unknown,
        ])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Ok", Severity::Good, self.ok),
                // Clones are shown together with pulls.
                entry("Pulling", Severity::Warning, self.cloning.saturating_add(self.pulling)),
                entry("Building", Severity::Warning, self.building),
                entry("Failed", Severity::Critical, self.failed),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry(EMPTY_LABEL, Severity::Neutral, self.total()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildsSummary {
    pub ok: u64,
    pub building: u64,
    pub failed: u64,
    pub unknown: u64,
}

impl BuildsSummary {
    pub fn record(&mut self, state: BuildState) {
        match state {
            BuildState::Ok => self.ok += 1,
            BuildState::Building => self.building += 1,
            BuildState::Failed => self.failed += 1,
            BuildState::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[self.ok, self.building, self.failed, self.unknown])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Ok", Severity::Good, self.ok),
                entry("Building", Severity::Warning, self.building),
                entry("Failed", Severity::Critical, self.failed),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry(EMPTY_LABEL, Severity::Neutral, self.total()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServersSummary {
    pub healthy: u64,
    pub unhealthy: u64,
    pub disabled: u64,
    pub unknown: u64,
}

impl ServersSummary {
    pub fn record(&mut self, state: ServerState) {
        match state {
            ServerState::Ok => self.healthy += 1,
            ServerState::NotOk => self.unhealthy += 1,
            ServerState::Disabled => self.disabled += 1,
            ServerState::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[self.healthy, self.unhealthy, self.disabled, self.unknown])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Healthy", Severity::Good, self.healthy),
                entry("Unhealthy", Severity::Critical, self.unhealthy),
                entry("Disabled", Severity::Neutral, self.disabled),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry(EMPTY_LABEL, Severity::Neutral, self.total()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncsSummary {
    pub ok: u64,
    pub pending: u64,
    pub syncing: u64,
    pub failed: u64,
    pub unknown: u64,
}

impl SyncsSummary {
    pub fn record(&mut self, state: SyncState) {
        match state {
            SyncState::Ok => self.ok += 1,
            SyncState::Pending => self.pending += 1,
            SyncState::Syncing => self.syncing += 1,
            SyncState::Failed => self.failed += 1,
            SyncState::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> u64 {
        bucket_sum(&[
            self.ok,
            self.pending,
            self.syncing,
            self.failed,
            self.unknown,
        ])
    }

    pub fn entries(&self) -> Vec<DashboardEntry> {
        with_fallback(
            vec![
                entry("Ok", Severity::Good, self.ok),
                entry("Pending", Severity::Warning, self.pending),
                entry("Syncing", Severity::Warning, self.syncing),
                entry("Failed", Severity::Critical, self.failed),
                entry("Unknown", Severity::Unknown, self.unknown),
            ],
            entry(EMPTY_LABEL, Severity::Neutral, self.total()),
        )
    }
}

fn with_fallback(regular: Vec<DashboardEntry>, fallback: DashboardEntry) -> Vec<DashboardEntry> {
    if regular.iter().all(|e| e.value == 0) {
        vec![fallback]
    } else {
        regular
    }
}

/// Summary counts of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryCounts {
    Deployments(DeploymentsSummary),
    Stacks(StacksSummary),
    Repos(ReposSummary),
    Builds(BuildsSummary),
    Servers(ServersSummary),
    Syncs(SyncsSummary),
}

impl SummaryCounts {
    /// All-zero counts for `kind`.
    pub fn empty(kind: ResourceKind) -> Self {
        match kind {
            ResourceKind::Deployment => SummaryCounts::Deployments(DeploymentsSummary::default()),
            ResourceKind::Stack => SummaryCounts::Stacks(StacksSummary::default()),
            ResourceKind::Repo => SummaryCounts::Repos(ReposSummary::default()),
            ResourceKind::Build => SummaryCounts::Builds(BuildsSummary::default()),
            ResourceKind::Server => SummaryCounts::Servers(ServersSummary::default()),
            ResourceKind::ResourceSync => SummaryCounts::Syncs(SyncsSummary::default()),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            SummaryCounts::Deployments(_) => ResourceKind::Deployment,
            SummaryCounts::Stacks(_) => ResourceKind::Stack,
            SummaryCounts::Repos(_) => ResourceKind::Repo,
            SummaryCounts::Builds(_) => ResourceKind::Build,
            SummaryCounts::Servers(_) => ResourceKind::Server,
            SummaryCounts::Syncs(_) => ResourceKind::ResourceSync,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            SummaryCounts::Deployments(s) => s.total(),
            SummaryCounts::Stacks(s) => s.total(),
            SummaryCounts::Repos(s) => s.total(),
            SummaryCounts::Builds(s) => s.total(),
            SummaryCounts::Servers(s) => s.total(),
            SummaryCounts::Syncs(s) => s.total(),
        }
    }

    /// Attribute one state to its bucket.
    ///
    /// Returns `false` (and counts nothing) if `state` belongs to another kind.
    pub fn record(&mut self, state: ResourceState) -> bool {
        match (self, state) {
            (SummaryCounts::Deployments(s), ResourceState::Deployment(st)) => s.record(st),
            (SummaryCounts::Stacks(s), ResourceState::Stack(st)) => s.record(st),
            (SummaryCounts::Repos(s), ResourceState::Repo(st)) => s.record(st),
            (SummaryCounts::Builds(s), ResourceState::Build(st)) => s.record(st),
            (SummaryCounts::Servers(s), ResourceState::Server(st)) => s.record(st),
            (SummaryCounts::Syncs(s), ResourceState::ResourceSync(st)) => s.record(st),
            _ => return false,
        }
        true
    }

    /// Counts a data source would report for `states`. States of other kinds
    /// are skipped.
    pub fn tally<I>(kind: ResourceKind, states: I) -> Self
    where
        I: IntoIterator<Item = ResourceState>,
    {
        let mut counts = Self::empty(kind);
        for state in states {
            counts.record(state);
        }
        counts
    }
}

/// Chart entries for a summary.
pub fn dashboard_entries(counts: &SummaryCounts) -> Vec<DashboardEntry> {
    match counts {
        SummaryCounts::Deployments(s) => s.entries(),
        SummaryCounts::Stacks(s) => s.entries(),
        SummaryCounts::Repos(s) => s.entries(),
        SummaryCounts::Builds(s) => s.entries(),
        SummaryCounts::Servers(s) => s.entries(),
        SummaryCounts::Syncs(s) => s.entries(),
    }
}

/// Bucket sum disagrees with the number of resources listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentCounts {
    pub kind: ResourceKind,
    pub bucket_total: u64,
    pub known_total: u64,
}

impl fmt::Display for InconsistentCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} summary buckets sum to {} but {} resources are listed",
            self.kind.name(),
            self.bucket_total,
            self.known_total
        )
    }
}

impl std::error::Error for InconsistentCounts {}

/// Compare bucket sum with the listed resource count.
///
/// Diagnostic only: the dashboard still renders the buckets as reported.
pub fn check_counts(counts: &SummaryCounts, known_total: u64) -> Result<(), InconsistentCounts> {
    let bucket_total = counts.total();
    if bucket_total == known_total {
        return Ok(());
    }
    INCONSISTENT_COUNTS_TOTAL.fetch_add(1, Ordering::Relaxed);
    let err = InconsistentCounts {
        kind: counts.kind(),
        bucket_total,
        known_total,
    };
    tracing::warn!("InconsistentCounts {err}");
    Err(err)
}

/// Total inconsistent summaries observed (`inconsistent_counts_total` counter).
pub fn inconsistent_counts_total() -> u64 {
    INCONSISTENT_COUNTS_TOTAL.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_rejects_foreign_kind() {
        let mut counts = SummaryCounts::empty(ResourceKind::Build);
        assert!(!counts.record(ResourceState::Repo(RepoState::Ok)));
        assert_eq!(counts.total(), 0);
    }
}
