//! `Get*Summary` response bodies.
//!
//! Missing buckets decode as zero; unknown bucket names are ignored so an
//! older dashboard keeps working against a newer backend.

use serde::Deserialize;

use fleet_core::ResourceKind;
use fleet_core::dashboard::{
    BuildsSummary, DeploymentsSummary, ReposSummary, ServersSummary, StacksSummary,
    SummaryCounts, SyncsSummary,
};

use super::WireError;

#[derive(Debug, Deserialize)]
struct DeploymentsSummaryWire {
    #[serde(default)]
    running: u64,
    #[serde(default)]
    stopped: u64,
    #[serde(default)]
    unhealthy: u64,
    #[serde(default)]
    unknown: u64,
    #[serde(default)]
    not_deployed: u64,
}

#[derive(Debug, Deserialize)]
struct StacksSummaryWire {
    #[serde(default)]
    running: u64,
    #[serde(default)]
    stopped: u64,
    #[serde(default)]
    unhealthy: u64,
    #[serde(default)]
    unknown: u64,
    #[serde(default)]
    down: u64,
}

#[derive(Debug, Deserialize)]
struct ReposSummaryWire {
    #[serde(default)]
    ok: u64,
    #[serde(default)]
    cloning: u64,
    #[serde(default)]
    pulling: u64,
    #[serde(default)]
    building: u64,
    #[serde(default)]
    failed: u64,
    #[serde(default)]
    unknown: u64,
}

#[derive(Debug, Deserialize)]
struct BuildsSummaryWire {
    #[serde(default)]
    ok: u64,
    #[serde(default)]
    building: u64,
    #[serde(default)]
    failed: u64,
    #[serde(default)]
    unknown: u64,
}

#[derive(Debug, Deserialize)]
struct ServersSummaryWire {
    #[serde(default)]
    healthy: u64,
    #[serde(default)]
    unhealthy: u64,
    #[serde(default)]
    disabled: u64,
    #[serde(default)]
    unknown: u64,
}

#[derive(Debug, Deserialize)]
struct SyncsSummaryWire {
    #[serde(default)]
    ok: u64,
    #[serde(default)]
    pending: u64,
    #[serde(default)]
    syncing: u64,
    #[serde(default)]
    failed: u64,
    #[serde(default)]
    unknown: u64,
}

fn decode<'a, T: Deserialize<'a>>(kind: ResourceKind, json: &'a str) -> Result<T, WireError> {
    serde_json::from_str(json).map_err(|e| WireError {
        request: kind.summary_request(),
        message: e.to_string(),
    })
}

/// Decode the summary response of `kind`.
pub fn parse_summary(kind: ResourceKind, json: &str) -> Result<SummaryCounts, WireError> {
    let counts = match kind {
        ResourceKind::Deployment => {
            let w: DeploymentsSummaryWire = decode(kind, json)?;
            SummaryCounts::Deployments(DeploymentsSummary {
                running: w.running,
                stopped: w.stopped,
                unhealthy: w.unhealthy,
                unknown: w.unknown,
                not_deployed: w.not_deployed,
            })
        }
        ResourceKind::Stack => {
            let w: StacksSummaryWire = decode(kind, json)?;
            SummaryCounts::Stacks(StacksSummary {
                running: w.running,
                stopped: w.stopped,
                unhealthy: w.unhealthy,
                unknown: w.unknown,
                down: w.down,
            })
        }
        ResourceKind::Repo => {
            let w: ReposSummaryWire = decode(kind, json)?;
            SummaryCounts::Repos(ReposSummary {
                ok: w.ok,
                cloning: w.cloning,
                pulling: w.pulling,
                building: w.building,
                failed: w.failed,
                unknown: w.unknown,
            })
        }
        ResourceKind::Build => {
            let w: BuildsSummaryWire = decode(kind, json)?;
            SummaryCounts::Builds(BuildsSummary {
                ok: w.ok,
                building: w.building,
                failed: w.failed,
                unknown: w.unknown,
            })
        }
        ResourceKind::Server => {
            let w: ServersSummaryWire = decode(kind, json)?;
            SummaryCounts::Servers(ServersSummary {
                healthy: w.healthy,
                unhealthy: w.unhealthy,
                disabled: w.disabled,
                unknown: w.unknown,
            })
        }
        ResourceKind::ResourceSync => {
            let w: SyncsSummaryWire = decode(kind, json)?;
            SummaryCounts::Syncs(SyncsSummary {
                ok: w.ok,
                pending: w.pending,
                syncing: w.syncing,
                failed: w.failed,
                unknown: w.unknown,
            })
        }
    };
    Ok(counts)
}
