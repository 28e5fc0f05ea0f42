//! Per-poll board snapshot: list items + summary -> rendered rows and chart.
//!
//! Built from scratch on every poll tick; the only state carried between
//! ticks is the caller's `UnmappedStateLog`.

use std::fmt;

use fleet_core::badge::{Badge, PageHeader, icon_stroke, page_header, status_badge};
use fleet_core::classify::UnmappedStateLog;
use fleet_core::dashboard::{
    DashboardEntry, InconsistentCounts, SummaryCounts, check_counts, dashboard_entries,
};
use fleet_core::gating::{
    GateContext, SpecificPermission, TabGates, container_link_visible, tab_gates,
    update_available_visible,
};
use fleet_core::{Reading, ResourceKind, UnmappedState};

use crate::api::{ResourceListItem, WireError, parse_list, parse_summary};
use crate::config::{ResolvedConfig, UnmappedPolicy};

#[derive(Debug, Clone, PartialEq)]
pub enum BoardError {
    Wire(WireError),
    /// Raised only under `UnmappedPolicy::Reject`.
    Unmapped(UnmappedState),
    KindMismatch {
        expected: ResourceKind,
        found: ResourceKind,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Wire(err) => err.fmt(f),
            BoardError::Unmapped(err) => err.fmt(f),
            BoardError::KindMismatch { expected, found } => write!(
                f,
                "summary is for {} but board is for {}",
                found.name(),
                expected.name()
            ),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<WireError> for BoardError {
    fn from(err: WireError) -> Self {
        BoardError::Wire(err)
    }
}

/// Apply the unmapped policy to a reading: reject it, or report it and keep
/// rendering it as Unknown.
fn admit_reading(
    reading: Reading,
    config: &ResolvedConfig,
    unmapped: &mut UnmappedStateLog,
) -> Result<Reading, BoardError> {
    if let Reading::Unmapped(err) = &reading {
        if config.unmapped_policy == UnmappedPolicy::Reject {
            return Err(BoardError::Unmapped(err.clone()));
        }
        unmapped.report(err);
    }
    Ok(reading)
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardRow {
    pub id: String,
    pub name: String,
    pub reading: Reading,
    /// `None` while the state has not loaded.
    pub badge: Option<Badge>,
    pub icon: &'static str,
    pub icon_stroke: Option<&'static str>,
    pub update_available: bool,
}

/// Everything the list page of one kind renders for a poll tick.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub kind: ResourceKind,
    pub rows: Vec<BoardRow>,
    pub entries: Vec<DashboardEntry>,
    /// Set when the summary disagrees with the listed rows.
    pub inconsistent: Option<InconsistentCounts>,
}

impl BoardSnapshot {
    pub fn build(
        kind: ResourceKind,
        items: &[ResourceListItem],
        summary: &SummaryCounts,
        config: &ResolvedConfig,
        unmapped: &mut UnmappedStateLog,
    ) -> Result<Self, BoardError> {
        if summary.kind() != kind {
            return Err(BoardError::KindMismatch {
                expected: kind,
                found: summary.kind(),
            });
        }

        let mut rows = Vec::with_capacity(items.len());
        for item in items {
            let reading = admit_reading(item.reading(kind), config, unmapped)?;
            rows.push(BoardRow {
                id: item.id.clone(),
                name: item.name.clone(),
                badge: status_badge(&reading, config.badge_alpha),
                icon: kind.icon_name(),
                icon_stroke: icon_stroke(&reading),
                update_available: update_available_visible(&reading, item.info.update_available),
                reading,
            });
        }

        let inconsistent = check_counts(summary, items.len() as u64).err();

        Ok(Self {
            kind,
            rows,
            entries: dashboard_entries(summary),
            inconsistent,
        })
    }

    /// Decode the `List*` and `Get*Summary` bodies of `kind` and build.
    pub fn from_json(
        kind: ResourceKind,
        list_json: &str,
        summary_json: &str,
        config: &ResolvedConfig,
        unmapped: &mut UnmappedStateLog,
    ) -> Result<Self, BoardError> {
        let items = parse_list(kind, list_json)?;
        let summary = parse_summary(kind, summary_json)?;
        Self::build(kind, &items, &summary, config, unmapped)
    }

    /// Rows whose state has not loaded yet.
    pub fn loading_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.reading.is_no_data()).count()
    }
}

/// Header and tab gating of a single resource page.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePage {
    pub header: PageHeader,
    pub status: Option<String>,
    pub gates: TabGates,
    pub container_link: bool,
}

/// Build the page view of `item`.
///
/// `host` is the list item of the server the resource runs on; its
/// `container_exec_disabled` gates the terminal. An unknown host disables it.
/// Unmapped states follow `config.unmapped_policy` as on the board.
pub fn resource_page(
    kind: ResourceKind,
    item: &ResourceListItem,
    host: Option<&ResourceListItem>,
    permissions: &[SpecificPermission],
    config: &ResolvedConfig,
    unmapped: &mut UnmappedStateLog,
) -> Result<ResourcePage, BoardError> {
    let reading = admit_reading(item.reading(kind), config, unmapped)?;
    let ctx = GateContext {
        permissions,
        container_exec_disabled: host.and_then(|s| s.info.container_exec_disabled),
    };
    Ok(ResourcePage {
        header: page_header(kind, &reading, config.header_alpha),
        status: item.info.status.clone(),
        gates: tab_gates(&reading, &ctx),
        container_link: container_link_visible(&reading),
    })
}
