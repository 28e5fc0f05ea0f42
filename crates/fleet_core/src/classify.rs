//! State classification: `(kind, raw state) -> Severity`.
//!
//! Classification itself is total over the closed state enums. The only
//! failure is a raw value outside the closed set of its kind
//! (`UnmappedState`), which is a data contract violation by the backend:
//! - `classify_raw` fails fast with the error.
//! - `read_state` is the render boundary: it never fails, renders unmapped
//!   values with `Severity::Unknown`, and counts them.
//!
//! An absent value (`Reading::NoData`) is neither unmapped nor unknown; it
//! means the data has not loaded yet.

use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use xxhash_rust::xxh64::xxh64;

use crate::resource::{ResourceKind, ResourceState};
use crate::severity::Severity;

static UNMAPPED_STATE_TOTAL: AtomicU64 = AtomicU64::new(0);

/// Default cap on distinct unmapped values reported by one `UnmappedStateLog`.
pub const DEFAULT_MAX_REPORTED_UNMAPPED: usize = 256;

/// Raw state value not present in the closed set of its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnmappedState {
    pub kind: ResourceKind,
    pub raw: String,
}

impl fmt::Display for UnmappedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unmapped {} state '{}': not in the closed state set",
            self.kind.name(),
            self.raw
        )
    }
}

impl std::error::Error for UnmappedState {}

/// Severity of a known state.
pub fn classify(state: ResourceState) -> Severity {
    state.severity()
}

/// Parse `raw` within the closed state set of `kind`.
pub fn parse_state(kind: ResourceKind, raw: &str) -> Result<ResourceState, UnmappedState> {
    ResourceState::from_wire(kind, raw).ok_or_else(|| UnmappedState {
        kind,
        raw: raw.to_string(),
    })
}

/// Classify a raw backend value, failing fast on values outside the closed set.
pub fn classify_raw(kind: ResourceKind, raw: &str) -> Result<Severity, UnmappedState> {
    parse_state(kind, raw).map(classify)
}

/// What the renderer knows about one resource's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reading {
    /// No state value yet. Render a loading indicator.
    NoData,
    /// A state inside the closed set.
    Known(ResourceState),
    /// A value outside the closed set.
    Unmapped(UnmappedState),
}

impl Reading {
    /// `None` while data is loading; `Unknown` for unmapped values.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Reading::NoData => None,
            Reading::Known(state) => Some(classify(*state)),
            Reading::Unmapped(_) => Some(Severity::Unknown),
        }
    }

    /// Raw spelling as reported, if any.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Reading::NoData => None,
            Reading::Known(state) => Some(state.as_wire()),
            Reading::Unmapped(err) => Some(err.raw.as_str()),
        }
    }

    pub fn known(&self) -> Option<ResourceState> {
        match self {
            Reading::Known(state) => Some(*state),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Reading::NoData)
    }
}

/// Render-boundary read of an optional raw state. Never fails.
///
/// An empty string is treated as absent.
pub fn read_state(kind: ResourceKind, raw: Option<&str>) -> Reading {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Reading::NoData;
    };
    match parse_state(kind, raw) {
        Ok(state) => Reading::Known(state),
        Err(err) => {
            UNMAPPED_STATE_TOTAL.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("UnmappedState kind={} raw={:?}", kind.name(), err.raw);
            Reading::Unmapped(err)
        }
    }
}

/// Total unmapped reads since process start (`unmapped_state_total` counter).
pub fn unmapped_state_total() -> u64 {
    UNMAPPED_STATE_TOTAL.load(Ordering::Relaxed)
}

/// Deduplicating reporter for unmapped states.
///
/// The same bad value arrives on every poll tick; it is warned about once per
/// `(kind, raw)` pair. After `max_reported` distinct pairs further values are
/// only counted.
#[derive(Debug)]
pub struct UnmappedStateLog {
    seen: HashSet<u64>,
    max_reported: usize,
    reported_total: u64,
    suppressed_total: u64,
}

impl Default for UnmappedStateLog {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REPORTED_UNMAPPED)
    }
}

impl UnmappedStateLog {
    pub fn new(max_reported: usize) -> Self {
        Self {
            seen: HashSet::new(),
            max_reported,
            reported_total: 0,
            suppressed_total: 0,
        }
    }

    /// Report an unmapped state. Returns `true` if a warning was emitted.
    pub fn report(&mut self, err: &UnmappedState) -> bool {
        let fingerprint = unmapped_fingerprint(err);
        if self.seen.contains(&fingerprint) {
            self.suppressed_total += 1;
            return false;
        }
        if self.seen.len() >= self.max_reported {
            self.suppressed_total += 1;
            return false;
        }
        self.seen.insert(fingerprint);
        self.reported_total += 1;
        tracing::warn!(
            kind = err.kind.name(),
            raw = %err.raw,
            "state outside closed set; rendering as unknown"
        );
        true
    }

    /// Distinct values warned about.
    pub fn reported_total(&self) -> u64 {
        self.reported_total
    }

    /// Reports swallowed as duplicates or over the cap.
    pub fn suppressed_total(&self) -> u64 {
        self.suppressed_total
    }
}

fn unmapped_fingerprint(err: &UnmappedState) -> u64 {
    let mut buf = Vec::with_capacity(32 + err.raw.len());
    buf.extend_from_slice(err.kind.name().as_bytes());
    // 0xFF never appears in UTF-8, so field boundaries stay unambiguous.
    buf.push(0xFF);
    buf.extend_from_slice(err.raw.as_bytes());
    xxh64(&buf, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_separates_kind_from_raw() {
        let a = UnmappedState {
            kind: ResourceKind::Repo,
            raw: "Archived".to_string(),
        };
        let b = UnmappedState {
            kind: ResourceKind::Build,
            raw: "Archived".to_string(),
        };
        assert_ne!(unmapped_fingerprint(&a), unmapped_fingerprint(&b));
        assert_eq!(unmapped_fingerprint(&a), unmapped_fingerprint(&a.clone()));
    }

    #[test]
    fn cap_limits_distinct_reports() {
        let mut log = UnmappedStateLog::new(1);
        let first = UnmappedState {
            kind: ResourceKind::Stack,
            raw: "migrating".to_string(),
        };
        let second = UnmappedState {
            kind: ResourceKind::Stack,
            raw: "draining".to_string(),
        };
        assert!(log.report(&first));
        assert!(!log.report(&second));
        assert_eq!(log.reported_total(), 1);
        assert_eq!(log.suppressed_total(), 1);
    }
}
