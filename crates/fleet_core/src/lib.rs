#![forbid(unsafe_code)]

pub mod badge;
pub mod classify;
pub mod dashboard;
pub mod docker;
pub mod gating;
pub mod resource;
pub mod severity;

pub use classify::{Reading, UnmappedState, classify, classify_raw, parse_state, read_state};
pub use resource::{LifecycleState, ResourceKind, ResourceState};
pub use severity::Severity;
