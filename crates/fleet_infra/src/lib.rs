#![forbid(unsafe_code)]

pub mod api;
pub mod board;
pub mod config;

pub use board::{BoardError, BoardRow, BoardSnapshot, ResourcePage, resource_page};
pub use config::{ResolvedConfig, UnmappedPolicy, load_config};
