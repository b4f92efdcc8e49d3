//! Port contracts for board synchronization.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod columns;
pub mod links;
pub mod tracker;

pub use columns::ColumnRegistry;
pub use links::LinkExtractor;
pub use tracker::{IssueTracker, TrackerError, TrackerResult};
