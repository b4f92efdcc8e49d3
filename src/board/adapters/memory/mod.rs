//! In-memory adapters for deterministic board synchronization.

mod columns;
mod tracker;

pub use columns::InMemoryColumnRegistry;
pub use tracker::{InMemoryIssueTracker, TrackerCall};
