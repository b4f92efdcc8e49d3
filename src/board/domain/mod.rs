//! Domain model for board synchronization.
//!
//! Issues, columns, links and update descriptors are plain values; tracker
//! access and column lookup stay behind the ports.

mod column;
mod error;
mod ids;
mod issue;
mod link;
mod update;

pub use column::{Column, ColumnState};
pub use error::BoardDomainError;
pub use ids::{IssueNumber, RepositoryRef};
pub use issue::{Issue, IssueState};
pub use link::{Link, LinkType};
pub use update::{IssueFieldUpdate, StateUpdate};
