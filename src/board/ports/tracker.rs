//! Issue tracker port.

use crate::board::domain::{Issue, IssueFieldUpdate, IssueNumber, RepositoryRef};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Remote issue tracker contract.
///
/// Every method is a single round trip. Timeouts, retries and cancellation
/// belong to the implementation.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches an issue by number.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the issue does not exist.
    async fn fetch_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
    ) -> TrackerResult<Issue>;

    /// Adds labels to an issue in one call.
    async fn add_labels(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        labels: &[String],
    ) -> TrackerResult<()>;

    /// Removes a single label from an issue.
    ///
    /// The tracker offers no batch removal, so callers issue one call per
    /// label.
    async fn remove_label(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        label: &str,
    ) -> TrackerResult<()>;

    /// Updates state and/or assignees in one call.
    async fn update_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        fields: &IssueFieldUpdate,
    ) -> TrackerResult<()>;
}

/// Errors returned by issue tracker implementations.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The issue does not exist or is not visible.
    #[error("issue {repository}#{number} not found")]
    NotFound {
        /// Repository that was queried.
        repository: RepositoryRef,
        /// Issue number that was queried.
        number: IssueNumber,
    },

    /// The tracker refused the request.
    #[error("tracker rejected request: {0}")]
    Rejected(String),

    /// Transport-level failure.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns whether the error reports a missing issue.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
