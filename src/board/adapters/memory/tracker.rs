//! In-memory issue tracker for board synchronization tests.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    domain::{Issue, IssueFieldUpdate, IssueNumber, RepositoryRef},
    ports::{IssueTracker, TrackerError, TrackerResult},
};

/// A call received by [`InMemoryIssueTracker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerCall {
    /// `fetch_issue` call.
    FetchIssue {
        /// Target repository.
        repository: RepositoryRef,
        /// Target issue.
        number: IssueNumber,
    },
    /// `add_labels` call.
    AddLabels {
        /// Target repository.
        repository: RepositoryRef,
        /// Target issue.
        number: IssueNumber,
        /// Labels sent.
        labels: Vec<String>,
    },
    /// `remove_label` call.
    RemoveLabel {
        /// Target repository.
        repository: RepositoryRef,
        /// Target issue.
        number: IssueNumber,
        /// Label sent.
        label: String,
    },
    /// `update_issue` call.
    UpdateIssue {
        /// Target repository.
        repository: RepositoryRef,
        /// Target issue.
        number: IssueNumber,
        /// Fields sent.
        fields: IssueFieldUpdate,
    },
}

impl TrackerCall {
    /// Returns the issue number the call targeted.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        match self {
            Self::FetchIssue { number, .. }
            | Self::AddLabels { number, .. }
            | Self::RemoveLabel { number, .. }
            | Self::UpdateIssue { number, .. } => *number,
        }
    }

    /// Returns whether the call changes tracker state.
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::FetchIssue { .. })
    }
}

/// Thread-safe in-memory issue tracker.
///
/// Mutating calls are applied to the stored issues so that a subsequent
/// fetch reflects them. Every call is recorded, including rejected ones.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIssueTracker {
    state: Arc<RwLock<InMemoryTrackerState>>,
}

#[derive(Debug, Default)]
struct InMemoryTrackerState {
    issues: HashMap<(RepositoryRef, IssueNumber), Issue>,
    calls: Vec<TrackerCall>,
    rejected_issues: HashMap<IssueNumber, String>,
    rejected_label_removals: HashSet<String>,
}

impl InMemoryIssueTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TrackerResult<RwLockReadGuard<'_, InMemoryTrackerState>> {
        self.state
            .read()
            .map_err(|err| TrackerError::transport(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TrackerResult<RwLockWriteGuard<'_, InMemoryTrackerState>> {
        self.state
            .write()
            .map_err(|err| TrackerError::transport(std::io::Error::other(err.to_string())))
    }

    /// Stores or replaces an issue.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn insert(&self, issue: Issue) -> TrackerResult<()> {
        let mut state = self.write()?;
        let key = (issue.repository().clone(), issue.number());
        state.issues.insert(key, issue);
        Ok(())
    }

    /// Returns the stored issue without recording a call.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn get(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
    ) -> TrackerResult<Option<Issue>> {
        let state = self.read()?;
        Ok(state.issues.get(&(repository.clone(), number)).cloned())
    }

    /// Makes every mutating call against the issue fail with
    /// [`TrackerError::Rejected`].
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn reject_issue(&self, number: IssueNumber, message: impl Into<String>) -> TrackerResult<()> {
        let mut state = self.write()?;
        state.rejected_issues.insert(number, message.into());
        Ok(())
    }

    /// Makes removal of the given label fail on every issue.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn reject_label_removal(&self, label: impl Into<String>) -> TrackerResult<()> {
        let mut state = self.write()?;
        state.rejected_label_removals.insert(label.into());
        Ok(())
    }

    /// Returns every call received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn calls(&self) -> TrackerResult<Vec<TrackerCall>> {
        Ok(self.read()?.calls.clone())
    }

    /// Returns the mutating calls received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn mutations(&self) -> TrackerResult<Vec<TrackerCall>> {
        Ok(self
            .read()?
            .calls
            .iter()
            .filter(|call| call.is_mutation())
            .cloned()
            .collect())
    }
}

impl InMemoryTrackerState {
    fn check_rejected(&self, number: IssueNumber) -> TrackerResult<()> {
        match self.rejected_issues.get(&number) {
            Some(message) => Err(TrackerError::Rejected(message.clone())),
            None => Ok(()),
        }
    }

    fn issue_mut(
        &mut self,
        repository: &RepositoryRef,
        number: IssueNumber,
    ) -> TrackerResult<&mut Issue> {
        self.issues
            .get_mut(&(repository.clone(), number))
            .ok_or_else(|| TrackerError::NotFound {
                repository: repository.clone(),
                number,
            })
    }
}

#[async_trait]
impl IssueTracker for InMemoryIssueTracker {
    async fn fetch_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
    ) -> TrackerResult<Issue> {
        let mut state = self.write()?;
        state.calls.push(TrackerCall::FetchIssue {
            repository: repository.clone(),
            number,
        });
        state
            .issues
            .get(&(repository.clone(), number))
            .cloned()
            .ok_or_else(|| TrackerError::NotFound {
                repository: repository.clone(),
                number,
            })
    }

    async fn add_labels(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        labels: &[String],
    ) -> TrackerResult<()> {
        let mut state = self.write()?;
        state.calls.push(TrackerCall::AddLabels {
            repository: repository.clone(),
            number,
            labels: labels.to_vec(),
        });
        state.check_rejected(number)?;

        let issue = state.issue_mut(repository, number)?;
        let merged: Vec<String> = issue.labels().iter().chain(labels).cloned().collect();
        *issue = issue.clone().with_labels(merged);
        Ok(())
    }

    async fn remove_label(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        label: &str,
    ) -> TrackerResult<()> {
        let mut state = self.write()?;
        state.calls.push(TrackerCall::RemoveLabel {
            repository: repository.clone(),
            number,
            label: label.to_owned(),
        });
        state.check_rejected(number)?;
        if state.rejected_label_removals.contains(label) {
            return Err(TrackerError::Rejected(format!(
                "label '{label}' cannot be removed"
            )));
        }

        let issue = state.issue_mut(repository, number)?;
        let remaining: Vec<String> = issue
            .labels()
            .iter()
            .filter(|existing| existing.as_str() != label)
            .cloned()
            .collect();
        *issue = issue.clone().with_labels(remaining);
        Ok(())
    }

    async fn update_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        fields: &IssueFieldUpdate,
    ) -> TrackerResult<()> {
        let mut state = self.write()?;
        state.calls.push(TrackerCall::UpdateIssue {
            repository: repository.clone(),
            number,
            fields: fields.clone(),
        });
        state.check_rejected(number)?;

        let issue = state.issue_mut(repository, number)?;
        let mut updated = issue.clone();
        if let Some(issue_state) = fields.state {
            updated = updated.with_state(issue_state);
        }
        if let Some(assignees) = &fields.assignees {
            updated = updated.with_assignees(assignees.iter().cloned());
        }
        *issue = updated;
        Ok(())
    }
}
