//! Tracker issue snapshot as seen by the board.

use super::{BoardDomainError, IssueNumber, RepositoryRef};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Open/closed state of a tracker issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue is closed.
    Closed,
}

impl IssueState {
    /// Returns the state in tracker wire format.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns the state an issue must have to sit in a column.
    #[must_use]
    pub const fn for_column(closed: bool) -> Self {
        if closed { Self::Closed } else { Self::Open }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a tracker issue.
///
/// The tracker owns issue records; the board only reads snapshots and
/// proposes diffs against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    repository: RepositoryRef,
    number: IssueNumber,
    state: IssueState,
    labels: Vec<String>,
    assignees: Vec<String>,
    body: String,
}

impl Issue {
    /// Creates an issue snapshot with no labels, assignees, or body.
    #[must_use]
    pub const fn new(repository: RepositoryRef, number: IssueNumber, state: IssueState) -> Self {
        Self {
            repository,
            number,
            state,
            labels: Vec::new(),
            assignees: Vec::new(),
            body: String::new(),
        }
    }

    /// Creates an issue snapshot from raw tracker values.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the repository or number is invalid.
    pub fn from_parts(
        owner: &str,
        repo: &str,
        number: u64,
        state: IssueState,
    ) -> Result<Self, BoardDomainError> {
        Ok(Self::new(
            RepositoryRef::new(owner, repo)?,
            IssueNumber::new(number)?,
            state,
        ))
    }

    /// Sets issue labels, dropping blanks and repeated names.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.clear();
        for label in labels {
            let name: String = label.into();
            let trimmed = name.trim();
            if !trimmed.is_empty() && !self.has_label(trimmed) {
                self.labels.push(trimmed.to_owned());
            }
        }
        self
    }

    /// Sets issue assignees in tracker order.
    #[must_use]
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees
            .into_iter()
            .map(Into::into)
            .filter(|login: &String| !login.trim().is_empty())
            .collect();
        self
    }

    /// Sets the open/closed state.
    #[must_use]
    pub const fn with_state(mut self, state: IssueState) -> Self {
        self.state = state;
        self
    }

    /// Sets the issue body text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the repository the issue lives in.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryRef {
        &self.repository
    }

    /// Returns the issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Returns the open/closed state.
    #[must_use]
    pub const fn state(&self) -> IssueState {
        self.state
    }

    /// Returns label names in tracker order.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns assignee logins in tracker order.
    #[must_use]
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Returns the issue body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns whether the issue carries the given label.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    /// Returns whether the login is among the assignees.
    #[must_use]
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignees.iter().any(|existing| existing == login)
    }
}
