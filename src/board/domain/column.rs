//! Board columns and the roles they play.

use super::{BoardDomainError, IssueState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a column plays when the board decides where issues go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnState {
    /// Column receiving new and reopened issues.
    Default,
    /// Column for work that has started.
    InProgress,
    /// Column for work awaiting review.
    NeedsReview,
    /// Column for finished work.
    Done,
    /// Column receiving contributions from outside the organisation.
    ExternalContribution,
}

impl ColumnState {
    /// All states in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::InProgress,
        Self::NeedsReview,
        Self::Done,
        Self::ExternalContribution,
    ];

    /// Returns the canonical configuration name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::InProgress => "IN_PROGRESS",
            Self::NeedsReview => "NEEDS_REVIEW",
            Self::Done => "DONE",
            Self::ExternalContribution => "EXTERNAL_CONTRIBUTION",
        }
    }
}

impl TryFrom<&str> for ColumnState {
    type Error = BoardDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == normalized)
            .ok_or_else(|| BoardDomainError::UnknownColumnState(value.to_owned()))
    }
}

impl fmt::Display for ColumnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A board lane.
///
/// `closed` decides the tracker state issues must have in the column and
/// `label`, when present, is the column's exclusive board-managed label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    label: Option<String>,
    closed: bool,
    states: Vec<ColumnState>,
}

impl Column {
    /// Creates an open column without a label.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnName`] if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyColumnName);
        }

        Ok(Self {
            name: trimmed.to_owned(),
            label: None,
            closed: false,
            states: Vec::new(),
        })
    }

    /// Sets the board-managed label. Blank labels clear it.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let value = label.into();
        let trimmed = value.trim();
        self.label = (!trimmed.is_empty()).then(|| trimmed.to_owned());
        self
    }

    /// Marks whether issues in this column are closed.
    #[must_use]
    pub const fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    /// Assigns board roles to the column.
    #[must_use]
    pub fn with_states(mut self, states: impl IntoIterator<Item = ColumnState>) -> Self {
        self.states = Vec::new();
        for state in states {
            if !self.states.contains(&state) {
                self.states.push(state);
            }
        }
        self
    }

    /// Returns the column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the board-managed label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns whether issues in this column are closed.
    #[must_use]
    pub const fn closed(&self) -> bool {
        self.closed
    }

    /// Returns the roles assigned to this column.
    #[must_use]
    pub fn states(&self) -> &[ColumnState] {
        &self.states
    }

    /// Returns whether the column plays the given role.
    #[must_use]
    pub fn has_state(&self, state: ColumnState) -> bool {
        self.states.contains(&state)
    }

    /// Returns the tracker state issues in this column must have.
    #[must_use]
    pub const fn issue_state(&self) -> IssueState {
        IssueState::for_column(self.closed)
    }
}
