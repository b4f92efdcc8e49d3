//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Positive issue number from an external tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(u64);

impl IssueNumber {
    /// Creates a validated issue number.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidIssueNumber`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidIssueNumber(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Repository coordinates on the tracker, split into owner and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    owner: String,
    repo: String,
}

impl RepositoryRef {
    /// Creates validated repository coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidRepository`] when either segment is
    /// empty or contains whitespace or a slash.
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, BoardDomainError> {
        let raw_owner = owner.into();
        let raw_repo = repo.into();
        let owner_segment = raw_owner.trim();
        let repo_segment = raw_repo.trim();

        if !is_valid_segment(owner_segment) || !is_valid_segment(repo_segment) {
            return Err(BoardDomainError::InvalidRepository(format!(
                "{raw_owner}/{raw_repo}"
            )));
        }

        Ok(Self {
            owner: owner_segment.to_owned(),
            repo: repo_segment.to_owned(),
        })
    }

    /// Parses `owner/repo` notation.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidRepository`] if the value does not
    /// contain exactly one slash-delimited owner and repository segment.
    pub fn parse(full_name: &str) -> Result<Self, BoardDomainError> {
        let (owner, repo) = full_name
            .trim()
            .split_once('/')
            .ok_or_else(|| BoardDomainError::InvalidRepository(full_name.to_owned()))?;
        Self::new(owner, repo)
            .map_err(|_| BoardDomainError::InvalidRepository(full_name.to_owned()))
    }

    /// Returns the owning user or organisation.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the repository name.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().any(|c| c.is_whitespace() || c == '/')
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
