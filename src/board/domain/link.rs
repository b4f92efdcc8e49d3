//! Typed cross-references found in issue text.

use super::{IssueNumber, RepositoryRef};
use serde::{Deserialize, Serialize};

/// Kind of relationship a textual reference expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// Resolving the referencing item resolves the target (`closes #12`).
    Closes,
    /// The referencing item depends on the target (`depends on #12`).
    DependsOn,
    /// Loose relation (`related to #12`).
    RelatesTo,
}

/// A cross-reference extracted from free text.
///
/// `owner` and `repo` are only set when the reference names them explicitly;
/// unqualified references such as `#12` point at the current repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    link_type: LinkType,
    owner: Option<String>,
    repo: Option<String>,
    number: IssueNumber,
}

impl Link {
    /// Creates a reference to an issue in the current repository.
    #[must_use]
    pub const fn local(link_type: LinkType, number: IssueNumber) -> Self {
        Self {
            link_type,
            owner: None,
            repo: None,
            number,
        }
    }

    /// Creates a reference qualified with owner and repository.
    #[must_use]
    pub fn qualified(
        link_type: LinkType,
        owner: impl Into<String>,
        repo: impl Into<String>,
        number: IssueNumber,
    ) -> Self {
        Self {
            link_type,
            owner: Some(owner.into()),
            repo: Some(repo.into()),
            number,
        }
    }

    /// Returns the relationship kind.
    #[must_use]
    pub const fn link_type(&self) -> LinkType {
        self.link_type
    }

    /// Returns the explicit owner, if the reference named one.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the explicit repository, if the reference named one.
    #[must_use]
    pub fn repo(&self) -> Option<&str> {
        self.repo.as_deref()
    }

    /// Returns the referenced issue number.
    #[must_use]
    pub const fn number(&self) -> IssueNumber {
        self.number
    }

    /// Returns whether the reference resolves inside `repository`.
    ///
    /// Unspecified owner or repo default to the given repository.
    #[must_use]
    pub fn targets(&self, repository: &RepositoryRef) -> bool {
        self.owner.as_deref().is_none_or(|owner| owner == repository.owner())
            && self.repo.as_deref().is_none_or(|repo| repo == repository.repo())
    }
}
