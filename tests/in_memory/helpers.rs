//! Shared test helpers for in-memory board synchronization tests.

use std::sync::Arc;

use boardsync::board::{
    adapters::{
        PatternLinkExtractor,
        memory::{InMemoryColumnRegistry, InMemoryIssueTracker},
    },
    domain::{Column, ColumnState, Issue, IssueNumber, IssueState, RepositoryRef},
    ports::ColumnRegistry,
    services::BoardSyncService,
};
use rstest::fixture;

/// Service type used by the in-memory tests.
pub type TestService =
    BoardSyncService<InMemoryIssueTracker, InMemoryColumnRegistry, PatternLinkExtractor>;

/// Tracker and service sharing the same in-memory state.
pub struct Board {
    pub tracker: InMemoryIssueTracker,
    pub service: TestService,
}

impl Board {
    /// Returns the column playing `state` on the standard board.
    pub fn column(&self, state: ColumnState) -> Column {
        self.service
            .columns()
            .get_by_state(state)
            .cloned()
            .expect("standard board resolves the state")
    }

    /// Stores an issue in the tracker and returns it.
    pub fn seed(&self, issue: Issue) -> Issue {
        self.tracker.insert(issue.clone()).expect("issue stored");
        issue
    }

    /// Returns the current tracker copy of an issue.
    pub fn current(&self, repository: &RepositoryRef, number: u64) -> Issue {
        self.tracker
            .get(repository, issue_number(number))
            .expect("tracker readable")
            .expect("issue stored")
    }
}

/// Provides a standard board over an empty tracker.
#[fixture]
pub fn board() -> Board {
    let tracker = InMemoryIssueTracker::new();
    let service = BoardSyncService::new(
        Arc::new(tracker.clone()),
        Arc::new(InMemoryColumnRegistry::standard().expect("standard board is valid")),
        Arc::new(PatternLinkExtractor::new()),
    );
    Board { tracker, service }
}

/// Repository used by most tests.
pub fn repository() -> RepositoryRef {
    RepositoryRef::new("acme", "app").expect("valid repository")
}

/// Builds a validated issue number.
pub fn issue_number(value: u64) -> IssueNumber {
    IssueNumber::new(value).expect("valid issue number")
}

/// Builds an issue in [`repository`].
pub fn issue(number: u64, state: IssueState, labels: &[&str]) -> Issue {
    Issue::new(repository(), issue_number(number), state).with_labels(labels.iter().copied())
}
