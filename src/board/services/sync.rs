//! Service layer applying column moves to the issue tracker.

use crate::board::{
    domain::{
        Column, ColumnState, Issue, IssueFieldUpdate, IssueNumber, IssueState, LinkType,
        RepositoryRef, StateUpdate,
    },
    ports::{ColumnRegistry, IssueTracker, LinkExtractor, TrackerError, TrackerResult},
    services::reconcile::{get_assignee_update, get_state_update},
};
use futures::future::{join_all, try_join_all};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for board synchronization.
#[derive(Debug, Error)]
pub enum BoardSyncError {
    /// A tracker call failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    /// No column plays the requested role.
    #[error("no column configured for state {0}")]
    UnknownColumnState(ColumnState),
}

/// Result type for board synchronization operations.
pub type BoardSyncResult<T> = Result<T, BoardSyncError>;

/// Outcome of looking an issue up by number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueLookup {
    /// The tracker returned the issue.
    Found(Issue),
    /// The tracker reported the issue missing.
    NotFound,
}

/// A single mutating tracker call planned for a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerOperation {
    /// Add labels in one call.
    AddLabels(Vec<String>),
    /// Remove one label.
    RemoveLabel(String),
    /// Update state and/or assignees.
    UpdateIssue(IssueFieldUpdate),
}

/// Result of one dispatched tracker call.
#[derive(Debug, Clone)]
pub struct CallOutcome {
    /// The call that was dispatched.
    pub operation: TrackerOperation,
    /// What the tracker answered.
    pub result: TrackerResult<()>,
}

/// Per-call results of a move dispatched without fail-fast aggregation.
#[derive(Debug, Clone, Default)]
pub struct MoveReport {
    outcomes: Vec<CallOutcome>,
}

impl MoveReport {
    /// Returns every call outcome in dispatch order.
    #[must_use]
    pub fn outcomes(&self) -> &[CallOutcome] {
        &self.outcomes
    }

    /// Returns whether every call succeeded. An empty report succeeds.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Returns the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CallOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.result.is_err())
    }

    /// Converts the report into the fail-fast result shape, surfacing the
    /// first failure in dispatch order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Tracker`] when any call failed.
    pub fn into_result(self) -> BoardSyncResult<()> {
        self.outcomes
            .into_iter()
            .try_for_each(|outcome| outcome.result)
            .map_err(BoardSyncError::from)
    }
}

/// Board synchronization service.
///
/// Moves issues between columns by dispatching the minimal set of tracker
/// calls, and cascades moves along closing references.
#[derive(Clone)]
pub struct BoardSyncService<T, C, L>
where
    T: IssueTracker,
    C: ColumnRegistry,
    L: LinkExtractor,
{
    tracker: Arc<T>,
    columns: Arc<C>,
    links: Arc<L>,
}

impl<T, C, L> BoardSyncService<T, C, L>
where
    T: IssueTracker,
    C: ColumnRegistry,
    L: LinkExtractor,
{
    /// Creates a new board synchronization service.
    #[must_use]
    pub const fn new(tracker: Arc<T>, columns: Arc<C>, links: Arc<L>) -> Self {
        Self {
            tracker,
            columns,
            links,
        }
    }

    /// Returns the column registry the service reconciles against.
    #[must_use]
    pub fn columns(&self) -> &C {
        &self.columns
    }

    /// Computes the state and label diff for moving `issue` into `column`.
    #[must_use]
    pub fn get_state_update(&self, issue: &Issue, column: &Column) -> StateUpdate {
        get_state_update(issue, column, &*self.columns)
    }

    /// Plans the tracker calls needed to move `issue` into `column`.
    ///
    /// Label additions come first, then one removal per stale label, then
    /// the combined state and assignee update. An issue already in place
    /// yields no calls.
    #[must_use]
    pub fn plan_move(
        &self,
        issue: &Issue,
        column: &Column,
        new_assignee: Option<&str>,
    ) -> Vec<TrackerOperation> {
        let state_update = self.get_state_update(issue, column);

        let mut operations = Vec::with_capacity(state_update.labels_to_remove.len() + 2);
        if !state_update.labels_to_add.is_empty() {
            operations.push(TrackerOperation::AddLabels(state_update.labels_to_add));
        }
        operations.extend(
            state_update
                .labels_to_remove
                .into_iter()
                .map(TrackerOperation::RemoveLabel),
        );

        let update = get_assignee_update(issue, new_assignee).merge(state_update.update);
        if !update.is_empty() {
            operations.push(TrackerOperation::UpdateIssue(update));
        }
        operations
    }

    /// Moves `issue` into `column`, optionally adding an assignee.
    ///
    /// All calls are dispatched concurrently and the move fails as soon as
    /// any call fails. Calls that already reached the tracker are not rolled
    /// back, so a failed move may be partially applied.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Tracker`] with the first failing call's
    /// error.
    pub async fn move_issue(
        &self,
        issue: &Issue,
        column: &Column,
        new_assignee: Option<&str>,
    ) -> BoardSyncResult<()> {
        let operations = self.plan_move(issue, column, new_assignee);
        try_join_all(
            operations
                .iter()
                .map(|operation| self.dispatch(issue, operation)),
        )
        .await?;
        Ok(())
    }

    /// Moves `issue` into `column` and reports every call's outcome.
    ///
    /// Unlike [`Self::move_issue`], this waits for all calls to settle and
    /// never short-circuits, exposing partial success.
    pub async fn move_issue_settled(
        &self,
        issue: &Issue,
        column: &Column,
        new_assignee: Option<&str>,
    ) -> MoveReport {
        let operations = self.plan_move(issue, column, new_assignee);
        let results = join_all(
            operations
                .iter()
                .map(|operation| self.dispatch(issue, operation)),
        )
        .await;

        MoveReport {
            outcomes: operations
                .into_iter()
                .zip(results)
                .map(|(operation, result)| CallOutcome { operation, result })
                .collect(),
        }
    }

    /// Moves `issue` into the column playing `state`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::UnknownColumnState`] when no column plays the
    /// state, or tracker errors from the move.
    pub async fn move_issue_to_state(
        &self,
        issue: &Issue,
        state: ColumnState,
        new_assignee: Option<&str>,
    ) -> BoardSyncResult<()> {
        let column = self
            .columns
            .get_by_state(state)
            .ok_or(BoardSyncError::UnknownColumnState(state))?;
        self.move_issue(issue, column, new_assignee).await
    }

    /// Looks an issue up, treating a missing issue as a regular outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSyncError::Tracker`] for failures other than
    /// [`TrackerError::NotFound`].
    pub async fn find_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
    ) -> BoardSyncResult<IssueLookup> {
        match self.tracker.fetch_issue(repository, number).await {
            Ok(issue) => Ok(IssueLookup::Found(issue)),
            Err(err) if err.is_not_found() => {
                debug!(
                    owner = repository.owner(),
                    repo = repository.repo(),
                    issue_number = number.value(),
                    error = %err,
                    "issue not found"
                );
                Ok(IssueLookup::NotFound)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Fetches an issue and moves it into `column` when it exists.
    ///
    /// Returns the issue as fetched before the move, or
    /// [`IssueLookup::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns tracker errors other than not-found, including failures of
    /// the move itself.
    pub async fn find_and_move_issue(
        &self,
        repository: &RepositoryRef,
        number: IssueNumber,
        column: &Column,
        new_assignee: Option<&str>,
    ) -> BoardSyncResult<IssueLookup> {
        let lookup = self.find_issue(repository, number).await?;
        if let IssueLookup::Found(issue) = &lookup {
            self.move_issue(issue, column, new_assignee).await?;
        }
        Ok(lookup)
    }

    /// Moves every same-repository issue that `issue` closes into `column`.
    ///
    /// References to other repositories, to the issue itself and repeated
    /// references are ignored. Missing issues are skipped. Returns the
    /// numbers of the moved issues in reference order.
    ///
    /// # Errors
    ///
    /// Returns the first error among the cascaded moves. Sibling moves may
    /// already have been applied.
    pub async fn move_referenced_issues(
        &self,
        issue: &Issue,
        column: &Column,
        new_assignee: Option<&str>,
    ) -> BoardSyncResult<Vec<IssueNumber>> {
        let repository = issue.repository();
        let targets = self.closed_issue_numbers(issue);

        let lookups = try_join_all(targets.into_iter().map(|number| {
            self.find_and_move_issue(repository, number, column, new_assignee)
        }))
        .await?;

        Ok(lookups
            .into_iter()
            .filter_map(|lookup| match lookup {
                IssueLookup::Found(moved) => Some(moved.number()),
                IssueLookup::NotFound => None,
            })
            .collect())
    }

    fn closed_issue_numbers(&self, issue: &Issue) -> Vec<IssueNumber> {
        let repository = issue.repository();
        let mut seen = HashSet::new();
        self.links
            .find_links(issue.body(), LinkType::Closes)
            .into_iter()
            .filter(|link| {
                let same_repository = link.targets(repository);
                if !same_repository {
                    debug!(
                        owner = link.owner(),
                        repo = link.repo(),
                        issue_number = link.number().value(),
                        "skipping cross-repository reference"
                    );
                }
                same_repository
            })
            .map(|link| link.number())
            .filter(|number| *number != issue.number() && seen.insert(*number))
            .collect()
    }

    async fn dispatch(&self, issue: &Issue, operation: &TrackerOperation) -> TrackerResult<()> {
        let repository = issue.repository();
        let number = issue.number();
        match operation {
            TrackerOperation::AddLabels(labels) => {
                info!(
                    owner = repository.owner(),
                    repo = repository.repo(),
                    issue_number = number.value(),
                    ?labels,
                    "adding labels"
                );
                self.tracker.add_labels(repository, number, labels).await
            }
            TrackerOperation::RemoveLabel(label) => {
                info!(
                    owner = repository.owner(),
                    repo = repository.repo(),
                    issue_number = number.value(),
                    label = label.as_str(),
                    "removing label"
                );
                self.tracker.remove_label(repository, number, label).await
            }
            TrackerOperation::UpdateIssue(fields) => {
                info!(
                    owner = repository.owner(),
                    repo = repository.repo(),
                    issue_number = number.value(),
                    state = fields.state.map(IssueState::as_str),
                    assignees = ?fields.assignees,
                    "updating issue"
                );
                self.tracker.update_issue(repository, number, fields).await
            }
        }
    }
}
