//! Pure diff computation for column moves.

use crate::board::{
    domain::{Column, Issue, IssueFieldUpdate, StateUpdate},
    ports::ColumnRegistry,
};

/// Computes the state and label diff aligning `issue` with `column`.
///
/// Labels to remove follow the registry's column order, so the result is
/// deterministic for a given board. Applying the diff and recomputing yields
/// an empty [`StateUpdate`].
///
/// # Examples
///
/// ```
/// use boardsync::board::adapters::memory::InMemoryColumnRegistry;
/// use boardsync::board::domain::{ColumnState, Issue, IssueState};
/// use boardsync::board::ports::ColumnRegistry;
/// use boardsync::board::services::get_state_update;
///
/// let registry = InMemoryColumnRegistry::standard().expect("standard board");
/// let done = registry.get_by_state(ColumnState::Done).expect("done column");
/// let issue = Issue::from_parts("acme", "app", 7, IssueState::Open)
///     .expect("valid issue")
///     .with_labels(["bug", "needs review"]);
///
/// let diff = get_state_update(&issue, done, &registry);
/// assert_eq!(diff.update.state, Some(IssueState::Closed));
/// assert_eq!(diff.labels_to_remove, vec!["needs review".to_owned()]);
/// ```
#[must_use]
pub fn get_state_update<R>(issue: &Issue, column: &Column, registry: &R) -> StateUpdate
where
    R: ColumnRegistry + ?Sized,
{
    let target_state = column.issue_state();
    let update = IssueFieldUpdate {
        state: (issue.state() != target_state).then_some(target_state),
        assignees: None,
    };

    let new_label = column.label();
    let labels_to_add = match new_label {
        Some(label) if !issue.has_label(label) => vec![label.to_owned()],
        _ => Vec::new(),
    };

    let mut labels_to_remove: Vec<String> = Vec::new();
    for label in registry.get_all().iter().filter_map(Column::label) {
        let is_stale = Some(label) != new_label && issue.has_label(label);
        if is_stale && !labels_to_remove.iter().any(|queued| queued == label) {
            labels_to_remove.push(label.to_owned());
        }
    }

    StateUpdate {
        update,
        labels_to_add,
        labels_to_remove,
    }
}

/// Computes the additive assignee diff for `new_assignee`.
///
/// Returns an empty update when no assignee is given or the login is already
/// assigned. Existing assignees keep their order.
#[must_use]
pub fn get_assignee_update(issue: &Issue, new_assignee: Option<&str>) -> IssueFieldUpdate {
    let Some(login) = new_assignee.filter(|login| !login.trim().is_empty()) else {
        return IssueFieldUpdate::default();
    };
    if issue.is_assigned_to(login) {
        return IssueFieldUpdate::default();
    }

    let mut assignees = issue.assignees().to_vec();
    assignees.push(login.to_owned());
    IssueFieldUpdate {
        state: None,
        assignees: Some(assignees),
    }
}
