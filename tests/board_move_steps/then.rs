//! Then steps for board move BDD scenarios.

use super::world::{BoardWorld, split_list};
use boardsync::board::{
    domain::IssueState,
    ports::TrackerError,
    services::BoardSyncError,
};
use rstest_bdd_macros::then;

#[then("the move succeeds")]
fn move_succeeds(world: &BoardWorld) -> Result<(), eyre::Report> {
    match world.last_move_result.as_ref() {
        Some(Ok(_)) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected the move to succeed, got {err}")),
        None => Err(eyre::eyre!("no move was attempted")),
    }
}

#[then("the move fails with a tracker rejection")]
fn move_fails_with_rejection(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no move was attempted"))?;

    if !matches!(
        result,
        Err(BoardSyncError::Tracker(TrackerError::Rejected(_)))
    ) {
        return Err(eyre::eyre!("expected a tracker rejection, got {result:?}"));
    }
    Ok(())
}

#[then(r#"issue #{number:u64} is "{state}""#)]
fn issue_state_is(world: &BoardWorld, number: u64, state: String) -> Result<(), eyre::Report> {
    let expected = match state.as_str() {
        "open" => IssueState::Open,
        "closed" => IssueState::Closed,
        other => return Err(eyre::eyre!("unknown issue state in scenario: {other}")),
    };
    let actual = world.issue(number)?.state();
    eyre::ensure!(
        actual == expected,
        "expected issue #{number} to be {expected}, found {actual}"
    );
    Ok(())
}

#[then(r#"issue #{number:u64} has labels "{labels}""#)]
fn issue_has_labels(world: &BoardWorld, number: u64, labels: String) -> Result<(), eyre::Report> {
    let expected = split_list(&labels);
    let issue = world.issue(number)?;
    eyre::ensure!(
        issue.labels() == expected.as_slice(),
        "expected labels {expected:?} on issue #{number}, found {:?}",
        issue.labels()
    );
    Ok(())
}

#[then("issue #{number:u64} has no labels")]
fn issue_has_no_labels(world: &BoardWorld, number: u64) -> Result<(), eyre::Report> {
    let issue = world.issue(number)?;
    eyre::ensure!(
        issue.labels().is_empty(),
        "expected no labels on issue #{number}, found {:?}",
        issue.labels()
    );
    Ok(())
}

#[then(r#"issue #{number:u64} has assignees "{assignees}""#)]
fn issue_has_assignees(
    world: &BoardWorld,
    number: u64,
    assignees: String,
) -> Result<(), eyre::Report> {
    let expected = split_list(&assignees);
    let issue = world.issue(number)?;
    eyre::ensure!(
        issue.assignees() == expected.as_slice(),
        "expected assignees {expected:?} on issue #{number}, found {:?}",
        issue.assignees()
    );
    Ok(())
}
