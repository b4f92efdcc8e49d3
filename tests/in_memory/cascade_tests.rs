//! Propagation tests along closing references.

use super::helpers::{Board, board, issue, issue_number, repository};
use boardsync::board::{
    adapters::memory::TrackerCall,
    domain::{ColumnState, Issue, IssueState, RepositoryRef},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cascade_moves_every_closed_issue(board: Board) {
    for number in 2..=6 {
        board.seed(issue(number, IssueState::Open, &["in progress"]));
    }
    let pull = board.seed(
        issue(1, IssueState::Open, &[])
            .with_body("Closes #2\nCloses #3\nFixes #4\nResolves #5\nCloses #6"),
    );
    let done = board.column(ColumnState::Done);

    board
        .service
        .move_issue(&pull, &done, None)
        .await
        .expect("move should succeed");
    let moved = board
        .service
        .move_referenced_issues(&pull, &done, None)
        .await
        .expect("propagation should succeed");

    assert_eq!(moved.len(), 5);
    for number in 1..=6 {
        let current = board.current(&repository(), number);
        assert_eq!(current.state(), IssueState::Closed, "issue #{number}");
        assert!(current.labels().is_empty(), "issue #{number}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cascade_never_touches_other_repositories(board: Board) {
    let other = RepositoryRef::new("acme", "lib").expect("valid repository");
    board.seed(Issue::new(other.clone(), issue_number(2), IssueState::Open));
    board.seed(issue(2, IssueState::Open, &[]));
    let pull = issue(1, IssueState::Open, &[])
        .with_body("closes acme/lib#2 and https://github.com/acme/lib/issues/2");

    let moved = board
        .service
        .move_referenced_issues(&pull, &board.column(ColumnState::Done), None)
        .await
        .expect("propagation should succeed");

    assert!(moved.is_empty());
    assert_eq!(board.current(&other, 2).state(), IssueState::Open);
    assert_eq!(board.current(&repository(), 2).state(), IssueState::Open);
    assert!(board.tracker.calls().expect("calls readable").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cascade_is_one_level_deep(board: Board) {
    board.seed(issue(2, IssueState::Open, &[]).with_body("closes #3"));
    board.seed(issue(3, IssueState::Open, &[]));
    let pull = issue(1, IssueState::Open, &[]).with_body("closes #2");

    board
        .service
        .move_referenced_issues(&pull, &board.column(ColumnState::Done), None)
        .await
        .expect("propagation should succeed");

    assert_eq!(board.current(&repository(), 2).state(), IssueState::Closed);
    assert_eq!(board.current(&repository(), 3).state(), IssueState::Open);
    let touched_three = board
        .tracker
        .calls()
        .expect("calls readable")
        .iter()
        .any(|call| matches!(call, TrackerCall::FetchIssue { number, .. } if number.value() == 3));
    assert!(!touched_three);
}
