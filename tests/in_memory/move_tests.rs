//! Single-issue move tests against the in-memory tracker.

use super::helpers::{Board, board, issue, repository};
use boardsync::board::{
    domain::{ColumnState, IssueState},
    ports::ColumnRegistry,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_column_reaches_a_fixed_point(board: Board) {
    let columns = board.service.columns().get_all().to_vec();

    for (offset, target) in columns.iter().enumerate() {
        let number = 100 + u64::try_from(offset).expect("small offset");
        let seeded = board.seed(
            issue(number, IssueState::Open, &["bug", "backlog", "needs review"])
                .with_assignees(["walt"]),
        );

        board
            .service
            .move_issue(&seeded, target, Some("lisa"))
            .await
            .expect("move should succeed");

        let moved = board.current(&repository(), number);
        assert_eq!(moved.state(), target.issue_state());
        assert_eq!(moved.assignees(), ["walt".to_owned(), "lisa".to_owned()]);
        assert!(
            board.service.plan_move(&moved, target, Some("lisa")).is_empty(),
            "moving into {} twice should be a no-op",
            target.name()
        );
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_back_to_inbox_clears_board_labels(board: Board) {
    let seeded = board.seed(issue(9, IssueState::Closed, &["bug", "ready"]));

    board
        .service
        .move_issue(&seeded, &board.column(ColumnState::Default), None)
        .await
        .expect("move should succeed");

    let moved = board.current(&repository(), 9);
    assert_eq!(moved.state(), IssueState::Open);
    assert_eq!(moved.labels(), ["bug".to_owned()]);
}
