//! When steps for board move BDD scenarios.

use super::world::{BoardWorld, run_async};
use boardsync::board::{domain::Column, ports::ColumnRegistry};
use rstest_bdd_macros::when;

fn column(world: &BoardWorld, name: &str) -> Result<Column, eyre::Report> {
    world
        .service
        .columns()
        .get_by_name(name)
        .cloned()
        .ok_or_else(|| eyre::eyre!("board has no column named {name}"))
}

#[when(r#"issue #{number:u64} is moved to the "{column_name}" column"#)]
fn move_issue(
    world: &mut BoardWorld,
    number: u64,
    column_name: String,
) -> Result<(), eyre::Report> {
    let issue = world.issue(number)?;
    let target = column(world, &column_name)?;
    let result = run_async(world.service.move_issue(&issue, &target, None)).map(|()| Vec::new());
    world.last_move_result = Some(result);
    Ok(())
}

#[when(r#"issue #{number:u64} is moved to the "{column_name}" column by "{assignee}""#)]
fn move_issue_by(
    world: &mut BoardWorld,
    number: u64,
    column_name: String,
    assignee: String,
) -> Result<(), eyre::Report> {
    let issue = world.issue(number)?;
    let target = column(world, &column_name)?;
    let result = run_async(world.service.move_issue(&issue, &target, Some(&assignee)))
        .map(|()| Vec::new());
    world.last_move_result = Some(result);
    Ok(())
}

#[when(r#"issue #{number:u64} is moved to the "{column_name}" column with its references"#)]
fn move_issue_with_references(
    world: &mut BoardWorld,
    number: u64,
    column_name: String,
) -> Result<(), eyre::Report> {
    let issue = world.issue(number)?;
    let target = column(world, &column_name)?;
    let result = run_async(async {
        match world.service.move_issue(&issue, &target, None).await {
            Ok(()) => {
                world
                    .service
                    .move_referenced_issues(&issue, &target, None)
                    .await
            }
            Err(err) => Err(err),
        }
    });
    world.last_move_result = Some(result);
    Ok(())
}
