//! Given steps for board move BDD scenarios.

use super::world::{BoardWorld, repository, split_list};
use boardsync::board::{
    adapters::memory::InMemoryColumnRegistry,
    config::BoardConfig,
    domain::{Issue, IssueNumber, IssueState},
};
use cap_std::{ambient_authority, fs_utf8::Dir};
use eyre::WrapErr;
use rstest_bdd_macros::given;

fn store_issue(
    world: &BoardWorld,
    number: u64,
    state: IssueState,
    labels: &str,
) -> Result<(), eyre::Report> {
    let issue = Issue::new(repository()?, IssueNumber::new(number)?, state)
        .with_labels(split_list(labels));
    world
        .tracker
        .insert(issue)
        .wrap_err("store scenario issue")?;
    Ok(())
}

#[given("the standard board")]
fn standard_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let registry = InMemoryColumnRegistry::standard().wrap_err("build standard board")?;
    world.use_registry(registry);
    Ok(())
}

#[given(r#"the board configured in "{path}""#)]
fn configured_board(world: &mut BoardWorld, path: String) -> Result<(), eyre::Report> {
    let dir = Dir::open_ambient_dir(env!("CARGO_MANIFEST_DIR"), ambient_authority())
        .wrap_err("open manifest directory")?;
    let config = BoardConfig::load(&dir, &path).wrap_err("load board configuration")?;
    let registry = InMemoryColumnRegistry::from_config(config).wrap_err("validate board")?;
    world.use_registry(registry);
    Ok(())
}

#[given(r#"an open issue #{number:u64} labelled "{labels}""#)]
fn open_issue(world: &mut BoardWorld, number: u64, labels: String) -> Result<(), eyre::Report> {
    store_issue(world, number, IssueState::Open, &labels)
}

#[given(r#"a closed issue #{number:u64} labelled "{labels}""#)]
fn closed_issue(world: &mut BoardWorld, number: u64, labels: String) -> Result<(), eyre::Report> {
    store_issue(world, number, IssueState::Closed, &labels)
}

#[given(r#"an open issue #{number:u64} with body "{body}""#)]
fn open_issue_with_body(
    world: &mut BoardWorld,
    number: u64,
    body: String,
) -> Result<(), eyre::Report> {
    let issue = Issue::new(repository()?, IssueNumber::new(number)?, IssueState::Open)
        .with_body(body);
    world.tracker.insert(issue).wrap_err("store scenario issue")?;
    Ok(())
}

#[given(r#"issue #{number:u64} is already assigned to "{assignees}""#)]
fn issue_assigned(
    world: &mut BoardWorld,
    number: u64,
    assignees: String,
) -> Result<(), eyre::Report> {
    let issue = world.issue(number)?.with_assignees(split_list(&assignees));
    world.tracker.insert(issue).wrap_err("store scenario issue")?;
    Ok(())
}

#[given("the tracker rejects changes to issue #{number:u64}")]
fn tracker_rejects(world: &mut BoardWorld, number: u64) -> Result<(), eyre::Report> {
    world
        .tracker
        .reject_issue(IssueNumber::new(number)?, "issue is locked")
        .wrap_err("install rejection rule")?;
    Ok(())
}
