//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use task_tracker::task::services::{TaskLifecycleError, TaskView};

fn last_task(world: &TaskLifecycleWorld) -> Result<&TaskView, eyre::Report> {
    world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
}

#[then(r#"the created task has title "{title}""#)]
fn created_task_has_title(world: &TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    if task.title != title {
        return Err(eyre::eyre!("expected title {title:?}, found {:?}", task.title));
    }
    Ok(())
}

fn expect_completed(world: &TaskLifecycleWorld, expected: bool) -> Result<(), eyre::Report> {
    let completed = last_task(world)?.completed;
    if completed != expected {
        return Err(eyre::eyre!("expected completed = {expected}, found {completed}"));
    }
    Ok(())
}

#[then("the created task is not completed")]
fn created_task_is_open(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_completed(world, false)
}

#[then("the task is completed")]
fn task_is_completed(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_completed(world, true)
}

#[then("the task is not completed")]
fn task_is_not_completed(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    expect_completed(world, false)
}

#[then("the tracker lists {count:usize} tasks")]
fn tracker_lists(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.list()).wrap_err("list tasks")?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then(r#"creation fails with "{message}""#)]
fn creation_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(TaskLifecycleError::Validation(err))) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!(
            "expected validation error {message:?}, got {other:?}"
        )),
    }
}

#[then(r#"the listed titles are "{titles}""#)]
fn listed_titles_are(world: &TaskLifecycleWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let actual: Vec<&str> = world.listed.iter().map(|task| task.title.as_str()).collect();
    if actual != expected {
        return Err(eyre::eyre!("expected titles {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the task is reported as not found")]
fn task_reported_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Err(TaskLifecycleError::NotFound(_))) => Ok(()),
        other => Err(eyre::eyre!("expected a not found error, got {other:?}")),
    }
}
