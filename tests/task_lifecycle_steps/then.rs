//! Then steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use docket::task::{
    domain::TaskStatus,
    ports::TaskRepositoryError,
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;

    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }

    Ok(())
}

#[then("the task has a completion timestamp")]
fn task_has_completion_timestamp(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;

    if task.completed_at().is_none() {
        return Err(eyre::eyre!("expected a completion timestamp, found none"));
    }

    Ok(())
}

#[then("the operation fails with a not found error")]
fn operation_fails_with_not_found(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(_)))
    ) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }

    Ok(())
}

#[then(r#"the overdue listing contains only "{title}""#)]
fn overdue_listing_contains_only(
    world: &TaskLifecycleWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let overdue = run_async(world.service.find_overdue())
        .map_err(|err| eyre::eyre!("overdue query failed: {err}"))?;

    let found: Vec<&str> = overdue.iter().map(|task| task.title().as_str()).collect();
    if found != vec![title.as_str()] {
        return Err(eyre::eyre!("expected only {title:?} overdue, found {found:?}"));
    }

    Ok(())
}
