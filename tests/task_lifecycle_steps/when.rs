//! When steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use chrono::{Duration, Utc};
use docket::task::{domain::TaskId, services::CreateTaskRequest};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create(CreateTaskRequest::new(title)))
        .wrap_err("create task in scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[when(r#"a task titled "{title}" is created with a due date in the past"#)]
fn create_overdue_task(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let yesterday = Utc::now() - Duration::days(1);
    let created = run_async(
        world
            .service
            .create(CreateTaskRequest::new(title).with_due_date(yesterday)),
    )
    .wrap_err("create overdue task in scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[when("the task is marked completed")]
fn mark_completed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(world.service.mark_completed(task.id()));
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("the task is marked pending")]
fn mark_pending(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let result = run_async(world.service.mark_pending(task.id()));
    if let Ok(ref updated) = result {
        world.last_task = Some(updated.clone());
    }
    world.last_result = Some(result);
    Ok(())
}

#[when("a missing task is marked completed")]
fn mark_missing_completed(world: &mut TaskLifecycleWorld) {
    let result = run_async(world.service.mark_completed(TaskId::new()));
    world.last_result = Some(result);
}
