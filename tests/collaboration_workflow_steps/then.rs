//! Then steps for collaboration workflow BDD scenarios.

use super::world::{CollaborationWorld, run_async};
use campus_collab::collaboration::domain::RequestStatus;
use campus_collab::task::domain::{TaskPriority, TaskStatus};
use rstest_bdd_macros::then;

#[then(r#"the request status is "{status}""#)]
fn request_status_is(world: &CollaborationWorld, status: String) -> Result<(), eyre::Report> {
    let expected = RequestStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let request = world.request()?;

    let views = run_async(
        world
            .platform
            .list_requests_by_project(&world.leader, request.project_id()),
    )?;
    let stored = views
        .iter()
        .find(|view| view.request_id == request.id())
        .ok_or_else(|| eyre::eyre!("request missing from project listing"))?;

    if stored.status != expected {
        return Err(eyre::eyre!(
            "expected request status {}, found {}",
            expected.as_str(),
            stored.status.as_str()
        ));
    }
    Ok(())
}

#[then("the project has {count} members")]
fn project_has_members(world: &CollaborationWorld, count: usize) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let members = run_async(world.platform.list_members(&world.leader, project_id))?;
    if members.len() != count {
        return Err(eyre::eyre!(
            "expected {count} members, found {}",
            members.len()
        ));
    }
    Ok(())
}

#[then(r#"the task status is "{status}" with priority "{priority}""#)]
fn task_status_and_priority(
    world: &CollaborationWorld,
    status: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let expected_status = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let expected_priority = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let task = world.task()?;

    if task.status() != expected_status || task.priority() != expected_priority {
        return Err(eyre::eyre!(
            "expected {} / {}, found {} / {}",
            expected_status.as_str(),
            expected_priority.as_str(),
            task.status().as_str(),
            task.priority().as_str()
        ));
    }
    Ok(())
}

#[then("the task is assigned to the student")]
fn task_assigned_to_student(world: &CollaborationWorld) -> Result<(), eyre::Report> {
    let assignee = world.task()?.assigned_to();
    if assignee != Some(world.student.user_id()) {
        return Err(eyre::eyre!("expected the student as assignee, found {assignee:?}"));
    }
    Ok(())
}

#[then("the task is unassigned")]
fn task_unassigned(world: &CollaborationWorld) -> Result<(), eyre::Report> {
    let assignee = world.task()?.assigned_to();
    if assignee.is_some() {
        return Err(eyre::eyre!("expected no assignee, found {assignee:?}"));
    }
    Ok(())
}

#[then("the task has a completion time")]
fn task_has_completion_time(world: &CollaborationWorld) -> Result<(), eyre::Report> {
    if world.task()?.completed_at().is_none() {
        return Err(eyre::eyre!("expected completed_at to be set"));
    }
    Ok(())
}

#[then(r#"the operation is refused as "{kind}""#)]
fn operation_refused(world: &CollaborationWorld, kind: String) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the last operation to fail"))?;
    if err.kind().as_str() != kind {
        return Err(eyre::eyre!("expected {kind} refusal, got {}: {err}", err.kind()));
    }
    Ok(())
}
