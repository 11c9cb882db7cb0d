//! When steps for collaboration workflow BDD scenarios.

use super::world::{CollaborationWorld, run_async};
use campus_collab::platform::PlatformResult;
use campus_collab::task::{domain::Task, services::CreateTaskRequest};
use rstest_bdd_macros::when;

fn record_task(world: &mut CollaborationWorld, result: PlatformResult<Task>) {
    match result {
        Ok(task) => world.task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
}

fn send_request(world: &mut CollaborationWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.platform.send_request(&world.student, project_id));
    match result {
        Ok(request) => world.request = Some(request),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("the student requests to join the project")]
fn student_requests_to_join(world: &mut CollaborationWorld) -> Result<(), eyre::Report> {
    send_request(world)
}

#[when("the student requests to join the project again")]
fn student_requests_again(world: &mut CollaborationWorld) -> Result<(), eyre::Report> {
    send_request(world)
}

#[when(r#"the {actor} responds "{action}" to the request"#)]
fn actor_responds(
    world: &mut CollaborationWorld,
    actor: String,
    action: String,
) -> Result<(), eyre::Report> {
    let caller = world.caller(&actor)?;
    let request_id = world.request()?.id();
    let result = run_async(
        world
            .platform
            .respond_to_request(&caller, request_id, &action),
    );
    match result {
        Ok(request) => world.request = Some(request),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"the student creates task "{title}""#)]
fn student_creates_task(world: &mut CollaborationWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(
        world
            .platform
            .create_task(&world.student, CreateTaskRequest::new(project_id, title)),
    );
    record_task(world, result);
    Ok(())
}

#[when("the {actor} assigns the task to the student")]
fn actor_assigns_task(world: &mut CollaborationWorld, actor: String) -> Result<(), eyre::Report> {
    let caller = world.caller(&actor)?;
    let task_id = world.task()?.id();
    let result = run_async(world.platform.assign_task(
        &caller,
        task_id,
        world.student.user_id(),
    ));
    record_task(world, result);
    Ok(())
}

#[when(r#"the {actor} sets the task status to "{status}""#)]
fn actor_sets_status(
    world: &mut CollaborationWorld,
    actor: String,
    status: String,
) -> Result<(), eyre::Report> {
    let caller = world.caller(&actor)?;
    let task_id = world.task()?.id();
    let result = run_async(
        world
            .platform
            .update_task_status(&caller, task_id, &status),
    );
    record_task(world, result);
    Ok(())
}
