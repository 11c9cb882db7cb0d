//! Given steps for collaboration workflow BDD scenarios.

use super::world::{CollaborationWorld, run_async};
use campus_collab::project::services::CreateProjectRequest;
use campus_collab::task::services::CreateTaskRequest;
use rstest_bdd_macros::given;

#[given(r#"the leader has created project "{title}""#)]
fn leader_created_project(
    world: &mut CollaborationWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let project = run_async(world.platform.create_project(
        &world.leader,
        CreateProjectRequest::new(title, "Scenario project"),
    ))?;
    world.project = Some(project);
    Ok(())
}

#[given("the student is a member of the project")]
fn student_is_member(world: &mut CollaborationWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    run_async(world.platform.add_member(
        &world.leader,
        project_id,
        world.student.user_id(),
        None,
    ))?;
    Ok(())
}

#[given(r#"the leader has created task "{title}""#)]
fn leader_created_task(world: &mut CollaborationWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let task = run_async(
        world
            .platform
            .create_task(&world.leader, CreateTaskRequest::new(project_id, title)),
    )?;
    world.task = Some(task);
    Ok(())
}
