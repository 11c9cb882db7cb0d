//! End-to-end lifecycle of one project.

use super::helpers::{Campus, LEADER, STUDENT, campus};
use campus_collab::collaboration::domain::RequestStatus;
use campus_collab::membership::domain::ProjectRole;
use campus_collab::task::{
    domain::{TaskPriority, TaskStatus},
    services::CreateTaskRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn student_joins_and_completes_a_task(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let members = campus
        .platform
        .list_members(&campus.leader(), project.id())
        .await?;
    assert_eq!(members.len(), 1);
    assert!(
        members
            .iter()
            .all(|member| member.user_id() == LEADER && member.role() == ProjectRole::Leader)
    );

    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    assert_eq!(request.status(), RequestStatus::Pending);

    let decided = campus
        .platform
        .respond_to_request(&campus.leader(), request.id(), "approve")
        .await?;
    assert_eq!(decided.status(), RequestStatus::Approved);
    let mut roles: Vec<_> = campus
        .platform
        .list_members(&campus.leader(), project.id())
        .await?
        .into_iter()
        .map(|member| (member.user_id(), member.role()))
        .collect();
    roles.sort_by_key(|(user_id, _)| *user_id);
    assert_eq!(
        roles,
        vec![(LEADER, ProjectRole::Leader), (STUDENT, ProjectRole::Member)]
    );

    let task = campus
        .platform
        .create_task(
            &campus.student(),
            CreateTaskRequest::new(project.id(), "Wire the motor controller"),
        )
        .await?;
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.priority(), TaskPriority::Medium);
    assert_eq!(task.assigned_to(), None);

    let assigned = campus
        .platform
        .assign_task(&campus.leader(), task.id(), STUDENT)
        .await?;
    assert_eq!(assigned.assigned_to(), Some(STUDENT));

    let done = campus
        .platform
        .update_task_status(&campus.student(), task.id(), "DONE")
        .await?;
    assert!(done.completed_at().is_some());

    let listed = campus
        .platform
        .list_requests_by_student(&campus.student(), STUDENT)
        .await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(
        listed.first().map(|view| view.status),
        Some(RequestStatus::Approved)
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repeated_done_keeps_first_completion_time(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let task = campus
        .platform
        .create_task(
            &campus.leader(),
            CreateTaskRequest::new(project.id(), "Calibrate sensors"),
        )
        .await?;

    let first = campus
        .platform
        .update_task_status(&campus.leader(), task.id(), "DONE")
        .await?;
    campus
        .platform
        .update_task_status(&campus.leader(), task.id(), "TODO")
        .await?;
    let second = campus
        .platform
        .update_task_status(&campus.leader(), task.id(), "done")
        .await?;

    assert!(first.completed_at().is_some());
    assert_eq!(second.completed_at(), first.completed_at());
    Ok(())
}
