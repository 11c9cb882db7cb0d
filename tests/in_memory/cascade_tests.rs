//! Deleting projects and tasks removes everything they own.

use super::helpers::{Campus, LEADER, STUDENT, campus};
use campus_collab::collaboration::ports::CollaborationRequestRepository;
use campus_collab::comment::ports::TaskCommentRepository;
use campus_collab::error::ErrorKind;
use campus_collab::membership::ports::MembershipRepository;
use campus_collab::task::{ports::TaskRepository, services::CreateTaskRequest};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_removes_all_it_owns(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    campus
        .platform
        .respond_to_request(&campus.leader(), request.id(), "approve")
        .await?;
    let task = campus
        .platform
        .create_task(
            &campus.student(),
            CreateTaskRequest::new(project.id(), "Wire motors"),
        )
        .await?;
    campus
        .platform
        .add_comment(&campus.student(), task.id(), "Started")
        .await?;

    campus
        .platform
        .delete_project(&campus.leader(), project.id())
        .await?;

    let lookup = campus.platform.find_project(project.id()).await;
    assert_eq!(
        lookup.map_err(|err| err.kind()).err(),
        Some(ErrorKind::NotFound)
    );
    assert!(campus.store.list_members(project.id()).await?.is_empty());
    assert!(campus.store.list_memberships_for_user(LEADER).await?.is_empty());
    assert!(campus.store.find_request(request.id()).await?.is_none());
    assert!(
        campus
            .store
            .find_request_for_pair(project.id(), STUDENT)
            .await?
            .is_none()
    );
    assert!(campus.store.find_task(task.id()).await?.is_none());
    assert!(campus.store.list_comments_by_task(task.id()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_owner_roles_may_delete_a_project(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    campus
        .platform
        .add_member(&campus.leader(), project.id(), STUDENT, None)
        .await?;

    let err = campus
        .platform
        .delete_project(&campus.student(), project.id())
        .await
        .expect_err("plain member cannot delete");

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(campus.platform.find_project(project.id()).await.is_ok());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_task_removes_its_comments(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let task = campus
        .platform
        .create_task(
            &campus.leader(),
            CreateTaskRequest::new(project.id(), "Order parts"),
        )
        .await?;
    campus
        .platform
        .add_comment(&campus.leader(), task.id(), "Quote received")
        .await?;

    campus
        .platform
        .delete_task(&campus.leader(), task.id())
        .await?;

    assert!(campus.store.list_comments_by_task(task.id()).await?.is_empty());
    let tasks = campus
        .platform
        .list_tasks_by_project(&campus.leader(), project.id())
        .await?;
    assert!(tasks.is_empty());
    Ok(())
}
