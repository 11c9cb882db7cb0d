//! Request uniqueness and decision rules through the platform.

use super::helpers::{Campus, OUTSIDER, STUDENT, campus};
use campus_collab::collaboration::domain::RequestStatus;
use campus_collab::error::ErrorKind;
use campus_collab::task::services::CreateTaskRequest;
use rstest::rstest;

#[rstest]
#[case("approve")]
#[case("reject")]
#[tokio::test(flavor = "multi_thread")]
async fn a_pair_gets_one_request_ever(campus: Campus, #[case] decision: &str) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    campus
        .platform
        .respond_to_request(&campus.leader(), request.id(), decision)
        .await?;

    let err = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await
        .expect_err("second request must conflict");

    assert_eq!(err.kind(), ErrorKind::Conflict);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_creator_decision_leaves_request_pending(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;

    let err = campus
        .platform
        .respond_to_request(&campus.outsider(), request.id(), "approve")
        .await
        .expect_err("outsider cannot decide");
    let views = campus
        .platform
        .list_requests_by_project(&campus.leader(), project.id())
        .await?;

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert_eq!(views.len(), 1);
    assert!(views.iter().all(|view| view.status == RequestStatus::Pending));
    let members = campus
        .platform
        .list_members(&campus.leader(), project.id())
        .await?;
    assert!(members.iter().all(|member| member.user_id() != STUDENT));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deciding_twice_is_an_invalid_state(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    campus
        .platform
        .respond_to_request(&campus.leader(), request.id(), "reject")
        .await?;

    let err = campus
        .platform
        .respond_to_request(&campus.leader(), request.id(), "approve")
        .await
        .expect_err("decided request is terminal");

    assert_eq!(err.kind(), ErrorKind::InvalidState);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn assigning_a_non_member_leaves_assignee_unchanged(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let task = campus
        .platform
        .create_task(
            &campus.leader(),
            CreateTaskRequest::new(project.id(), "Order parts"),
        )
        .await?;

    let err = campus
        .platform
        .assign_task(&campus.leader(), task.id(), OUTSIDER)
        .await
        .expect_err("outsider cannot be assigned");
    let tasks = campus
        .platform
        .list_tasks_by_project(&campus.leader(), project.id())
        .await?;

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert!(tasks.iter().all(|listed| listed.assigned_to().is_none()));
    Ok(())
}
