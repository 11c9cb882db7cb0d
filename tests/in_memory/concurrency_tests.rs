//! Races on the same project resolve to a single winner.

use super::helpers::{Campus, LEADER, STUDENT, campus};
use campus_collab::error::ErrorKind;
use campus_collab::membership::ports::MembershipRepository;
use rstest::rstest;
use std::sync::Arc;

const CONTENDERS: usize = 16;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_for_a_pair_yield_one_success(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let platform = Arc::clone(&campus.platform);
    let student = campus.student();

    let mut handles = Vec::with_capacity(CONTENDERS);
    for _ in 0..CONTENDERS {
        let task_platform = Arc::clone(&platform);
        let caller = student.clone();
        let project_id = project.id();
        handles.push(tokio::spawn(async move {
            task_platform.send_request(&caller, project_id).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => successes += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::Conflict),
        }
    }

    assert_eq!(successes, 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_approvals_add_one_membership(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let request = campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    let platform = Arc::clone(&campus.platform);
    let leader = campus.leader();

    let mut handles = Vec::with_capacity(CONTENDERS);
    for _ in 0..CONTENDERS {
        let task_platform = Arc::clone(&platform);
        let caller = leader.clone();
        let request_id = request.id();
        handles.push(tokio::spawn(async move {
            task_platform
                .respond_to_request(&caller, request_id, "approve")
                .await
        }));
    }

    let mut approvals = 0;
    for handle in handles {
        match handle.await? {
            Ok(_) => approvals += 1,
            Err(err) => assert_eq!(err.kind(), ErrorKind::InvalidState),
        }
    }

    assert_eq!(approvals, 1);
    let members = campus.store.list_members(project.id()).await?;
    assert_eq!(members.len(), 2);
    assert_eq!(
        members
            .iter()
            .filter(|member| member.user_id() == STUDENT)
            .count(),
        1
    );
    assert!(members.iter().any(|member| member.user_id() == LEADER));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_member_adds_do_not_duplicate(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let platform = Arc::clone(&campus.platform);
    let leader = campus.leader();

    let mut handles = Vec::with_capacity(CONTENDERS);
    for _ in 0..CONTENDERS {
        let task_platform = Arc::clone(&platform);
        let caller = leader.clone();
        let project_id = project.id();
        handles.push(tokio::spawn(async move {
            task_platform
                .add_member(&caller, project_id, STUDENT, None)
                .await
        }));
    }

    let mut added = 0;
    for handle in handles {
        if handle.await?.is_ok() {
            added += 1;
        }
    }

    assert_eq!(added, 1);
    assert_eq!(campus.store.list_members(project.id()).await?.len(), 2);
    Ok(())
}
