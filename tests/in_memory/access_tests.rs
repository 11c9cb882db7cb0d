//! Self-only listings and the admin read override.

use super::helpers::{Campus, LEADER, STUDENT, campus};
use campus_collab::config::PlatformConfig;
use campus_collab::error::ErrorKind;
use campus_collab::identity::domain::{CallerIdentity, GlobalRole, User, UserId};
use campus_collab::platform::CollaborationPlatform;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

const ADMIN: UserId = UserId::new(9);

fn admin_caller(campus: &Campus) -> eyre::Result<CallerIdentity> {
    campus
        .store
        .insert_user(User::new(ADMIN, "Root", "root@campus.edu", GlobalRole::Admin))?;
    Ok(CallerIdentity::new(ADMIN, "root@campus.edu", GlobalRole::Admin))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn students_cannot_read_each_others_requests(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;

    let err = campus
        .platform
        .list_requests_by_student(&campus.outsider(), STUDENT)
        .await
        .expect_err("other students' requests are private");

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admins_read_other_listings_by_default(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    campus
        .platform
        .send_request(&campus.student(), project.id())
        .await?;
    let admin = admin_caller(&campus)?;

    let requests = campus
        .platform
        .list_requests_by_student(&admin, STUDENT)
        .await?;
    let tasks = campus.platform.list_tasks_by_assignee(&admin, LEADER).await?;

    assert_eq!(requests.len(), 1);
    assert!(tasks.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn strict_config_disables_the_admin_override(campus: Campus) -> eyre::Result<()> {
    let admin = admin_caller(&campus)?;
    let strict = CollaborationPlatform::new(
        Arc::clone(&campus.store),
        Arc::new(DefaultClock),
        PlatformConfig::strict(),
    );

    let err = strict
        .list_tasks_by_assignee(&admin, STUDENT)
        .await
        .expect_err("override is disabled");

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn admins_cannot_send_requests(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    let admin = admin_caller(&campus)?;

    let err = campus
        .platform
        .send_request(&admin, project.id())
        .await
        .expect_err("only students may ask to join");

    assert_eq!(err.kind(), ErrorKind::Forbidden);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn my_projects_follow_membership(campus: Campus) -> eyre::Result<()> {
    let project = campus.rover().await?;
    campus
        .platform
        .add_member(&campus.leader(), project.id(), STUDENT, Some("mentor"))
        .await?;

    let mine = campus.platform.list_my_projects(&campus.student()).await?;
    let outsider = campus.platform.list_my_projects(&campus.outsider()).await?;

    assert_eq!(
        mine.iter().map(|listed| listed.id()).collect::<Vec<_>>(),
        vec![project.id()]
    );
    assert!(outsider.is_empty());
    Ok(())
}
