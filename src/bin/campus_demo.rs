//! Walks one project through its whole collaboration lifecycle.
//!
//! Usage:
//!
//! ```text
//! RUST_LOG=debug campus_demo
//! ```
//!
//! A leader creates a project, a student asks to join, the leader approves,
//! the student creates a task, the leader assigns it back to the student and
//! the student completes it. Progress is reported through `tracing` events.
//!
//! The platform configuration may be overridden with a JSON object in
//! `CAMPUS_PLATFORM_CONFIG`, for example `{"admin_override": false}`.

use campus_collab::config::PlatformConfig;
use campus_collab::identity::domain::{CallerIdentity, GlobalRole, User, UserId};
use campus_collab::platform::CollaborationPlatform;
use campus_collab::project::services::CreateProjectRequest;
use campus_collab::store::InMemoryCampusStore;
use campus_collab::task::services::CreateTaskRequest;
use campus_collab::telemetry::init_tracing;
use mockable::DefaultClock;
use std::env;
use std::sync::Arc;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CONFIG_ENV: &str = "CAMPUS_PLATFORM_CONFIG";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    init_tracing("info");
    let config = load_config()?;

    let store = Arc::new(InMemoryCampusStore::new());
    let leader = User::new(UserId::new(1), "Ada", "ada@campus.edu", GlobalRole::Student);
    let student = User::new(UserId::new(2), "Grace", "grace@campus.edu", GlobalRole::Student);
    let leader_caller =
        CallerIdentity::new(leader.id(), leader.email(), leader.global_role());
    let student_caller = CallerIdentity::student(student.id(), student.email());
    store.insert_user(leader)?;
    store.insert_user(student)?;

    let platform = CollaborationPlatform::new(store, Arc::new(DefaultClock), config);

    let project = platform
        .create_project(
            &leader_caller,
            CreateProjectRequest::new("Campus rover", "Autonomous delivery robot"),
        )
        .await?;
    let request = platform.send_request(&student_caller, project.id()).await?;
    let decided = platform
        .respond_to_request(&leader_caller, request.id(), "approve")
        .await?;
    let members = platform.list_members(&leader_caller, project.id()).await?;
    tracing::info!(status = %decided.status(), members = members.len(), "request approved");

    let task = platform
        .create_task(
            &student_caller,
            CreateTaskRequest::new(project.id(), "Wire the motor controller"),
        )
        .await?;
    tracing::info!(
        status = %task.status(),
        priority = %task.priority(),
        "task created"
    );
    platform
        .assign_task(&leader_caller, task.id(), student_caller.user_id())
        .await?;
    let done = platform
        .update_task_status(&student_caller, task.id(), "DONE")
        .await?;

    tracing::info!(task = %serde_json::to_string(&done)?, "scenario complete");
    Ok(())
}

fn load_config() -> Result<PlatformConfig, BoxError> {
    match env::var(CONFIG_ENV) {
        Ok(raw) => Ok(serde_json::from_str(&raw)?),
        Err(env::VarError::NotPresent) => Ok(PlatformConfig::default()),
        Err(err) => Err(err.into()),
    }
}
