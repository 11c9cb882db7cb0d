//! Domain tests for project values and revisions.

use crate::identity::domain::UserId;
use crate::project::domain::{
    ParseProjectStatusError, Project, ProjectDomainError, ProjectRevision, ProjectStatus,
    ProjectTitle,
};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

#[rstest]
#[case("  Rover  ", "Rover")]
#[case("Line follower", "Line follower")]
fn project_title_is_trimmed(#[case] raw: &str, #[case] expected: &str) {
    let title = ProjectTitle::new(raw).expect("non-blank title is valid");
    assert_eq!(title.as_str(), expected);
}

#[rstest]
#[case("")]
#[case("   ")]
fn project_title_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(ProjectTitle::new(raw), Err(ProjectDomainError::EmptyTitle));
}

#[rstest]
#[case(None, ProjectStatus::Open)]
#[case(Some(""), ProjectStatus::Open)]
#[case(Some("ongoing"), ProjectStatus::Ongoing)]
#[case(Some(" COMPLETED "), ProjectStatus::Completed)]
fn project_status_defaults_to_open(
    #[case] label: Option<&str>,
    #[case] expected: ProjectStatus,
) {
    assert_eq!(ProjectStatus::parse_or_open(label), Ok(expected));
}

#[rstest]
fn project_status_rejects_unknown_label() {
    assert_eq!(
        ProjectStatus::parse_or_open(Some("archived")),
        Err(ParseProjectStatusError("archived".to_owned()))
    );
}

#[rstest]
fn new_project_is_open_and_records_creator(clock: DefaultClock) {
    let title = ProjectTitle::new("Rover").expect("valid title");
    let project = Project::new(title, "Robot", UserId::new(7), 4, &clock);

    assert_eq!(project.status(), ProjectStatus::Open);
    assert!(project.is_created_by(UserId::new(7)));
    assert!(!project.is_created_by(UserId::new(8)));
    assert_eq!(project.members_required(), 4);
    assert_eq!(project.created_at(), project.updated_at());
    assert_eq!(project.deadline(), None);
}

#[rstest]
fn revise_keeps_optional_fields_when_absent(clock: DefaultClock) {
    let title = ProjectTitle::new("Rover").expect("valid title");
    let deadline = NaiveDate::from_ymd_opt(2026, 6, 1).expect("valid date");
    let mut project = Project::new(title, "Robot", UserId::new(7), 4, &clock)
        .with_status(ProjectStatus::Ongoing)
        .with_deadline(deadline);

    project.revise(
        ProjectRevision {
            title: ProjectTitle::new("Rover v2").expect("valid title"),
            description: "Bigger robot".to_owned(),
            status: None,
            members_required: None,
            deadline: None,
        },
        &clock,
    );

    assert_eq!(project.title().as_str(), "Rover v2");
    assert_eq!(project.description(), "Bigger robot");
    assert_eq!(project.status(), ProjectStatus::Ongoing);
    assert_eq!(project.members_required(), 4);
    assert_eq!(project.deadline(), Some(deadline));
    assert!(project.updated_at() >= project.created_at());
}
