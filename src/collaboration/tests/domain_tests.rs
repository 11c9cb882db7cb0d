//! Request decisions and label parsing.

use crate::collaboration::domain::{
    CollaborationDomainError, CollaborationRequest, ParseRequestActionError, RequestAction,
    RequestStatus,
};
use crate::identity::domain::UserId;
use crate::project::domain::ProjectId;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn pending() -> CollaborationRequest {
    CollaborationRequest::new(ProjectId::new(), UserId::new(2), &DefaultClock)
}

#[rstest]
#[case(RequestAction::Approve, RequestStatus::Approved)]
#[case(RequestAction::Reject, RequestStatus::Rejected)]
fn decide_moves_pending_request_to_target(
    mut pending: CollaborationRequest,
    #[case] action: RequestAction,
    #[case] expected: RequestStatus,
) {
    assert_eq!(pending.status(), RequestStatus::Pending);

    pending
        .decide(action, &DefaultClock)
        .expect("pending request can be decided");

    assert_eq!(pending.status(), expected);
    assert!(pending.updated_at() >= pending.created_at());
}

#[rstest]
fn decided_request_cannot_be_decided_again(mut pending: CollaborationRequest) {
    pending
        .decide(RequestAction::Reject, &DefaultClock)
        .expect("first decision succeeds");
    let snapshot = pending.clone();

    let result = pending.decide(RequestAction::Approve, &DefaultClock);

    assert_eq!(
        result,
        Err(CollaborationDomainError::InvalidStateTransition {
            request_id: pending.id(),
            from: RequestStatus::Rejected,
            to: RequestStatus::Approved,
        })
    );
    assert_eq!(pending, snapshot);
}

#[rstest]
#[case("approve", RequestAction::Approve)]
#[case(" REJECT ", RequestAction::Reject)]
fn action_labels_ignore_case_and_padding(#[case] label: &str, #[case] expected: RequestAction) {
    assert_eq!(RequestAction::try_from(label), Ok(expected));
}

#[rstest]
fn unknown_action_is_rejected() {
    assert_eq!(
        RequestAction::try_from("maybe"),
        Err(ParseRequestActionError("maybe".to_owned()))
    );
}
