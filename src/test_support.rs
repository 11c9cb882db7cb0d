//! Fixtures shared by the unit test modules.

use crate::identity::domain::{GlobalRole, User, UserId};
use crate::locking::ProjectLocks;
use crate::store::InMemoryCampusStore;
use rstest::fixture;
use std::sync::Arc;

pub(crate) const LEADER: UserId = UserId::new(1);
pub(crate) const STUDENT: UserId = UserId::new(2);
pub(crate) const OUTSIDER: UserId = UserId::new(3);
pub(crate) const MENTOR: UserId = UserId::new(4);
pub(crate) const ADMIN: UserId = UserId::new(9);
pub(crate) const GHOST: UserId = UserId::new(404);

/// Store seeded with one user per well-known id. `GHOST` is never seeded.
#[fixture]
pub(crate) fn store() -> Arc<InMemoryCampusStore> {
    let seeded = InMemoryCampusStore::new();
    let users = [
        (LEADER, "Ada", GlobalRole::Student),
        (STUDENT, "Grace", GlobalRole::Student),
        (OUTSIDER, "Linus", GlobalRole::Student),
        (MENTOR, "Barbara", GlobalRole::Professor),
        (ADMIN, "Root", GlobalRole::Admin),
    ];
    for (id, name, role) in users {
        let email = format!("{}@campus.edu", name.to_lowercase());
        seeded
            .insert_user(User::new(id, name, email, role))
            .expect("seeding an unpoisoned store succeeds");
    }
    Arc::new(seeded)
}

#[fixture]
pub(crate) fn locks() -> Arc<ProjectLocks> {
    Arc::new(ProjectLocks::new())
}
