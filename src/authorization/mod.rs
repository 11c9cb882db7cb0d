//! Authorization evaluator.
//!
//! Read-only decision functions consumed as guards by every mutating
//! operation. They never mutate state and are safe to call concurrently and
//! repeatedly. Lookup failures evaluate to `false`.
//!
//! Two different notions of "project owner" coexist and are deliberately kept
//! apart: [`ProjectAuthorizer::is_project_owner`] means a member holding
//! `LEADER` or `MENTOR`, while [`ProjectAuthorizer::is_project_creator`]
//! means the project's recorded creator. Collaboration request decisions use
//! the latter.

mod evaluator;

pub use evaluator::ProjectAuthorizer;
