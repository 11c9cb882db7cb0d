//! Unit tests for the collaboration request workflow.

mod domain_tests;
