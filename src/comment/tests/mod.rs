//! Unit tests for the comment log.
