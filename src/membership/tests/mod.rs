//! Unit tests for the membership store.
