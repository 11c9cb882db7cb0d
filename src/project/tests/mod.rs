//! Unit tests for the project catalogue.

mod domain_tests;
