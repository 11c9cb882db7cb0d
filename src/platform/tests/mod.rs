//! Unit tests for the guarded operation surface.
