//! Workspace test package. Integration tests live in `tests/`.
