//! Workspace-level integration tests for Calculon live in `tests/`.
