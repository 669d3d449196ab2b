//! Workspace-level integration test package.
//!
//! The golden-file and capacity integration tests live under `tests/`;
//! this library target is intentionally empty.
