//! Workspace-level integration tests for TipTime-rs.
//!
//! The tests live in `tests/`; this crate has no code of its own.
