//! Shared utilities for the reqmin workspace.
//!
//! This crate holds the cross-cutting error type used by the other reqmin
//! crates and by the `reqmin` binary.

pub mod errors;
