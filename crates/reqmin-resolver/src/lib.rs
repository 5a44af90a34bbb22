//! Requirement reduction engine: merges requirements that share a version,
//! drops requirements implied by tighter ones, and detects sets no version
//! can satisfy.

pub mod conflict;
pub mod merge;
pub mod minimize;
pub mod selftest;
pub mod solve;

pub use conflict::Conflict;
pub use solve::{reduce, solve, Solution};
