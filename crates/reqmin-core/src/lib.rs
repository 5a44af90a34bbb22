//! Core data types for reqmin.
//!
//! This crate defines the values the reduction engine works on: dotted
//! numeric versions, the six comparison operators together with the table
//! describing how two operators on the same version combine, single
//! requirements, and user configuration.
//!
//! This crate is intentionally free of I/O apart from loading configuration.

pub mod config;
pub mod requirement;
pub mod version;

pub use requirement::{Operator, Requirement};
pub use version::Version;
