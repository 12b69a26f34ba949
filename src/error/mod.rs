//! Error handling module
//!
//! Defines the error kinds shared by parsing, resolution and migration,
//! each with a stable exit code

pub mod types;

pub use types::*;
