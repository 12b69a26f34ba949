//! Operations module
//!
//! Coordinates multi-file migrations driven by a manifest

pub mod batch;

pub use batch::*;
