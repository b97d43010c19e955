//! # Dream Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Small hand-written datasets
//! - Temporary data directories written as JSON or RON
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
