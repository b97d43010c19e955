//! # Dream Core
//!
//! Data model and reference checks for the soul pet game content.
//!
//! This crate contains **only** pure logic:
//! - No file IO
//! - No printing
//!
//! Loading files and writing reports is handled by `dream_tools`.
//!
//! ## Crate Structure
//!
//! - [`data`] - Soul pet and skill record definitions
//! - [`index`] - Id lookup indexes with a duplicate-id policy
//! - [`validate`] - Skill and evolution reference checks
//! - [`report`] - Findings and the verification summary
//! - [`error`] - Error type shared with the tools crate

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod data;
pub mod error;
pub mod index;
pub mod report;
pub mod validate;
