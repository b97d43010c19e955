//! # Dream Development Tools
//!
//! Command-line tooling for the soul pet content files:
//! - Data loaders for JSON and RON collections
//! - Reference verification between pets and skills

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod verify;
