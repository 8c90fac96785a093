//! Grid identifiers, match outcomes, and error types for Gridscan.
//!
//! This crate provides:
//! - [`GridId`] - Stable grid identifiers
//! - [`MatchOutcome`] - Tri-state condition results
//! - [`Error`] - Error types for query processing
//! - [`Result`] - Shared result alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod outcome;

pub use error::{Error, ErrorKind, Result};
pub use id::GridId;
pub use outcome::MatchOutcome;
