//! Operator-facing scan and targeting surface for Gridscan.
//!
//! This crate provides:
//! - [`ResponseSink`] - Where human-readable responses go
//! - [`scan`] - The filter-query path: tokens in, matching groups out
//! - [`find_group_by_name_or_id`] - Explicit single-group targeting
//! - [`find_look_at_group`] - Implicit targeting along the actor's facing
//!
//! The command dispatch layer that tokenizes raw input and the domain
//! actions taken on a resolved group both live outside this workspace;
//! this crate is the boundary they call across.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod commands;
pub mod sink;

pub use commands::{Viewpoint, find_group_by_name_or_id, find_look_at_group, scan};
pub use sink::{BufferSink, ResponseSink};
