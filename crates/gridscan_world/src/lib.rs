//! World snapshots, connectivity grouping, and look-at targeting for Gridscan.
//!
//! This crate provides:
//! - [`GridSnapshot`] - One grid as observed at query time
//! - [`WorldSnapshot`] - The call-scoped copy of the live world
//! - [`GroupMap`] - Partition of grids into mechanically-connected groups
//! - [`resolve_look_at`] - Raycast targeting along a viewer's facing
//!
//! Everything here is rebuilt per query. The external simulation owns grid
//! lifecycles; this crate only observes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod group;
pub mod snapshot;
pub mod target;

pub use grid::{GridSnapshot, Ownership, SizeClass};
pub use group::{GridGroup, GroupMap, LinkNeighbors, connected_components};
pub use snapshot::WorldSnapshot;
pub use target::{DEFAULT_LOOK_RANGE, resolve_look_at};
