//! Gridscan - Entity selection query engine
//!
//! This crate re-exports all layers of the Gridscan system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: gridscan_runtime    — Scan entry points, targeting, reporting
//! Layer 3: gridscan_query      — Query compiler and evaluator
//!          gridscan_conditions — Condition registry and standard library
//! Layer 2: gridscan_world      — World snapshots, grouping, look-at
//! Layer 1: gridscan_spatial    — Rays, boxes, cell raycasts
//! Layer 0: gridscan_foundation — Core types (GridId, MatchOutcome, Error)
//! ```

pub use gridscan_conditions as conditions;
pub use gridscan_foundation as foundation;
pub use gridscan_query as query;
pub use gridscan_runtime as runtime;
pub use gridscan_spatial as spatial;
pub use gridscan_world as world;
