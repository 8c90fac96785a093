//! Integration tests for the world layer
//!
//! Tests for snapshots and connectivity grouping.

mod snapshots;
