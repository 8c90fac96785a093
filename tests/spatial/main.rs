//! Integration tests for the spatial layer
//!
//! Tests for rays against boxes and occupied-cell structures.

mod raycast;
