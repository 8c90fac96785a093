//! Cross-layer integration tests for Gridscan
//!
//! Tests that verify correct interaction between multiple crates, driving
//! the pipeline the way a host command layer would.

mod targeting;
