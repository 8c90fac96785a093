//! Integration tests for the query layer
//!
//! Tests for token compilation and group evaluation against full worlds.

mod compile;
