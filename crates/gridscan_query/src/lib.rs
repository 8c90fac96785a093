//! Query compilation and evaluation for Gridscan.
//!
//! This crate provides:
//! - [`QueryCompiler`] - Turns an operator's token list into a [`MatchQuery`]
//! - [`QueryEvaluator`] - Applies a query to every group of a snapshot
//!
//! A query is an ordered AND of conditions: a group is selected only when
//! every member grid passes every condition. Compilation resolves names
//! against a [`gridscan_conditions::ConditionRegistry`] passed by reference,
//! so tests can use synthetic condition sets.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compile;
pub mod evaluate;

pub use compile::{CompiledCondition, MatchQuery, QueryCompiler};
pub use evaluate::QueryEvaluator;
