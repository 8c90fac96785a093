//! Condition descriptors, registry, and the standard condition library.
//!
//! This crate provides:
//! - [`ConditionDescriptor`] - A named, optionally-invertible per-grid test
//! - [`ConditionRegistry`] - The immutable catalog the compiler resolves against
//! - [`stdlib`] - The standard condition set
//!
//! Conditions are contributed explicitly: a module exposes a pure function
//! returning its descriptors, and the host aggregates them into one registry
//! at startup. There is no runtime scanning and no global state; the
//! registry is passed by reference wherever it is needed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod registry;
pub mod stdlib;

pub use descriptor::ConditionDescriptor;
pub use registry::ConditionRegistry;
