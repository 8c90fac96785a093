//! Minimal 3D geometry for Gridscan.
//!
//! This crate provides:
//! - [`Ray`] - A bounded ray for look-at targeting
//! - [`Aabb`] - Axis-aligned bounding boxes with slab-test intersection
//! - [`CellGrid`] - Occupied-cell structures for fine raycasting
//!
//! Only what the spatial target resolver needs lives here; this is not a
//! general geometry library.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aabb;
pub mod cells;
pub mod ray;

pub use aabb::Aabb;
pub use cells::CellGrid;
pub use ray::Ray;
