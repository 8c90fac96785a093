//! Occupied-cell structures for fine raycasting.
//!
//! A grid's coarse AABB says only "somewhere in here"; the occupied-cell
//! structure records which unit cells of the grid actually hold material,
//! so a targeting ray can pass through empty corners of the bounding box.

use std::collections::HashSet;

use glam::{DVec3, IVec3};

use crate::aabb::Aabb;
use crate::ray::Ray;

/// A set of occupied cells anchored at a world-space origin.
///
/// Cell `(i, j, k)` spans the world-space box from
/// `origin + (i, j, k) * cell_size` to `origin + (i+1, j+1, k+1) * cell_size`.
#[derive(Clone, Debug)]
pub struct CellGrid {
    /// World-space position of the corner of cell `(0, 0, 0)`.
    pub origin: DVec3,
    /// Edge length of one cell.
    pub cell_size: f64,
    /// Occupied cell coordinates.
    cells: HashSet<IVec3>,
}

impl CellGrid {
    /// Creates a cell grid from its anchor, cell size, and occupied cells.
    ///
    /// A non-positive `cell_size` is clamped to a small positive value so a
    /// malformed snapshot degrades to near-point cells instead of breaking
    /// the raycast math.
    #[must_use]
    pub fn new(origin: DVec3, cell_size: f64, cells: impl IntoIterator<Item = IVec3>) -> Self {
        Self {
            origin,
            cell_size: if cell_size > 0.0 { cell_size } else { 1e-6 },
            cells: cells.into_iter().collect(),
        }
    }

    /// Returns true if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// World-space box of one cell.
    #[must_use]
    pub fn cell_aabb(&self, cell: IVec3) -> Aabb {
        let min = self.origin + cell.as_dvec3() * self.cell_size;
        Aabb::from_corners(min, min + DVec3::splat(self.cell_size))
    }

    /// Smallest box covering every occupied cell, or `None` when empty.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb> {
        let mut cells = self.cells.iter();
        let first = self.cell_aabb(*cells.next()?);
        Some(cells.fold(first, |acc, cell| {
            let b = self.cell_aabb(*cell);
            Aabb {
                min: acc.min.min(b.min),
                max: acc.max.max(b.max),
            }
        }))
    }

    /// Casts a ray against every occupied cell and returns the distance to
    /// the nearest intersected one, or `None` if the ray threads through.
    ///
    /// Linear in the number of occupied cells.
    #[must_use]
    pub fn raycast(&self, ray: &Ray) -> Option<f64> {
        self.cells
            .iter()
            .filter_map(|cell| self.cell_aabb(*cell).intersect_ray(ray))
            .min_by(f64::total_cmp)
    }
}
