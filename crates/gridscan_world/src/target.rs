//! Look-at targeting.
//!
//! Resolves the grid an operator is aiming at by casting a ray along their
//! facing: a cheap bounding-box rejection first, then a fine raycast
//! against each surviving candidate's occupied cells, keeping the nearest
//! hit. The winning grid id is expanded to its group by the caller.

use glam::DVec3;
use gridscan_foundation::GridId;
use gridscan_spatial::Ray;

use crate::snapshot::WorldSnapshot;

/// Default targeting reach, in world units.
pub const DEFAULT_LOOK_RANGE: f64 = 5_000.0;

/// Forward offset applied to the ray origin so the viewer's own volume
/// cannot register a hit.
const FORWARD_EPSILON: f64 = 0.5;

/// Returns the grid owning the nearest cell intersected by a ray from
/// `origin` along `forward`, or `None` when nothing is hit.
///
/// Candidates lacking physics presence are skipped. Distance ties go to
/// the first-encountered candidate in snapshot iteration order. A
/// non-positive `max_range` or degenerate `forward` resolves to `None`.
#[must_use]
pub fn resolve_look_at(
    world: &WorldSnapshot,
    origin: DVec3,
    forward: DVec3,
    max_range: f64,
) -> Option<GridId> {
    let ray = Ray::new(origin, forward, max_range)?.nudged(FORWARD_EPSILON);

    let mut closest: Option<(f64, GridId)> = None;
    for grid in world.iter() {
        if !grid.has_physics {
            continue;
        }

        // Coarse rejection: skip grids whose bounding box the ray misses.
        if grid.aabb.intersect_ray(&ray).is_none() {
            continue;
        }

        let Some(distance) = grid.cells.raycast(&ray) else {
            continue;
        };

        match closest {
            Some((best, _)) if distance >= best => {}
            _ => closest = Some((distance, grid.id)),
        }
    }

    closest.map(|(_, id)| id)
}
