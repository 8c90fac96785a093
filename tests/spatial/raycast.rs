//! Raycasting integration tests
//!
//! Exercises the coarse box test and the fine cell raycast together, the
//! way look-at targeting uses them.

use glam::{DVec3, IVec3};
use gridscan_spatial::{Aabb, CellGrid, Ray};

fn ray(origin: DVec3, direction: DVec3) -> Ray {
    Ray::new(origin, direction, 10_000.0).unwrap()
}

// =============================================================================
// Coarse Box Test
// =============================================================================

#[test]
fn box_distance_agrees_with_entry_face() {
    let aabb = Aabb::from_corners(DVec3::new(10.0, -1.0, -1.0), DVec3::new(12.0, 1.0, 1.0));
    let dist = aabb.intersect_ray(&ray(DVec3::ZERO, DVec3::X)).unwrap();
    assert!((dist - 10.0).abs() < 1e-9);
}

#[test]
fn box_behind_the_origin_is_not_hit() {
    let aabb = Aabb::from_center_half_extents(DVec3::new(-10.0, 0.0, 0.0), DVec3::ONE);
    assert!(aabb.intersect_ray(&ray(DVec3::ZERO, DVec3::X)).is_none());
}

#[test]
fn origin_inside_the_box_hits_at_zero() {
    let aabb = Aabb::from_center_half_extents(DVec3::ZERO, DVec3::splat(5.0));
    let dist = aabb.intersect_ray(&ray(DVec3::ZERO, DVec3::X)).unwrap();
    assert_eq!(dist, 0.0);
}

#[test]
fn range_caps_the_coarse_test() {
    let aabb = Aabb::from_center_half_extents(DVec3::new(100.0, 0.0, 0.0), DVec3::ONE);
    let short = Ray::new(DVec3::ZERO, DVec3::X, 50.0).unwrap();
    assert!(aabb.intersect_ray(&short).is_none());
}

// =============================================================================
// Coarse-then-Fine Agreement
// =============================================================================

#[test]
fn cell_hit_is_never_nearer_than_the_bounding_box() {
    // An L-shaped structure: the bounding box is hit well before the
    // nearest occupied cell along this diagonal-ish ray.
    let cells = CellGrid::new(
        DVec3::new(10.0, 0.0, 0.0),
        1.0,
        [IVec3::new(0, 0, 0), IVec3::new(0, 3, 0), IVec3::new(3, 3, 0)],
    );
    let bounds = cells.bounds().unwrap();
    let probe = ray(DVec3::new(0.0, 3.5, 0.5), DVec3::X);

    let coarse = bounds.intersect_ray(&probe).unwrap();
    let fine = cells.raycast(&probe).unwrap();
    assert!(coarse <= fine);
    assert!((fine - 10.0).abs() < 1e-9);
}

#[test]
fn ray_through_an_empty_corner_misses_the_cells() {
    // Box test passes, cell test correctly reports a miss.
    let cells = CellGrid::new(
        DVec3::new(10.0, 0.0, 0.0),
        1.0,
        [IVec3::new(0, 0, 0), IVec3::new(3, 3, 0)],
    );
    let bounds = cells.bounds().unwrap();
    let probe = ray(DVec3::new(0.0, 1.5, 0.5), DVec3::X);

    assert!(bounds.intersect_ray(&probe).is_some());
    assert!(cells.raycast(&probe).is_none());
}

#[test]
fn nudged_ray_skips_volume_at_the_viewer() {
    // A cell wrapped around the origin is hit at distance zero by the raw
    // ray but not once the origin is nudged past it.
    let cells = CellGrid::new(DVec3::splat(-0.5), 1.0, [IVec3::ZERO]);
    let raw = ray(DVec3::ZERO, DVec3::X);
    assert_eq!(cells.raycast(&raw), Some(0.0));
    assert!(cells.raycast(&raw.nudged(1.0)).is_none());
}

#[test]
fn scaled_cells_hit_at_scaled_distances() {
    // 2.5-unit cells: cell (2,0,0) spans x in [5, 7.5).
    let cells = CellGrid::new(DVec3::new(0.0, -1.25, -1.25), 2.5, [IVec3::new(2, 0, 0)]);
    let dist = cells.raycast(&ray(DVec3::new(-5.0, 0.0, 0.0), DVec3::X)).unwrap();
    assert!((dist - 10.0).abs() < 1e-9);
}
