//! Look-at and selector targeting tests
//!
//! Covers resolving a group from the operator's crosshair and from a
//! name-or-id selector.

use glam::{DVec3, IVec3};
use gridscan::foundation::{ErrorKind, GridId};
use gridscan::runtime::{find_group_by_name_or_id, find_look_at_group, Viewpoint};
use gridscan::spatial::{Aabb, CellGrid};
use gridscan::world::{GridSnapshot, GroupMap, WorldSnapshot};

fn id(raw: u64) -> GridId {
    GridId::new(raw)
}

fn block_at(raw: u64, name: &str, x: f64) -> GridSnapshot {
    let min = DVec3::new(x, -0.5, -0.5);
    GridSnapshot::new(id(raw), name).with_geometry(
        Aabb::from_corners(min, min + DVec3::ONE),
        CellGrid::new(min, 1.0, [IVec3::ZERO]),
    )
}

fn looking_along_x() -> Viewpoint {
    Viewpoint {
        position: DVec3::ZERO,
        forward: DVec3::X,
    }
}

// =============================================================================
// Crosshair Targeting
// =============================================================================

#[test]
fn crosshair_expands_the_hit_to_its_group() {
    // Aiming at the mast selects the whole station.
    let world = WorldSnapshot::new(
        [
            block_at(1, "Relay Mast", 30.0).with_blocks(60),
            block_at(2, "Relay Core", 200.0).with_blocks(1_200),
        ],
        [(id(1), id(2))],
    );
    let groups = GroupMap::build(&world);

    let group = find_look_at_group(&world, &groups, &looking_along_x()).unwrap();
    assert_eq!(group.key, id(2));
    assert_eq!(group.members, vec![id(1), id(2)]);
}

#[test]
fn nearer_obstruction_wins_the_crosshair() {
    let world = WorldSnapshot::new(
        [block_at(1, "Far", 60.0), block_at(2, "Near", 25.0)],
        [],
    );
    let groups = GroupMap::build(&world);

    let group = find_look_at_group(&world, &groups, &looking_along_x()).unwrap();
    assert_eq!(group.key, id(2));
}

#[test]
fn empty_crosshair_reports_no_candidates() {
    let world = WorldSnapshot::new([block_at(1, "Aside", 30.0)], []);
    let groups = GroupMap::build(&world);
    let viewpoint = Viewpoint {
        position: DVec3::ZERO,
        forward: DVec3::Z,
    };

    let err = find_look_at_group(&world, &groups, &viewpoint).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AmbiguousTarget { found: 0, .. }));
}

#[test]
fn hit_on_a_despawning_grid_is_stale() {
    // Still physically present, so the ray connects, but grouping has
    // already dropped it.
    let world = WorldSnapshot::new([block_at(1, "Doomed", 30.0).marked_for_removal()], []);
    let groups = GroupMap::build(&world);

    let err = find_look_at_group(&world, &groups, &looking_along_x()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StaleReference(grid) if grid == id(1)));
}

// =============================================================================
// Name-or-Id Selectors
// =============================================================================

#[test]
fn selector_accepts_any_member_name() {
    let world = WorldSnapshot::new(
        [
            block_at(1, "Relay Mast", 30.0).with_blocks(60),
            block_at(2, "Relay Core", 200.0).with_blocks(1_200),
        ],
        [(id(1), id(2))],
    );
    let groups = GroupMap::build(&world);

    let by_mast = find_group_by_name_or_id(&world, &groups, "relay mast").unwrap();
    let by_core = find_group_by_name_or_id(&world, &groups, "Relay Core").unwrap();
    assert_eq!(by_mast, by_core);
}

#[test]
fn selector_accepts_a_rendered_id() {
    let world = WorldSnapshot::new([block_at(99, "Whatever", 10.0)], []);
    let groups = GroupMap::build(&world);

    let group = find_group_by_name_or_id(&world, &groups, "99").unwrap();
    assert_eq!(group.key, id(99));
}

#[test]
fn selector_shared_by_two_groups_is_ambiguous() {
    let world = WorldSnapshot::new(
        [block_at(1, "Probe", 10.0), block_at(2, "Probe", 50.0)],
        [],
    );
    let groups = GroupMap::build(&world);

    let err = find_group_by_name_or_id(&world, &groups, "Probe").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::AmbiguousTarget { found: 2, .. }));
}

#[test]
fn selector_unique_within_one_group_resolves() {
    // Both members carry the same name, but they are one group, so the
    // selector is still unambiguous.
    let world = WorldSnapshot::new(
        [block_at(1, "Twin", 10.0), block_at(2, "Twin", 50.0)],
        [(id(1), id(2))],
    );
    let groups = GroupMap::build(&world);

    let group = find_group_by_name_or_id(&world, &groups, "Twin").unwrap();
    assert_eq!(group.members, vec![id(1), id(2)]);
}
