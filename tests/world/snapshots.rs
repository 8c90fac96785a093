//! World snapshot integration tests

use gridscan_foundation::GridId;
use gridscan_world::{GridSnapshot, LinkNeighbors, WorldSnapshot};

fn id(raw: u64) -> GridId {
    GridId::new(raw)
}

#[test]
fn snapshot_preserves_simulation_iteration_order() {
    let world = WorldSnapshot::new(
        [
            GridSnapshot::new(id(9), "Last spawned"),
            GridSnapshot::new(id(3), "Mid"),
            GridSnapshot::new(id(7), "First spawned"),
        ],
        [],
    );
    let order: Vec<_> = world.iter().map(|g| g.id).collect();
    assert_eq!(order, vec![id(9), id(3), id(7)]);
}

#[test]
fn snapshot_tolerates_malformed_link_lists() {
    // Self-links, duplicates, and dangling ids all at once.
    let world = WorldSnapshot::new(
        [GridSnapshot::new(id(1), "A"), GridSnapshot::new(id(2), "B")],
        [
            (id(1), id(1)),
            (id(1), id(2)),
            (id(2), id(1)),
            (id(1), id(2)),
            (id(1), id(404)),
        ],
    );
    assert_eq!(world.neighbors(id(1)), &[id(2)]);
    assert_eq!(world.neighbors(id(2)), &[id(1)]);
}

#[test]
fn snapshot_lookup_reflects_grid_properties() {
    let world = WorldSnapshot::new(
        [GridSnapshot::new(id(5), "Relay").with_blocks(321).with_power(true)],
        [],
    );
    let grid = world.grid(id(5)).unwrap();
    assert_eq!(grid.block_count, 321);
    assert!(grid.powered);
    assert!(world.grid(id(6)).is_none());
}
