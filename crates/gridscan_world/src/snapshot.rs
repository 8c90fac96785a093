//! Call-scoped world snapshots.
//!
//! A [`WorldSnapshot`] copies the grid list and mechanical-link edges out of
//! the live simulation before any grouping or matching happens, so one query
//! sees one consistent state. Snapshots are discarded when the query ends.

use std::collections::HashMap;

use gridscan_foundation::GridId;

use crate::grid::GridSnapshot;
use crate::group::LinkNeighbors;

/// The set of grids and mechanical links observed for one query.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    /// Grids in simulation iteration order.
    grids: Vec<GridSnapshot>,
    /// Grid id to index into `grids`.
    index: HashMap<GridId, usize>,
    /// Adjacency over mechanical links, symmetric.
    links: HashMap<GridId, Vec<GridId>>,
}

impl WorldSnapshot {
    /// Builds a snapshot from grids and an undirected link edge list.
    ///
    /// Malformed edges are tolerated rather than rejected: self-links,
    /// duplicate links, and links naming grids absent from the snapshot
    /// are all ignored. When two grids share an id, the first occurrence
    /// wins and later ones are dropped.
    #[must_use]
    pub fn new(
        grids: impl IntoIterator<Item = GridSnapshot>,
        link_edges: impl IntoIterator<Item = (GridId, GridId)>,
    ) -> Self {
        let mut stored: Vec<GridSnapshot> = Vec::new();
        let mut index = HashMap::new();
        for grid in grids {
            if index.contains_key(&grid.id) {
                continue;
            }
            index.insert(grid.id, stored.len());
            stored.push(grid);
        }

        let mut links: HashMap<GridId, Vec<GridId>> = HashMap::new();
        for (a, b) in link_edges {
            if a == b || !index.contains_key(&a) || !index.contains_key(&b) {
                continue;
            }
            let forward = links.entry(a).or_default();
            if !forward.contains(&b) {
                forward.push(b);
            }
            let reverse = links.entry(b).or_default();
            if !reverse.contains(&a) {
                reverse.push(a);
            }
        }

        Self {
            grids: stored,
            index,
            links,
        }
    }

    /// Looks up a grid by id.
    #[must_use]
    pub fn grid(&self, id: GridId) -> Option<&GridSnapshot> {
        self.index.get(&id).map(|&i| &self.grids[i])
    }

    /// Iterates grids in simulation iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &GridSnapshot> {
        self.grids.iter()
    }

    /// Number of grids in the snapshot, surviving or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// True when the snapshot holds no grids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Ids of grids that participate in grouping, in iteration order.
    pub fn surviving_ids(&self) -> impl Iterator<Item = GridId> + '_ {
        self.grids
            .iter()
            .filter(|g| g.is_surviving())
            .map(|g| g.id)
    }

    /// True when the grid exists and participates in grouping.
    #[must_use]
    pub fn is_surviving(&self, id: GridId) -> bool {
        self.grid(id).is_some_and(GridSnapshot::is_surviving)
    }
}

impl LinkNeighbors for WorldSnapshot {
    fn neighbors(&self, id: GridId) -> &[GridId] {
        self.links.get(&id).map_or(&[], Vec::as_slice)
    }
}
