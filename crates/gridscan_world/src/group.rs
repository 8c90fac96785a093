//! Connectivity grouping.
//!
//! Grids joined by mechanical links travel together, so they are selected
//! together. This module partitions a snapshot into maximal connected
//! components over the link graph. Groups are rebuilt from scratch for
//! every query; nothing here persists.

use std::collections::{HashMap, HashSet, VecDeque};

use gridscan_foundation::GridId;

use crate::snapshot::WorldSnapshot;

/// Minimal view of the mechanical-link graph.
///
/// Grouping only ever asks one question of the world: which grids is this
/// grid directly linked to? Implementing this on a synthetic structure
/// makes the algorithm testable without a simulation.
pub trait LinkNeighbors {
    /// Grids directly linked to `id`. Order determines traversal order.
    fn neighbors(&self, id: GridId) -> &[GridId];
}

/// Discovery-ordered connected components over an undirected link graph.
///
/// `seeds` fixes both which grids may appear and the discovery order;
/// `surviving` filters out grids that must not join any component (they
/// neither form singletons nor bridge their neighbors). Components are
/// explored breadth-first, so members are ordered by link distance from
/// the seed.
pub fn connected_components<N: LinkNeighbors + ?Sized>(
    seeds: impl IntoIterator<Item = GridId>,
    graph: &N,
    surviving: impl Fn(GridId) -> bool,
) -> Vec<Vec<GridId>> {
    let mut components = Vec::new();
    let mut visited: HashSet<GridId> = HashSet::new();

    for seed in seeds {
        if visited.contains(&seed) || !surviving(seed) {
            continue;
        }

        let mut members = Vec::new();
        let mut queue = VecDeque::from([seed]);
        visited.insert(seed);

        while let Some(current) = queue.pop_front() {
            members.push(current);
            for &next in graph.neighbors(current) {
                if !visited.contains(&next) && surviving(next) {
                    visited.insert(next);
                    queue.push_back(next);
                }
            }
        }

        components.push(members);
    }

    components
}

/// One maximal set of mechanically-connected grids.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GridGroup {
    /// Canonical key: the id of the member with the most blocks.
    pub key: GridId,
    /// Member ids in discovery order. Never empty.
    pub members: Vec<GridId>,
}

impl GridGroup {
    /// Number of member grids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a group forms only around at least one grid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when `id` belongs to this group.
    #[must_use]
    pub fn contains(&self, id: GridId) -> bool {
        self.members.contains(&id)
    }
}

/// Partition of a snapshot's surviving grids into groups.
///
/// Owned by a single query call. Group order is discovery order; member
/// order within a group is breadth-first from the first-encountered member.
#[derive(Clone, Debug, Default)]
pub struct GroupMap {
    groups: Vec<GridGroup>,
    by_member: HashMap<GridId, usize>,
}

impl GroupMap {
    /// Partitions the snapshot's surviving grids into connected groups.
    ///
    /// Linear in grids plus links. Grids without physics presence or
    /// marked for removal produce no group and join no group.
    #[must_use]
    pub fn build(world: &WorldSnapshot) -> Self {
        let components = connected_components(world.surviving_ids(), world, |id| {
            world.is_surviving(id)
        });

        let mut groups = Vec::with_capacity(components.len());
        let mut by_member = HashMap::new();

        for members in components {
            let key = Self::representative(world, &members);
            let index = groups.len();
            for &member in &members {
                by_member.insert(member, index);
            }
            groups.push(GridGroup { key, members });
        }

        Self { groups, by_member }
    }

    /// The member with the greatest block count; ties go to the member
    /// encountered first.
    fn representative(world: &WorldSnapshot, members: &[GridId]) -> GridId {
        let mut best = members[0];
        let mut best_blocks = world.grid(best).map_or(0, |g| g.block_count);
        for &member in &members[1..] {
            let blocks = world.grid(member).map_or(0, |g| g.block_count);
            if blocks > best_blocks {
                best = member;
                best_blocks = blocks;
            }
        }
        best
    }

    /// Groups in discovery order.
    #[must_use]
    pub fn groups(&self) -> &[GridGroup] {
        &self.groups
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when no grid survived grouping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group containing `id`, if it survived grouping.
    #[must_use]
    pub fn group_of(&self, id: GridId) -> Option<&GridGroup> {
        self.by_member.get(&id).map(|&i| &self.groups[i])
    }

    /// The group keyed by `key`, if any.
    #[must_use]
    pub fn group_by_key(&self, key: GridId) -> Option<&GridGroup> {
        self.groups.iter().find(|g| g.key == key)
    }
}
