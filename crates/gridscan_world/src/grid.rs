//! Per-grid snapshot data.
//!
//! A [`GridSnapshot`] is what the query engine sees of one grid: the scalar
//! properties conditions read, plus the geometry the target resolver needs.
//! Snapshots are produced by the host from live simulation state and are
//! valid only for the duration of one query.

use std::collections::HashSet;

use glam::DVec3;
use gridscan_foundation::GridId;
use gridscan_spatial::{Aabb, CellGrid};

/// Construction scale of a grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SizeClass {
    /// Large-block construction.
    Large,
    /// Small-block construction.
    Small,
}

/// Who majority-owns a grid.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Ownership {
    /// No blocks claim an owner.
    Nobody,
    /// Majority owner is a player identity.
    Player(u64),
    /// Majority owner is a non-player identity.
    Npc(u64),
}

impl Ownership {
    /// Returns the owning identity, if any.
    #[must_use]
    pub const fn identity(self) -> Option<u64> {
        match self {
            Self::Nobody => None,
            Self::Player(id) | Self::Npc(id) => Some(id),
        }
    }
}

/// One grid as observed at query time.
#[derive(Clone, Debug)]
pub struct GridSnapshot {
    /// Stable identifier assigned by the simulation.
    pub id: GridId,
    /// Display name; may be empty.
    pub name: String,
    /// Whether the grid is physically simulated. Grids without physics are
    /// excluded from grouping and targeting.
    pub has_physics: bool,
    /// Whether the simulation has queued the grid for removal.
    pub marked_for_removal: bool,
    /// Number of blocks making up the grid.
    pub block_count: usize,
    /// Performance cost units of the grid.
    pub pcu: u32,
    /// Construction scale.
    pub size_class: SizeClass,
    /// Whether the grid is anchored (a station rather than a ship).
    pub is_static: bool,
    /// Majority ownership.
    pub owner: Ownership,
    /// Display name of the majority owner, when known.
    pub owner_name: Option<String>,
    /// Whether any power source is producing.
    pub powered: bool,
    /// Number of occupied control seats.
    pub pilot_count: u32,
    /// Block type ids present on the grid.
    pub block_types: HashSet<String>,
    /// Block subtype ids present on the grid.
    pub block_subtypes: HashSet<String>,
    /// World position of the grid's center.
    pub position: DVec3,
    /// Coarse world-space bounding box.
    pub aabb: Aabb,
    /// Occupied cells for fine raycasting.
    pub cells: CellGrid,
}

impl GridSnapshot {
    /// Creates a minimal snapshot: one block, physics present, unowned,
    /// unpowered, unpiloted, a unit bounding box at the origin, and a
    /// single occupied cell filling it.
    #[must_use]
    pub fn new(id: GridId, name: impl Into<String>) -> Self {
        let position = DVec3::ZERO;
        Self {
            id,
            name: name.into(),
            has_physics: true,
            marked_for_removal: false,
            block_count: 1,
            pcu: 0,
            size_class: SizeClass::Large,
            is_static: false,
            owner: Ownership::Nobody,
            owner_name: None,
            powered: false,
            pilot_count: 0,
            block_types: HashSet::new(),
            block_subtypes: HashSet::new(),
            position,
            aabb: Aabb::from_center_half_extents(position, DVec3::splat(0.5)),
            cells: CellGrid::new(position - DVec3::splat(0.5), 1.0, [glam::IVec3::ZERO]),
        }
    }

    /// Sets the block count.
    #[must_use]
    pub fn with_blocks(mut self, count: usize) -> Self {
        self.block_count = count;
        self
    }

    /// Sets the PCU total.
    #[must_use]
    pub fn with_pcu(mut self, pcu: u32) -> Self {
        self.pcu = pcu;
        self
    }

    /// Sets the physics-presence flag.
    #[must_use]
    pub fn with_physics(mut self, has_physics: bool) -> Self {
        self.has_physics = has_physics;
        self
    }

    /// Marks the grid for removal.
    #[must_use]
    pub fn marked_for_removal(mut self) -> Self {
        self.marked_for_removal = true;
        self
    }

    /// Sets the construction scale.
    #[must_use]
    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.size_class = size_class;
        self
    }

    /// Sets whether the grid is anchored.
    #[must_use]
    pub fn with_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Sets the majority owner.
    #[must_use]
    pub fn with_owner(mut self, owner: Ownership) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the majority owner's display name.
    #[must_use]
    pub fn with_owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    /// Sets the powered flag.
    #[must_use]
    pub fn with_power(mut self, powered: bool) -> Self {
        self.powered = powered;
        self
    }

    /// Sets the occupied control seat count.
    #[must_use]
    pub fn with_pilots(mut self, pilots: u32) -> Self {
        self.pilot_count = pilots;
        self
    }

    /// Adds a block type id.
    #[must_use]
    pub fn with_block_type(mut self, block_type: impl Into<String>) -> Self {
        self.block_types.insert(block_type.into());
        self
    }

    /// Adds a block subtype id.
    #[must_use]
    pub fn with_block_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.block_subtypes.insert(subtype.into());
        self
    }

    /// Moves the grid: position, bounding box, and cells shift together.
    #[must_use]
    pub fn at_position(mut self, position: DVec3) -> Self {
        let delta = position - self.position;
        self.position = position;
        self.aabb = Aabb {
            min: self.aabb.min + delta,
            max: self.aabb.max + delta,
        };
        self.cells.origin += delta;
        self
    }

    /// Replaces the geometry wholesale.
    #[must_use]
    pub fn with_geometry(mut self, aabb: Aabb, cells: CellGrid) -> Self {
        self.position = aabb.center();
        self.aabb = aabb;
        self.cells = cells;
        self
    }

    /// True when the grid participates in grouping: physically simulated
    /// and not queued for removal.
    #[must_use]
    pub fn is_surviving(&self) -> bool {
        self.has_physics && !self.marked_for_removal
    }
}
