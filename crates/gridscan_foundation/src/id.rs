//! Grid identifiers.

use std::fmt;

/// Stable identifier for a grid in the simulated world.
///
/// Identifiers are assigned by the external simulation and are unique for
/// the lifetime of a grid. The query engine only ever compares and displays
/// them; it never allocates one.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GridId(pub u64);

impl GridId {
    /// Creates a grid id from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridId({})", self.0)
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
