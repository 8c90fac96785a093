//! Bounded rays for look-at targeting.

use glam::DVec3;

/// A ray with an origin, a direction, and a maximum travel distance.
///
/// The direction is normalized on construction so that intersection
/// parameters are Euclidean distances from the origin.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: DVec3,
    /// Unit direction of travel.
    pub direction: DVec3,
    /// Maximum distance the ray extends.
    pub max_distance: f64,
}

impl Ray {
    /// Creates a ray from an origin, a (not necessarily unit) direction,
    /// and a maximum distance.
    ///
    /// Returns `None` when the direction has no length or the distance is
    /// not positive, both of which make targeting meaningless.
    #[must_use]
    pub fn new(origin: DVec3, direction: DVec3, max_distance: f64) -> Option<Self> {
        let direction = direction.try_normalize()?;
        if max_distance <= 0.0 || !max_distance.is_finite() {
            return None;
        }
        Some(Self {
            origin,
            direction,
            max_distance,
        })
    }

    /// Returns the point at `distance` along the ray.
    #[must_use]
    pub fn at(&self, distance: f64) -> DVec3 {
        self.origin + self.direction * distance
    }

    /// Returns a ray with the origin nudged forward by `epsilon`.
    ///
    /// Targeting rays start slightly ahead of the viewer so the viewer's
    /// own volume does not register a hit. The maximum distance is kept,
    /// extending the reach by the same epsilon.
    #[must_use]
    pub fn nudged(&self, epsilon: f64) -> Self {
        Self {
            origin: self.origin + self.direction * epsilon,
            direction: self.direction,
            max_distance: self.max_distance,
        }
    }
}
