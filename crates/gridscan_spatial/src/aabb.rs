//! Axis-aligned bounding boxes.

use glam::DVec3;

use crate::ray::Ray;

/// An axis-aligned box described by its minimum and maximum corners.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Most negative corner.
    pub min: DVec3,
    /// Most positive corner.
    pub max: DVec3,
}

impl Aabb {
    /// Creates a box from two corners, swapping components as needed so
    /// `min <= max` holds on every axis.
    #[must_use]
    pub fn from_corners(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from a center point and half extents.
    #[must_use]
    pub fn from_center_half_extents(center: DVec3, half_extents: DVec3) -> Self {
        let half_extents = half_extents.abs();
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns true if `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(&self, point: DVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Slab-test intersection against a bounded ray.
    ///
    /// Returns the distance from the ray origin to the entry point, or
    /// `Some(0.0)` when the origin starts inside the box. Returns `None`
    /// when the ray misses, or the box lies entirely behind the origin or
    /// beyond the ray's maximum distance.
    #[must_use]
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f64> {
        let mut t_enter = 0.0_f64;
        let mut t_exit = ray.max_distance;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let dir = ray.direction[axis];
            let (min, max) = (self.min[axis], self.max[axis]);

            if dir.abs() < f64::EPSILON {
                // Ray is parallel to this slab; it must start inside it.
                if origin < min || origin > max {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / dir;
            let mut t0 = (min - origin) * inv;
            let mut t1 = (max - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}
