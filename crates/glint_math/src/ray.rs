use crate::{Point, Vec3};

/// A ray in 3D space with origin and unit-length direction.
///
/// Rays are immutable once constructed; every primary, shadow, or reflected
/// cast builds a fresh one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray. The direction is expected to be normalized by the
    /// caller; intersection math relies on it.
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }
}
