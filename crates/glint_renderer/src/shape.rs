//! Shape trait and ray-intersection result.

use glint_core::Material;
use glint_math::{Color, Point, Ray, Vec3};

/// Result of a ray-shape intersection query.
///
/// `t == +infinity` is the no-hit sentinel; the normal is only meaningful
/// for a finite `t`. By convention the normal points toward the side the
/// ray came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Ray parameter of the intersection
    pub t: f64,
    /// Surface normal at the intersection (unit length)
    pub normal: Vec3,
}

impl Hit {
    /// The "no intersection" sentinel.
    pub const NO_HIT: Hit = Hit {
        t: f64::INFINITY,
        normal: Vec3::ZERO,
    };

    /// Create a hit at parameter `t` with surface normal `normal`.
    pub fn new(t: f64, normal: Vec3) -> Self {
        Self { t, normal }
    }

    /// Whether this is an actual intersection rather than the sentinel.
    pub fn is_hit(&self) -> bool {
        self.t.is_finite()
    }
}

/// A renderable object: intersectable geometry that owns its material.
pub trait Shape: Send + Sync {
    /// Nearest strictly-positive intersection of `ray` with this shape,
    /// or [`Hit::NO_HIT`].
    fn intersect(&self, ray: &Ray) -> Hit;

    /// The material of this shape.
    fn material(&self) -> &Material;

    /// Sample the surface texture at `point`, optionally applying the
    /// configured texture rotation. Only meaningful for textured materials;
    /// shapes without a texture mapping return black.
    fn texture_color_at(&self, _point: Point, _rotate: bool) -> Color {
        Color::ZERO
    }

    /// Whether a texture-orientation rotation is configured.
    fn is_rotated(&self) -> bool {
        false
    }

    /// Apply the configured texture rotation to a vector. Identity for
    /// shapes without one.
    fn rotate(&self, v: Vec3) -> Vec3 {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_hit_sentinel() {
        let none = Hit::NO_HIT;
        assert!(!none.is_hit());
        assert_eq!(none.t, f64::INFINITY);

        // the sentinel never wins a nearest-hit comparison
        let hit = Hit::new(4.0, Vec3::Z);
        assert!(hit.is_hit());
        assert!(hit.t < none.t);
        assert!(!(none.t < none.t));
    }
}
