//! Infinite plane primitive.

use glint_core::Material;
use glint_math::{Point, Ray, Vec3, EPSILON};

use crate::shape::{Hit, Shape};

/// An infinite plane through `point` with the given normal.
pub struct Plane {
    point: Point,
    normal: Vec3,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here.
    pub fn new(point: Point, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
        }
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Hit {
        let denom = ray.direction.dot(self.normal);

        // parallel ray: no intersection (or infinitely many, in the plane)
        if denom.abs() < EPSILON {
            return Hit::NO_HIT;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t < EPSILON {
            return Hit::NO_HIT;
        }

        // The plane's own normal, regardless of which side the ray came
        // from; callers see the back face unlit rather than double-lit.
        Hit::new(t, self.normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Color;

    fn grey() -> Material {
        Material::flat(Color::new(0.5, 0.5, 0.5), 0.2, 0.8, 0.0, 1.0)
    }

    #[test]
    fn test_plane_hit_straight_down() {
        // Ground plane y = 0, ray falling from (0,5,0)
        let plane = Plane::new(Point::ZERO, Vec3::Y, grey());
        let ray = Ray::new(Point::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let hit = plane.intersect(&ray);
        assert!(hit.is_hit());
        assert!((hit.t - 5.0).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = Plane::new(Point::ZERO, Vec3::Y, grey());
        let ray = Ray::new(Point::new(0.0, 1.0, 0.0), Vec3::X);

        assert!(!plane.intersect(&ray).is_hit());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = Plane::new(Point::ZERO, Vec3::Y, grey());
        let ray = Ray::new(Point::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        assert!(!plane.intersect(&ray).is_hit());
    }

    #[test]
    fn test_plane_normal_is_not_view_dependent() {
        let plane = Plane::new(Point::ZERO, Vec3::Y, grey());
        let from_above = Ray::new(Point::new(3.0, 5.0, 1.0), Vec3::new(0.0, -1.0, 0.0));
        let slanted = Ray::new(
            Point::new(-4.0, 2.0, 0.0),
            Vec3::new(1.0, -1.0, 0.5).normalize(),
        );

        assert_eq!(plane.intersect(&from_above).normal, Vec3::Y);
        assert_eq!(plane.intersect(&slanted).normal, Vec3::Y);
    }
}
