//! Sphere primitive.

use std::f64::consts::PI;

use glint_core::Material;
use glint_math::{solve_quadratic, Color, Point, Ray, Vec3, EPSILON};

use crate::shape::{Hit, Shape};

/// A sphere, optionally with an axis-angle rotation applied to its texture
/// mapping (the geometry itself never moves).
pub struct Sphere {
    center: Point,
    radius: f64,
    /// Rotation axis and angle in degrees for the texture mapping
    rotation: Option<(Vec3, f64)>,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Point, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            rotation: None,
            material,
        }
    }

    /// Create a sphere whose texture mapping is rotated about `axis` by
    /// `angle_degrees`.
    pub fn with_rotation(
        center: Point,
        radius: f64,
        axis: Vec3,
        angle_degrees: f64,
        material: Material,
    ) -> Self {
        Self {
            center,
            radius,
            rotation: Some((axis, angle_degrees)),
            material,
        }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Hit {
        // Sphere formula: ||x - center||^2 = r^2
        // Line formula:   x = ray.origin + t * ray.direction
        let l = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(l);
        let c = l.dot(l) - self.radius * self.radius;

        let Some((t0, t1)) = solve_quadratic(a, b, c) else {
            return Hit::NO_HIT;
        };

        // nearest root in front of the origin
        let mut t = t0;
        if t < EPSILON {
            t = t1;
            if t < EPSILON {
                return Hit::NO_HIT;
            }
        }

        let mut normal = (ray.at(t) - self.center).normalize();

        // keep the normal on the incident side (hits from inside flip it)
        if normal.dot(ray.direction) > 0.0 {
            normal = -normal;
        }

        Hit::new(t, normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    /// Spherical UV mapping of `point`, sampled from the material texture.
    fn texture_color_at(&self, point: Point, rotate: bool) -> Color {
        let mut n = (point - self.center).normalize();
        if rotate {
            n = self.rotate(n);
        }

        let u = (-n.y).atan2(-n.x) / (2.0 * PI) + 0.5;
        let v = 0.5 - n.z.asin() / PI;

        match &self.material.texture {
            Some(texture) => texture.color_at(u, v),
            None => self.material.color,
        }
    }

    fn is_rotated(&self) -> bool {
        self.rotation.is_some()
    }

    /// Rodrigues' rotation of `v` about the configured axis.
    fn rotate(&self, v: Vec3) -> Vec3 {
        let Some((axis, angle_degrees)) = self.rotation else {
            return v;
        };
        let axis = axis.normalize();
        let angle = angle_degrees.to_radians();

        let rotated = v * angle.cos()
            + axis.cross(v) * angle.sin()
            + axis * axis.dot(v) * (1.0 - angle.cos());
        rotated.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grey() -> Material {
        Material::flat(Color::new(0.5, 0.5, 0.5), 0.2, 0.8, 0.0, 1.0)
    }

    #[test]
    fn test_sphere_hit_head_on() {
        // Unit sphere at the origin, ray from (0,0,5) looking down -z
        let sphere = Sphere::new(Point::ZERO, 1.0, grey());
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let hit = sphere.intersect(&ray);
        assert!(hit.is_hit());
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!((hit.normal - Vec3::Z).length() < 1e-9);
    }

    #[test]
    fn test_sphere_miss_pointing_away() {
        let sphere = Sphere::new(Point::ZERO, 1.0, grey());
        let ray = Ray::new(Point::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));

        assert!(!sphere.intersect(&ray).is_hit());
    }

    #[test]
    fn test_sphere_hit_from_inside_flips_normal() {
        let sphere = Sphere::new(Point::ZERO, 2.0, grey());
        let ray = Ray::new(Point::ZERO, Vec3::X);

        let hit = sphere.intersect(&ray);
        assert!((hit.t - 2.0).abs() < 1e-9);
        // surface point is (2,0,0); the normal must face back toward the origin
        assert!(hit.normal.dot(ray.direction) < 0.0);
    }

    #[test]
    fn test_sphere_tangent_ray_is_stable() {
        // Ray grazing the unit sphere at x = 1
        let sphere = Sphere::new(Point::ZERO, 1.0, grey());
        let ray = Ray::new(Point::new(1.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        let first = sphere.intersect(&ray);
        for _ in 0..100 {
            let again = sphere.intersect(&ray);
            assert_eq!(first.is_hit(), again.is_hit());
            if first.is_hit() {
                assert_eq!(first.t, again.t);
            }
        }
    }

    #[test]
    fn test_rotation_round_trip() {
        let axis = Vec3::new(0.3, 1.0, -0.2);
        for angle in [0.0, 30.0, 90.0, 180.0, 275.5, 359.0] {
            let forward = Sphere::with_rotation(Point::ZERO, 1.0, axis, angle, grey());
            let backward = Sphere::with_rotation(Point::ZERO, 1.0, axis, -angle, grey());

            let v = Vec3::new(0.6, -0.3, 0.74).normalize();
            let round_trip = backward.rotate(forward.rotate(v));
            assert!(
                (round_trip - v).length() < 1e-9,
                "angle {angle}: {round_trip:?} != {v:?}"
            );
        }
    }

    #[test]
    fn test_rotate_without_rotation_is_identity() {
        let sphere = Sphere::new(Point::ZERO, 1.0, grey());
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(!sphere.is_rotated());
        assert_eq!(sphere.rotate(v), v);
    }

    #[test]
    fn test_texture_color_falls_back_to_flat_color() {
        let sphere = Sphere::new(Point::ZERO, 1.0, grey());
        let color = sphere.texture_color_at(Point::new(0.0, 0.0, 1.0), false);
        assert_eq!(color, Color::new(0.5, 0.5, 0.5));
    }
}
