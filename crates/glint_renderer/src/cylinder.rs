//! Capped cylinder primitive.

use glint_core::Material;
use glint_math::{Point, Ray, Vec3, EPSILON};

use crate::shape::{Hit, Shape};

/// A finite cylinder standing on `center`, aligned with the +y axis and
/// closed by two cap disks.
pub struct Cylinder {
    center: Point,
    radius: f64,
    height: f64,
    material: Material,
}

impl Cylinder {
    /// Create a new cylinder. `center` is the middle of the bottom cap.
    pub fn new(center: Point, radius: f64, height: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            height,
            material,
        }
    }

    /// Intersect one cap disk: the plane `y = center.y + cap_y`, limited
    /// to the cylinder radius. `normal` is the outward axial normal of
    /// that cap.
    fn intersect_cap(&self, ray: &Ray, cap_y: f64, normal: Vec3) -> Hit {
        if ray.direction.y.abs() < EPSILON {
            return Hit::NO_HIT;
        }

        let t = (self.center.y + cap_y - ray.origin.y) / ray.direction.y;
        if t < EPSILON {
            return Hit::NO_HIT;
        }

        let point = ray.at(t);
        let dx = point.x - self.center.x;
        let dz = point.z - self.center.z;
        if (dx * dx + dz * dz).sqrt() > self.radius {
            return Hit::NO_HIT;
        }

        Hit::new(t, normal)
    }
}

impl Shape for Cylinder {
    fn intersect(&self, ray: &Ray) -> Hit {
        // Lateral surface: a quadratic in the xz components around the axis
        let o = ray.origin - self.center;
        let d = ray.direction;

        let a = d.x * d.x + d.z * d.z;
        let b = o.x * d.x + o.z * d.z; // half the usual b
        let c = o.x * o.x + o.z * o.z - self.radius * self.radius;

        let discriminant = b * b - a * c;
        if discriminant < EPSILON {
            return Hit::NO_HIT;
        }

        let t0 = (-b - discriminant.sqrt()) / a;
        let t1 = (-b + discriminant.sqrt()) / a;
        let t = t0.min(t1);
        if t < EPSILON {
            return Hit::NO_HIT;
        }

        // Height of the lateral hit along the axis
        let y = o.y + t * d.y;
        if y < -EPSILON || y > self.height + EPSILON {
            // Outside the lateral span: the ray can still enter through a
            // cap. Nearest valid cap wins; the sentinel loses every
            // comparison, so two misses stay a miss.
            let bottom = self.intersect_cap(ray, 0.0, Vec3::new(0.0, -1.0, 0.0));
            let top = self.intersect_cap(ray, self.height, Vec3::new(0.0, 1.0, 0.0));
            return if bottom.t < top.t { bottom } else { top };
        }

        let point = ray.at(t);
        let axis_point = Point::new(self.center.x, point.y, self.center.z);
        Hit::new(t, (point - axis_point).normalize())
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
