//! Triangle primitive.
//!
//! Uses the Moller-Trumbore algorithm for ray-triangle intersection.

use glint_core::Material;
use glint_math::{Point, Ray, Vec3, EPSILON};

use crate::shape::{Hit, Shape};

/// A triangle with a precomputed face normal.
pub struct Triangle {
    v0: Point,
    v1: Point,
    v2: Point,
    /// Face normal (unit length)
    normal: Vec3,
    material: Material,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Point, v1: Point, v2: Point, material: Material) -> Self {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let normal = edge2.cross(edge1).normalize();

        Self {
            v0,
            v1,
            v2,
            normal,
            material,
        }
    }
}

impl Shape for Triangle {
    /// Moller-Trumbore ray-triangle intersection.
    fn intersect(&self, ray: &Ray) -> Hit {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // Ray is parallel to the triangle plane
        if a.abs() < EPSILON {
            return Hit::NO_HIT;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return Hit::NO_HIT;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return Hit::NO_HIT;
        }

        let t = f * edge2.dot(q);

        // line intersection behind the ray origin
        if t < EPSILON {
            return Hit::NO_HIT;
        }

        Hit::new(t, self.normal)
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
