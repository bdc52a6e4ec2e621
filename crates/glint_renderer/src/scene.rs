//! Scene ownership and the recursive trace loop.
//!
//! A `Scene` owns the object list, the lights, the eye point and the
//! global render settings. `trace` computes the color seen along a single
//! ray: Phong shading per light, shadow-tested when enabled, plus a
//! recursive specular reflection bounded by the recursion depth.

use glint_core::{Light, SceneDescription, ShapeNode};
use glint_math::{Color, Point, Ray, EPSILON};

use crate::cylinder::Cylinder;
use crate::plane::Plane;
use crate::shape::{Hit, Shape};
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// A renderable scene. Immutable during a render pass.
pub struct Scene {
    objects: Vec<Box<dyn Shape>>,
    lights: Vec<Light>,
    eye: Point,
    shadows: bool,
    sampling_factor: u32,
    recursion_depth: u32,
}

impl Scene {
    /// Create an empty scene viewed from `eye`, with shadows off, no
    /// supersampling and no reflection recursion.
    pub fn new(eye: Point) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            eye,
            shadows: false,
            sampling_factor: 1,
            recursion_depth: 0,
        }
    }

    /// Build a scene from a loaded description.
    pub fn from_description(description: SceneDescription) -> Self {
        let mut scene = Scene::new(description.eye);
        scene.shadows = description.shadows;
        scene.sampling_factor = description.sampling_factor.max(1);
        scene.recursion_depth = description.recursion_depth;
        scene.lights = description.lights;

        for object in description.objects {
            let material = object.material;
            let shape: Box<dyn Shape> = match object.shape {
                ShapeNode::Sphere {
                    position,
                    radius,
                    rotation,
                    angle,
                } => match (rotation, angle) {
                    (Some(axis), Some(angle)) => {
                        Box::new(Sphere::with_rotation(position, radius, axis, angle, material))
                    }
                    _ => Box::new(Sphere::new(position, radius, material)),
                },
                ShapeNode::Triangle {
                    vertex0,
                    vertex1,
                    vertex2,
                } => Box::new(Triangle::new(vertex0, vertex1, vertex2, material)),
                ShapeNode::Plane { point, normal } => {
                    Box::new(Plane::new(point, normal, material))
                }
                ShapeNode::Cylinder {
                    center,
                    radius,
                    height,
                } => Box::new(Cylinder::new(center, radius, height, material)),
            };
            scene.add_object(shape);
        }

        log::debug!(
            "Scene ready: {} objects, {} lights, shadows {}, sampling {}x, depth {}",
            scene.objects.len(),
            scene.lights.len(),
            scene.shadows,
            scene.sampling_factor,
            scene.recursion_depth
        );

        scene
    }

    /// Add an object to the scene.
    pub fn add_object(&mut self, object: Box<dyn Shape>) {
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Enable or disable shadow testing.
    pub fn set_shadows(&mut self, shadows: bool) {
        self.shadows = shadows;
    }

    /// Set the supersampling factor (sub-pixel samples per axis).
    pub fn set_sampling_factor(&mut self, factor: u32) {
        self.sampling_factor = factor.max(1);
    }

    /// Set the maximum reflection recursion depth.
    pub fn set_recursion_depth(&mut self, depth: u32) {
        self.recursion_depth = depth;
    }

    /// The eye position primary rays start from.
    pub fn eye(&self) -> Point {
        self.eye
    }

    /// Sub-pixel samples per axis.
    pub fn sampling_factor(&self) -> u32 {
        self.sampling_factor
    }

    /// Number of objects in the scene.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of lights in the scene.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Nearest intersection along `ray` over every object, optionally
    /// skipping one object by index. Returns the hit and the index of the
    /// object that produced it.
    fn nearest_hit(&self, ray: &Ray, skip: Option<usize>) -> (Hit, Option<usize>) {
        let mut nearest = Hit::NO_HIT;
        let mut nearest_index = None;

        for (index, object) in self.objects.iter().enumerate() {
            if skip == Some(index) {
                continue;
            }
            let hit = object.intersect(ray);
            if hit.t < nearest.t {
                nearest = hit;
                nearest_index = Some(index);
            }
        }

        (nearest, nearest_index)
    }

    /// Shadow test: cast a ray from the light toward `point` and require
    /// the nearest object along it to be the object the point belongs to.
    fn light_reaches(&self, light: &Light, point: Point, object_index: usize) -> bool {
        let direction = -(light.position - point).normalize();
        let light_ray = Ray::new(light.position, direction);

        let (_, blocking_index) = self.nearest_hit(&light_ray, None);
        blocking_index == Some(object_index)
    }

    /// Compute the color seen along `ray`.
    ///
    /// `depth` counts reflection bounces taken so far; primary rays start
    /// at 0. The result is unclamped, the framebuffer clamps on write.
    pub fn trace(&self, ray: &Ray, depth: u32) -> Color {
        let (hit, object_index) = self.nearest_hit(ray, None);

        // No hit? Background color.
        let Some(object_index) = object_index else {
            return Color::ZERO;
        };
        let object = &self.objects[object_index];
        let material = object.material();

        // Back the hit point off the surface so secondary rays do not
        // re-intersect it
        let hit_point = ray.at(hit.t - EPSILON);
        let normal = hit.normal;
        let view = -ray.direction;

        let color = if material.is_textured() {
            object.texture_color_at(hit_point, object.is_rotated())
        } else {
            material.color
        };

        let ambient = color * material.ka;
        let mut diffuse = Color::ZERO;
        let mut specular = Color::ZERO;

        for light in &self.lights {
            if self.shadows && !self.light_reaches(light, hit_point, object_index) {
                continue;
            }

            let to_light = (light.position - hit_point).normalize();
            let reflected = 2.0 * normal.dot(to_light) * normal - to_light;

            diffuse += to_light.dot(normal).max(0.0) * color * light.color * material.kd;
            specular += reflected.dot(view).max(0.0).powf(material.n) * light.color * material.ks;

            if depth < self.recursion_depth {
                specular += self.reflect_ray(depth, &hit, ray, object_index);
            }
        }

        ambient + diffuse + specular
    }

    /// Specular contribution from the mirror direction.
    ///
    /// Casts the reflected ray, treats whatever it reaches as a point
    /// light colored by a recursive `trace`, and folds that light through
    /// the regular Phong specular term. Black when the reflected ray
    /// escapes the scene.
    fn reflect_ray(&self, depth: u32, hit: &Hit, ray: &Ray, object_index: usize) -> Color {
        let material = self.objects[object_index].material();
        let hit_point = ray.at(hit.t - EPSILON);
        let normal = hit.normal;
        let view = -ray.direction;

        let mirror = (ray.direction - 2.0 * normal.dot(ray.direction) * normal).normalize();
        let reflected_ray = Ray::new(hit_point, mirror);

        // The reflected ray must not land back on its own object
        let (reflected_hit, reflected_index) = self.nearest_hit(&reflected_ray, Some(object_index));
        if reflected_index.is_none() {
            return Color::ZERO;
        }

        let reflected_light = Light {
            position: reflected_ray.at(reflected_hit.t),
            color: self.trace(&reflected_ray, depth + 1) * material.ks,
        };

        let to_light = (reflected_light.position - hit_point).normalize();
        let reflected = 2.0 * normal.dot(to_light) * normal - to_light;

        view.dot(reflected).max(0.0).powf(material.n) * reflected_light.color * material.ks
    }
}
