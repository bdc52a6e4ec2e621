//! Typed scene description.
//!
//! These types mirror the JSON scene file one to one. The renderer turns a
//! `SceneDescription` into its own runtime object list; nothing here traces
//! rays.

use glint_math::{Color, Point, Vec3};
use serde::Deserialize;

use crate::material::Material;

/// A point light with no falloff.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Light {
    pub position: Point,
    /// Channel values in [0, 1]
    pub color: Color,
}

/// Geometry parameters for one object, tagged by shape kind.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ShapeNode {
    Sphere {
        position: Point,
        radius: f64,
        /// Texture-orientation axis; only meaningful together with `angle`
        rotation: Option<Vec3>,
        /// Rotation angle in degrees
        angle: Option<f64>,
    },
    Triangle {
        vertex0: Point,
        vertex1: Point,
        vertex2: Point,
    },
    Plane {
        point: Point,
        normal: Vec3,
    },
    Cylinder {
        center: Point,
        radius: f64,
        height: f64,
    },
}

/// Raw material block as it appears in the scene file.
#[derive(Clone, Debug, Deserialize)]
pub struct MaterialNode {
    pub ka: f64,
    pub kd: f64,
    pub ks: f64,
    pub n: f64,
    pub color: Option<Color>,
    /// Texture file path, relative to the scene file
    pub texture: Option<String>,
}

/// One object entry: geometry plus its material block.
#[derive(Clone, Debug, Deserialize)]
pub struct ObjectNode {
    #[serde(flatten)]
    pub shape: ShapeNode,
    pub material: MaterialNode,
}

/// Top-level scene file structure.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SceneFile {
    pub eye: Point,
    #[serde(default)]
    pub shadows: bool,
    #[serde(default = "default_sampling_factor")]
    pub super_sampling_factor: u32,
    #[serde(default)]
    pub max_recursion_depth: u32,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub objects: Vec<ObjectNode>,
}

fn default_sampling_factor() -> u32 {
    1
}

/// An object with its material resolved (textures decoded).
#[derive(Clone, Debug)]
pub struct ObjectDescription {
    pub shape: ShapeNode,
    pub material: Material,
}

/// A fully loaded scene, ready for the renderer.
#[derive(Clone, Debug)]
pub struct SceneDescription {
    pub eye: Point,
    pub shadows: bool,
    /// Sub-pixel samples per axis, >= 1
    pub sampling_factor: u32,
    /// Maximum reflection recursion depth
    pub recursion_depth: u32,
    pub lights: Vec<Light>,
    pub objects: Vec<ObjectDescription>,
}
