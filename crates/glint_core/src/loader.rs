//! JSON scene file loading.
//!
//! Reads a scene file, resolves every material (decoding referenced
//! textures through a [`TextureCache`]) and hands back a
//! [`SceneDescription`]. Loading fails before the renderer ever sees a
//! broken texture reference.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

use crate::material::Material;
use crate::scene::{MaterialNode, ObjectDescription, SceneDescription, SceneFile};
use crate::texture::{TextureCache, TextureError};

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Could not read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Texture(#[from] TextureError),

    #[error("Material needs either a color or a texture")]
    MissingColor,
}

/// Load a scene description from a JSON file.
///
/// Relative texture paths resolve against the scene file's directory.
pub fn load_scene(path: impl AsRef<Path>) -> Result<SceneDescription, SceneError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let scene_file: SceneFile = serde_json::from_reader(BufReader::new(file))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut textures = TextureCache::with_base_dir(base_dir);

    build_description(scene_file, &mut textures)
}

/// Load a scene description from an in-memory JSON string.
///
/// Texture paths resolve against the current directory.
pub fn load_scene_from_string(json: &str) -> Result<SceneDescription, SceneError> {
    let scene_file: SceneFile = serde_json::from_str(json)?;
    let mut textures = TextureCache::new();
    build_description(scene_file, &mut textures)
}

fn build_description(
    scene_file: SceneFile,
    textures: &mut TextureCache,
) -> Result<SceneDescription, SceneError> {
    let mut objects = Vec::with_capacity(scene_file.objects.len());
    for node in scene_file.objects {
        let material = resolve_material(&node.material, textures)?;
        objects.push(ObjectDescription {
            shape: node.shape,
            material,
        });
    }

    log::info!(
        "Parsed {} objects, {} lights",
        objects.len(),
        scene_file.lights.len()
    );

    Ok(SceneDescription {
        eye: scene_file.eye,
        shadows: scene_file.shadows,
        sampling_factor: scene_file.super_sampling_factor.max(1),
        recursion_depth: scene_file.max_recursion_depth,
        lights: scene_file.lights,
        objects,
    })
}

fn resolve_material(
    node: &MaterialNode,
    textures: &mut TextureCache,
) -> Result<Material, SceneError> {
    if let Some(path) = &node.texture {
        let texture = textures.load(path)?;
        return Ok(Material::textured(texture, node.ka, node.kd, node.ks, node.n));
    }
    let color = node.color.ok_or(SceneError::MissingColor)?;
    Ok(Material::flat(color, node.ka, node.kd, node.ks, node.n))
}
