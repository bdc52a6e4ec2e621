//! Glint core - scene description and asset loading.
//!
//! This crate provides:
//!
//! - **Scene description types**: the typed form of a JSON scene file
//!   (`SceneDescription`, `ShapeNode`, `Light`)
//! - **Materials**: flat-color or textured Phong materials
//! - **Texture loading**: image decoding and caching for textured materials
//!
//! # Example
//!
//! ```ignore
//! let description = glint_core::load_scene("scenes/example.json")?;
//! println!("loaded {} objects, {} lights",
//!     description.objects.len(),
//!     description.lights.len());
//! ```

pub mod loader;
pub mod material;
pub mod scene;
pub mod texture;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_string, SceneError};
pub use material::Material;
pub use scene::{Light, ObjectDescription, SceneDescription, ShapeNode};
pub use texture::{Texture, TextureCache, TextureError};
