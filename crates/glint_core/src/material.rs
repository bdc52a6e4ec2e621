//! Phong material model.

use std::sync::Arc;

use glint_math::Color;

use crate::texture::Texture;

/// Surface appearance: a flat color or an image texture, plus the Phong
/// reflection weights.
///
/// Exactly one of `color`/`texture` is authoritative; `is_textured` tells
/// which. The weights are unnormalized (they need not sum to 1).
#[derive(Clone, Debug)]
pub struct Material {
    /// Base color (authoritative when no texture is set)
    pub color: Color,

    /// Decoded texture image, shared between clones of the material
    pub texture: Option<Arc<Texture>>,

    /// Ambient intensity
    pub ka: f64,

    /// Diffuse intensity
    pub kd: f64,

    /// Specular intensity
    pub ks: f64,

    /// Exponent for specular highlight size
    pub n: f64,
}

impl Material {
    /// Create a flat-colored material.
    pub fn flat(color: Color, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            color,
            texture: None,
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Create a textured material. The base color is unused while the
    /// texture is present.
    pub fn textured(texture: Arc<Texture>, ka: f64, kd: f64, ks: f64, n: f64) -> Self {
        Self {
            color: Color::ZERO,
            texture: Some(texture),
            ka,
            kd,
            ks,
            n,
        }
    }

    /// Whether the texture is the authoritative color source.
    pub fn is_textured(&self) -> bool {
        self.texture.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_material() {
        let material = Material::flat(Color::new(1.0, 0.0, 0.0), 0.2, 0.7, 0.5, 32.0);
        assert!(!material.is_textured());
        assert_eq!(material.color, Color::new(1.0, 0.0, 0.0));
        assert_eq!(material.n, 32.0);
    }

    #[test]
    fn test_textured_material() {
        let texture = Arc::new(Texture::solid_color(Color::new(0.0, 1.0, 0.0)));
        let material = Material::textured(texture, 0.2, 0.7, 0.0, 1.0);
        assert!(material.is_textured());
    }
}
