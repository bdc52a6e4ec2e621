//! Framebuffer written by the render loop.

use std::path::Path;

use glint_math::{Color, Vec3};

/// 2D grid of colors, row-major with (0, 0) in the top-left corner.
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// Create a new image filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Accumulate onto the pixel at (x, y). Supersampled renders add each
    /// sub-sample's share here; the sum is order-independent.
    pub fn add(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] += color;
    }

    /// Convert to 8-bit RGBA bytes, clamping each channel to [0, 1].
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 4) as usize);
        for color in &self.pixels {
            let c = color.clamp(Vec3::ZERO, Vec3::ONE);
            bytes.push((c.x * 255.0) as u8);
            bytes.push((c.y * 255.0) as u8);
            bytes.push((c.z * 255.0) as u8);
            bytes.push(255);
        }
        bytes
    }

    /// Write the image as a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> image::ImageResult<()> {
        image::save_buffer_with_format(
            path,
            &self.to_rgba(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
    }
}
