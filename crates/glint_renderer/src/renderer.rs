//! Full-image render loop with uniform supersampling.
//!
//! Pixels are independent: the scene is read-only during a render pass,
//! so buckets render in parallel on the rayon pool and are assembled into
//! the framebuffer afterwards.

use rayon::prelude::*;

use glint_math::{Color, Point, Ray, Vec3};

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::image_buffer::Image;
use crate::scene::Scene;

/// Render one pixel: average `sampling_factor^2` primary rays through
/// uniformly spaced sub-pixel sample points.
///
/// The image plane sits at z = 0; image rows run top-down while
/// trace-space y runs bottom-up, so row `y` samples around
/// `image_height - 1 - y`.
pub fn render_pixel(scene: &Scene, image_height: u32, x: u32, y: u32) -> Color {
    let factor = scene.sampling_factor();
    let step = 1.0 / factor as f64;
    let eye = scene.eye();

    let mut pixel_color = Color::ZERO;
    for sub_y in 0..factor {
        for sub_x in 0..factor {
            let sample = Point::new(
                x as f64 + (sub_x as f64 + 0.5) * step,
                (image_height - 1 - y) as f64 + (sub_y as f64 + 0.5) * step,
                0.0,
            );
            let ray = Ray::new(eye, (sample - eye).normalize());
            pixel_color += scene.trace(&ray, 0).clamp(Vec3::ZERO, Vec3::ONE);
        }
    }

    pixel_color / (factor * factor) as f64
}

/// Render the whole scene into a fresh image.
pub fn render(scene: &Scene, width: u32, height: u32) -> Image {
    let buckets = generate_buckets(width, height, DEFAULT_BUCKET_SIZE);
    log::debug!(
        "Rendering {}x{} in {} buckets of up to {}px",
        width,
        height,
        buckets.len(),
        DEFAULT_BUCKET_SIZE
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, scene, height)))
        .collect();

    let mut image = Image::new(width, height);
    for result in &results {
        let bucket = &result.bucket;
        for (offset, color) in result.pixels.iter().enumerate() {
            let x = bucket.x + offset as u32 % bucket.width;
            let y = bucket.y + offset as u32 / bucket.width;
            image.add(x, y, *color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{Light, Material};
    use crate::sphere::Sphere;

    fn test_scene() -> Scene {
        // Matte sphere in front of the image plane, in scene units that
        // match a small framebuffer
        let mut scene = Scene::new(Point::new(10.0, 10.0, 50.0));
        let material = Material::flat(Color::new(0.8, 0.2, 0.2), 0.3, 0.7, 0.0, 1.0);
        scene.add_object(Box::new(Sphere::new(Point::new(10.0, 10.0, -10.0), 6.0, material)));
        scene.add_light(Light {
            position: Point::new(10.0, 40.0, 30.0),
            color: Color::ONE,
        });
        scene
    }

    #[test]
    fn test_render_pixel_hits_the_sphere() {
        let scene = test_scene();
        // Center pixel looks straight at the sphere
        let center = render_pixel(&scene, 20, 10, 10);
        assert!(center.x > 0.0);

        // Corner pixel misses it
        let corner = render_pixel(&scene, 20, 0, 0);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_render_pixel_is_clamped_average() {
        let scene = test_scene();
        let color = render_pixel(&scene, 20, 10, 10);
        assert!(color.x <= 1.0 && color.y <= 1.0 && color.z <= 1.0);
        assert!(color.x >= 0.0 && color.y >= 0.0 && color.z >= 0.0);
    }

    #[test]
    fn test_supersampling_stays_close_to_single_sample() {
        // A smooth region should not change drastically with more samples
        let mut scene = test_scene();
        let single = render_pixel(&scene, 20, 10, 10);
        scene.set_sampling_factor(3);
        let averaged = render_pixel(&scene, 20, 10, 10);

        assert!((single - averaged).length() < 0.5);
    }

    #[test]
    fn test_render_matches_per_pixel_tracing() {
        let scene = test_scene();
        let image = render(&scene, 20, 20);

        for (x, y) in [(0, 0), (10, 10), (19, 19), (3, 17)] {
            let expected = render_pixel(&scene, 20, x, y);
            assert!(
                (image.get(x, y) - expected).length() < 1e-12,
                "pixel ({x}, {y}) differs"
            );
        }
    }

    #[test]
    fn test_render_dimensions() {
        let scene = test_scene();
        let image = render(&scene, 33, 17);
        assert_eq!(image.width(), 33);
        assert_eq!(image.height(), 17);
    }
}
