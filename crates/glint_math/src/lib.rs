// All glint math is double precision.
pub use glam::DVec3 as Vec3;

/// Positions share storage with directions.
pub type Point = Vec3;

/// RGB radiance/reflectance triple. Channels live in [0, inf) until the
/// framebuffer clamps them to [0, 1].
pub type Color = Vec3;

/// Tolerance for rejecting near-zero intersection roots and for biasing
/// hit points off their surface.
pub const EPSILON: f64 = 1e-7;

mod ray;
pub use ray::Ray;

/// Solve `a*x^2 + b*x + c = 0`.
///
/// Returns the real roots sorted ascending, or `None` when the discriminant
/// is negative. Uses the cancellation-free form for the first root.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }
    if discriminant == 0.0 {
        let root = -0.5 * b / a;
        return Some((root, root));
    }
    let q = if b > 0.0 {
        -0.5 * (b + discriminant.sqrt())
    } else {
        -0.5 * (b - discriminant.sqrt())
    };
    let (x0, x1) = (q / a, c / q);
    if x0 <= x1 {
        Some((x0, x1))
    } else {
        Some((x1, x0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert!((Vec3::new(3.0, 4.0, 0.0).normalize().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_color_clamp_is_idempotent_in_range() {
        let c = Color::new(0.25, 0.5, 1.0);
        assert_eq!(c.clamp(Vec3::ZERO, Vec3::ONE), c);

        let hot = Color::new(2.0, -0.5, 0.75);
        let clamped = hot.clamp(Vec3::ZERO, Vec3::ONE);
        assert_eq!(clamped, Color::new(1.0, 0.0, 0.75));
        assert_eq!(clamped.clamp(Vec3::ZERO, Vec3::ONE), clamped);
    }

    #[test]
    fn test_solve_quadratic_two_roots() {
        // x^2 - 5x + 6 = (x - 2)(x - 3)
        let (x0, x1) = solve_quadratic(1.0, -5.0, 6.0).unwrap();
        assert!((x0 - 2.0).abs() < 1e-12);
        assert!((x1 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_quadratic_double_root() {
        // x^2 - 2x + 1 = (x - 1)^2
        let (x0, x1) = solve_quadratic(1.0, -2.0, 1.0).unwrap();
        assert_eq!(x0, x1);
        assert!((x0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_solve_quadratic_no_real_roots() {
        assert!(solve_quadratic(1.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_solve_quadratic_roots_sorted() {
        let (x0, x1) = solve_quadratic(2.0, 4.0, -6.0).unwrap();
        assert!(x0 <= x1);
        assert!((x0 + 3.0).abs() < 1e-12);
        assert!((x1 - 1.0).abs() < 1e-12);
    }
}
