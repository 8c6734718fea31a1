//! Geometry math for the software pipeline: vectors, rotation, projection.

pub mod math;
mod projection;
mod rotation;

pub use projection::*;
pub use rotation::*;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::math::*;
    use super::*;
    use spheroid_common::Size;

    fn approx_eq(a: [f64; 3], b: [f64; 3], eps: f64) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < eps)
    }

    #[test]
    fn zero_angles_are_identity() {
        let r = Rotation::from_angles(0.0, 0.0);
        for p in [[1.0, 2.0, 3.0], [-50.0, 0.0, 199.0], [0.0, 0.0, 0.0]] {
            assert_eq!(r.apply(p), p);
        }
    }

    #[test]
    fn angle_units_are_hundredths_of_pi() {
        assert!((angle_to_radians(100.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((angle_to_radians(50.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn rotate_x_quarter_turn() {
        // y' = y cos - z sin, z' = y sin + z cos with 90°: (0,1,0) -> (0,0,1)
        let r = Rotation::from_angles(50.0, 0.0);
        assert!(approx_eq(r.apply([0.0, 1.0, 0.0]), [0.0, 0.0, 1.0], 1e-12));
    }

    #[test]
    fn rotate_y_quarter_turn() {
        // x' = x cos + z sin, z' = -x sin + z cos with 90°: (1,0,0) -> (0,0,-1)
        let r = Rotation::from_angles(0.0, 50.0);
        assert!(approx_eq(r.apply([1.0, 0.0, 0.0]), [0.0, 0.0, -1.0], 1e-12));
    }

    #[test]
    fn x_rotation_applies_before_y() {
        // X takes (0,1,0) to (0,0,1); Y then takes (0,0,1) to (1,0,0).
        let r = Rotation::from_angles(50.0, 50.0);
        assert!(approx_eq(r.apply([0.0, 1.0, 0.0]), [1.0, 0.0, 0.0], 1e-12));
    }

    #[test]
    fn rotation_preserves_length() {
        let r = Rotation::from_angles(37.0, -81.0);
        let p = [3.0, -4.0, 12.0];
        assert!((length(r.apply(p)) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn projection_centers_on_surface() {
        let proj = Projection::new(300.0, Size::new(200, 100));
        assert_eq!(proj.project([0.0, 0.0, 0.0]), [100.0, 50.0]);
        // scale = 1 + 100 · 0.3 = 31
        let p = proj.project([31.0, 62.0, 100.0]);
        assert!((p[0] - 101.0).abs() < 1e-9);
        assert!((p[1] - 52.0).abs() < 1e-9);
    }

    #[test]
    fn zero_depth_is_orthographic() {
        let proj = Projection::new(0.0, Size::new(10, 10));
        assert_eq!(proj.scale(1e9), 1.0);
        assert_eq!(proj.project([3.0, -2.0, -500.0]), [8.0, 3.0]);
    }

    #[test]
    fn singular_scale_is_clamped() {
        let proj = Projection::new(500.0, Size::new(100, 100));
        // 1 + z·0.5 = 0 at z = -2
        let scale = proj.scale(-2.0);
        assert_eq!(scale, MIN_PROJECTION_SCALE);
        let p = proj.project([1.0, 1.0, -2.0]);
        assert!(p[0].is_finite() && p[1].is_finite());
        // Just past the singularity keeps its sign.
        assert!(proj.scale(-2.0000001) < 0.0);
    }

    #[test]
    fn cross_and_normalize() {
        let n = cross([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_eq!(n, [0.0, 0.0, 1.0]);
        assert!(approx_eq(normalize([0.0, 3.0, 4.0]), [0.0, 0.6, 0.8], 1e-12));
        assert_eq!(normalize([0.0; 3]), [0.0; 3]);
        assert_eq!(sub([5.0, 5.0, 5.0], [1.0, 2.0, 3.0]), [4.0, 3.0, 2.0]);
        assert_eq!(dot([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]), 32.0);
    }
}
