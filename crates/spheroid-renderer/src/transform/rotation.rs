//! Rigid rotation of mesh points.
//!
//! Angles arrive in "hundredths of a half turn": `radians = angle / 100 · π`.
//! The X rotation is applied first, then the Y rotation.

use std::f64::consts::PI;

use spheroid_deform::Point3;

/// Convert a control angle to radians.
pub fn angle_to_radians(angle: f64) -> f64 {
    angle / 100.0 * PI
}

/// Precomputed X-then-Y rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    cos_x: f64,
    sin_x: f64,
    cos_y: f64,
    sin_y: f64,
}

impl Rotation {
    /// Rotation from control angles (`rotation_x` about X, `camera_angle` about Y).
    pub fn from_angles(rotation_x: f64, camera_angle: f64) -> Self {
        Self::from_radians(angle_to_radians(rotation_x), angle_to_radians(camera_angle))
    }

    pub fn from_radians(rad_x: f64, rad_y: f64) -> Self {
        let (sin_x, cos_x) = rad_x.sin_cos();
        let (sin_y, cos_y) = rad_y.sin_cos();
        Self {
            cos_x,
            sin_x,
            cos_y,
            sin_y,
        }
    }

    pub fn identity() -> Self {
        Self::from_radians(0.0, 0.0)
    }

    pub fn apply(&self, [x, y, z]: Point3) -> Point3 {
        // About X.
        let y1 = y * self.cos_x - z * self.sin_x;
        let z1 = y * self.sin_x + z * self.cos_x;
        // About Y.
        let x2 = x * self.cos_y + z1 * self.sin_y;
        let z2 = -x * self.sin_y + z1 * self.cos_y;
        [x2, y1, z2]
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}
