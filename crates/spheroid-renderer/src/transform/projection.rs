//! Perspective projection onto the output surface.

use spheroid_common::Size;
use spheroid_deform::Point3;

/// Smallest magnitude allowed for the perspective divisor.
pub const MIN_PROJECTION_SCALE: f64 = 1e-3;

/// Projects rotated points to pixel coordinates centered on the surface.
///
/// `scale = 1 + z · depth / 1000`; a depth of 0 is orthographic. The
/// divisor is clamped away from zero so points near `z = -1000 / depth`
/// never produce infinities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    depth_factor: f64,
    center_x: f64,
    center_y: f64,
}

impl Projection {
    pub fn new(depth: f64, size: Size) -> Self {
        let (center_x, center_y) = size.center();
        Self {
            depth_factor: depth / 1000.0,
            center_x,
            center_y,
        }
    }

    /// Perspective divisor for a depth value, after clamping.
    pub fn scale(&self, z: f64) -> f64 {
        let scale = 1.0 + z * self.depth_factor;
        if !scale.is_finite() {
            return 1.0;
        }
        if scale.abs() < MIN_PROJECTION_SCALE {
            MIN_PROJECTION_SCALE.copysign(scale)
        } else {
            scale
        }
    }

    pub fn project(&self, [x, y, z]: Point3) -> [f64; 2] {
        let scale = self.scale(z);
        [self.center_x + x / scale, self.center_y + y / scale]
    }
}
