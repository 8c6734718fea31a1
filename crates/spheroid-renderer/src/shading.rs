//! Flat per-triangle lighting with a fixed blue palette.

use spheroid_common::Color;
use spheroid_deform::Point3;

use crate::transform::math::{dot, normalize};

/// Light direction used when none is configured.
pub const DEFAULT_LIGHT_DIRECTION: Point3 = [0.5, -0.5, 0.7];

/// Floor for the diffuse term so faces turned away from the light stay visible.
pub const AMBIENT_INTENSITY: f64 = 0.1;

/// Absorbs rounding in unit-vector dot products before flooring.
const CHANNEL_EPSILON: f64 = 1e-9;

/// Directional light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    direction: Point3,
}

impl Light {
    /// Light along `(x, y, z)`, normalized. A zero vector falls back to the default.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let direction = normalize([x, y, z]);
        if direction == [0.0; 3] {
            tracing::warn!(x, y, z, "zero light direction, using default");
            return Self::default();
        }
        Self { direction }
    }

    pub fn from_direction(direction: Point3) -> Self {
        Self::new(direction[0], direction[1], direction[2])
    }

    pub fn direction(&self) -> Point3 {
        self.direction
    }

    /// Diffuse intensity for a unit face normal, in `[0.1, 1]`.
    pub fn intensity(&self, normal: Point3) -> f64 {
        dot(normal, self.direction).max(AMBIENT_INTENSITY)
    }

    /// Fill color for a unit face normal.
    pub fn shade(&self, normal: Point3) -> Color {
        palette(self.intensity(normal))
    }
}

impl Default for Light {
    fn default() -> Self {
        let [x, y, z] = normalize(DEFAULT_LIGHT_DIRECTION);
        Self {
            direction: [x, y, z],
        }
    }
}

/// Map an intensity to the blue-dominant surface color.
pub fn palette(intensity: f64) -> Color {
    let channel = |v: f64| (v + CHANNEL_EPSILON).floor().clamp(0.0, 255.0) as u8;
    Color::rgb(
        channel(40.0 * intensity),
        channel(120.0 * intensity),
        channel(120.0 + 135.0 * intensity),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_light_is_normalized_default_direction() {
        let light = Light::default();
        let d = light.direction();
        let len = (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-12);
        assert!((d[0] / d[2] - 0.5 / 0.7).abs() < 1e-12);
    }

    #[test]
    fn facing_light_is_full_intensity() {
        let light = Light::default();
        let n = light.direction();
        assert!((light.intensity(n) - 1.0).abs() < 1e-12);
        assert_eq!(light.shade(n), Color::rgb(40, 120, 255));
    }

    #[test]
    fn facing_away_is_clamped_to_ambient() {
        let light = Light::default();
        let d = light.direction();
        let n = [-d[0], -d[1], -d[2]];
        assert_eq!(light.intensity(n), AMBIENT_INTENSITY);
        assert_eq!(light.shade(n), Color::rgb(4, 12, 133));
    }

    #[test]
    fn new_normalizes_input() {
        let light = Light::new(0.0, 0.0, 5.0);
        assert_eq!(light.direction(), [0.0, 0.0, 1.0]);
        assert!((light.intensity([0.0, 0.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_direction_falls_back_to_default() {
        assert_eq!(Light::new(0.0, 0.0, 0.0), Light::default());
    }

    #[test]
    fn palette_floors_channels() {
        assert_eq!(palette(0.5), Color::rgb(20, 60, 187));
        assert_eq!(palette(1.0), Color::rgb(40, 120, 255));
    }
}
