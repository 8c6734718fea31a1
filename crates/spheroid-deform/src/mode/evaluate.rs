//! Displacement evaluation for each mode kind.

use super::types::{DeformationMode, ModeKind};
use crate::mesh::Point3;

/// Multiplier applied to the base-point direction before sampling noise.
const NOISE_SAMPLE_SCALE: f64 = 10.0;

impl ModeKind {
    /// Unscaled displacement at `(theta, phi)`.
    ///
    /// `Noise` needs the base point and contributes zero without one.
    pub fn sample(&self, theta: f64, phi: f64, base_point: Option<Point3>) -> f64 {
        match *self {
            ModeKind::Harmonic {
                theta_freq,
                phi_freq,
            } => (theta_freq * theta).sin() * (phi_freq * phi).sin(),
            ModeKind::CosineHarmonic {
                theta_freq,
                phi_freq,
            } => (theta_freq * theta).cos() * (phi_freq * phi).sin(),
            ModeKind::MixedHarmonic => (theta + 3.0 * phi).sin() * (2.0 * theta).cos(),
            ModeKind::Noise { scale } => match base_point {
                Some([x, y, z]) => noise3d(
                    NOISE_SAMPLE_SCALE * x,
                    NOISE_SAMPLE_SCALE * y,
                    NOISE_SAMPLE_SCALE * z,
                    scale,
                ),
                None => 0.0,
            },
        }
    }
}

impl DeformationMode {
    /// Radial offset contributed by this mode at `(theta, phi)`.
    pub fn evaluate(&self, theta: f64, phi: f64, base_point: Option<Point3>) -> f64 {
        self.amplitude * self.kind.sample(theta, phi, base_point)
    }
}

/// Smooth, deterministic stand-in for gradient noise.
pub fn noise3d(x: f64, y: f64, z: f64, scale: f64) -> f64 {
    let s = 0.1 * scale;
    (s * x).sin() * (s * y).cos() * (s * z).sin()
}
