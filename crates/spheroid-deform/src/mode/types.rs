//! Deformation mode types.

use serde::{Deserialize, Serialize};

/// The displacement function a mode evaluates.
///
/// Serialized with an internal `type` tag so modes can be declared in
/// config files and exchanged as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeKind {
    /// `sin(theta_freq * theta) * sin(phi_freq * phi)`
    Harmonic { theta_freq: f64, phi_freq: f64 },
    /// `cos(theta_freq * theta) * sin(phi_freq * phi)`
    CosineHarmonic { theta_freq: f64, phi_freq: f64 },
    /// `sin(theta + 3 * phi) * cos(2 * theta)`
    MixedHarmonic,
    /// Trigonometric pseudo-noise sampled at the base-point direction.
    Noise { scale: f64 },
}

/// A named, parameterized radial displacement over the sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeformationMode {
    pub name: String,
    pub description: String,
    pub amplitude: f64,
    pub default_amplitude: f64,
    pub kind: ModeKind,
}

/// Display metadata for one mode, in index order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub name: String,
    pub description: String,
    pub amplitude: f64,
    pub default_amplitude: f64,
}

impl DeformationMode {
    /// Create a mode whose current amplitude starts at `default_amplitude`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ModeKind,
        default_amplitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            amplitude: default_amplitude,
            default_amplitude,
            kind,
        }
    }

    pub fn harmonic(
        name: impl Into<String>,
        description: impl Into<String>,
        theta_freq: f64,
        phi_freq: f64,
        default_amplitude: f64,
    ) -> Self {
        Self::new(
            name,
            description,
            ModeKind::Harmonic {
                theta_freq,
                phi_freq,
            },
            default_amplitude,
        )
    }

    pub fn cosine_harmonic(
        name: impl Into<String>,
        description: impl Into<String>,
        theta_freq: f64,
        phi_freq: f64,
        default_amplitude: f64,
    ) -> Self {
        Self::new(
            name,
            description,
            ModeKind::CosineHarmonic {
                theta_freq,
                phi_freq,
            },
            default_amplitude,
        )
    }

    pub fn mixed_harmonic(
        name: impl Into<String>,
        description: impl Into<String>,
        default_amplitude: f64,
    ) -> Self {
        Self::new(name, description, ModeKind::MixedHarmonic, default_amplitude)
    }

    pub fn noise(
        name: impl Into<String>,
        description: impl Into<String>,
        scale: f64,
        default_amplitude: f64,
    ) -> Self {
        Self::new(name, description, ModeKind::Noise { scale }, default_amplitude)
    }

    /// Restore the amplitude to its default.
    pub fn reset(&mut self) {
        self.amplitude = self.default_amplitude;
    }

    pub fn info(&self) -> ModeInfo {
        ModeInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            amplitude: self.amplitude,
            default_amplitude: self.default_amplitude,
        }
    }
}
