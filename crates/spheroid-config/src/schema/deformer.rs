//! Shape deformer configuration types.

use serde::{Deserialize, Serialize};
use spheroid_deform::{DeformationMode, ModeKind};

/// An additional mode appended after the stock set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraModeConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amplitude: f64,
    pub kind: ModeKind,
}

impl ExtraModeConfig {
    pub fn to_mode(&self) -> DeformationMode {
        DeformationMode::new(
            self.name.clone(),
            self.description.clone(),
            self.kind,
            self.amplitude,
        )
    }
}

/// Deformer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeformerConfig {
    pub base_radius: f64,
    /// Lower bound for amplitude controls.
    pub amplitude_min: f64,
    /// Upper bound for amplitude controls.
    pub amplitude_max: f64,
    /// Amount one key press changes an amplitude.
    pub amplitude_step: f64,
    /// Preset applied at startup, by name.
    pub initial_preset: Option<String>,
    pub extra_modes: Vec<ExtraModeConfig>,
}

impl Default for DeformerConfig {
    fn default() -> Self {
        Self {
            base_radius: 200.0,
            amplitude_min: 0.0,
            amplitude_max: 50.0,
            amplitude_step: 1.0,
            initial_preset: None,
            extra_modes: Vec::new(),
        }
    }
}

impl DeformerConfig {
    /// Clamp a control value to the configured amplitude range.
    pub fn clamp_amplitude(&self, value: f64) -> f64 {
        value.clamp(self.amplitude_min, self.amplitude_max)
    }
}
