//! Camera orbit configuration types.

use serde::{Deserialize, Serialize};

/// Orbit camera and object rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub orbit_radius: f64,
    /// Radians per second around the vertical axis.
    pub orbit_speed: f64,
    /// Initial X rotation, in hundredths of a half turn.
    pub rotation_x: f64,
    /// X rotation units per second.
    pub rotation_speed: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            orbit_radius: 500.0,
            orbit_speed: 0.25,
            rotation_x: 20.0,
            rotation_speed: 0.0,
        }
    }
}
