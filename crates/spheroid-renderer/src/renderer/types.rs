//! Per-frame inputs and outputs.

use serde::{Deserialize, Serialize};

/// Everything a single `draw` needs besides the deformer and surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameParams {
    /// Rotation about X, in hundredths of a half turn.
    pub rotation_x: f64,
    /// Rotation about Y derived from the camera, same units.
    pub camera_angle: f64,
    /// Perspective strength. 0 is orthographic.
    pub depth: f64,
    pub theta_segments: u32,
    pub phi_segments: u32,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            rotation_x: 0.0,
            camera_angle: 0.0,
            depth: 1.5,
            theta_segments: 40,
            phi_segments: 20,
        }
    }
}

/// Triangle counts for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    /// Triangles generated from the mesh (two per quad).
    pub total: usize,
    /// Triangles discarded as back-facing or degenerate.
    pub culled: usize,
    /// Triangles painted.
    pub drawn: usize,
}
