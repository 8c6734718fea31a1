//! Software renderer configuration types.

use serde::{Deserialize, Serialize};

/// Renderer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Light direction; normalized on load.
    pub light_direction: [f64; 3],
    /// Perspective strength. 0 is orthographic; keep `depth · max|z| < 1000`
    /// so the whole shape stays in front of the projection plane.
    pub depth: f64,
    /// Mesh segments around the equator.
    pub resolution_theta: u32,
    /// Mesh segments from pole to pole.
    pub resolution_phi: u32,
    pub background: String,
    /// Triangle outline color, usually translucent.
    pub outline: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            light_direction: [0.5, -0.5, 0.7],
            depth: 1.5,
            resolution_theta: 40,
            resolution_phi: 20,
            background: "#000000".into(),
            outline: "rgba(255,255,255,25)".into(),
        }
    }
}
