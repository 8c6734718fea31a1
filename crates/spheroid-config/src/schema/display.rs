//! Output surface configuration types.

use serde::{Deserialize, Serialize};

/// Surface size for headless runs and the frame pacing target.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    /// Surface pixels covered by one terminal column (and by half a row).
    pub cell_pixels: u32,
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            cell_pixels: 4,
            fps: 30,
        }
    }
}
