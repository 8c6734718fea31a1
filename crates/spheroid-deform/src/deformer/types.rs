//! ShapeDeformer type and the stock mode set.

use serde::{Deserialize, Serialize};

use crate::mode::DeformationMode;

/// Default sphere radius in surface units.
pub const DEFAULT_BASE_RADIUS: f64 = 200.0;

/// Owns the ordered mode list and the immutable base radius.
///
/// A mode's index is its identity for presets and controls. Removing a
/// mode shifts every later index down by one; callers holding indices
/// must re-read [`ShapeDeformer::mode_info`] after a removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDeformer {
    pub(crate) base_radius: f64,
    pub(crate) modes: Vec<DeformationMode>,
}

impl ShapeDeformer {
    /// Deformer with the seven stock modes.
    pub fn new(base_radius: f64) -> Self {
        Self {
            base_radius,
            modes: default_modes(),
        }
    }

    /// Deformer with no modes; every mesh it generates is a plain sphere.
    pub fn empty(base_radius: f64) -> Self {
        Self {
            base_radius,
            modes: Vec::new(),
        }
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn modes(&self) -> &[DeformationMode] {
        &self.modes
    }

    pub fn mode(&self, index: usize) -> Option<&DeformationMode> {
        self.modes.get(index)
    }

    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }
}

impl Default for ShapeDeformer {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_RADIUS)
    }
}

/// The stock mode set. Order and frequencies are part of the preset format.
pub fn default_modes() -> Vec<DeformationMode> {
    vec![
        DeformationMode::harmonic("Lobes", "Broad lobes around the equator", 3.0, 2.0, 20.0),
        DeformationMode::harmonic("Waves", "Medium ridges crossing the surface", 5.0, 3.0, 10.0),
        DeformationMode::harmonic("Stripes", "Fine meridian stripes", 7.0, 1.0, 5.0),
        DeformationMode::cosine_harmonic("Pinch", "Pinches the shape into a pillow", 4.0, 4.0, 0.0),
        DeformationMode::harmonic("Ripple", "Latitude ripples from pole to pole", 0.0, 3.0, 0.0),
        DeformationMode::mixed_harmonic("Twisted", "Spiral twist around the axis", 0.0),
        DeformationMode::noise("Noise", "Smooth pseudo-random bumps", 1.0, 0.0),
    ]
}
