//! Mode list mutation, presets, and control metadata.

use tracing::debug;

use super::types::ShapeDeformer;
use crate::mode::{DeformationMode, ModeInfo};
use crate::preset::Preset;

impl ShapeDeformer {
    /// Append a mode and return its index.
    pub fn add_mode(&mut self, mode: DeformationMode) -> usize {
        debug!(name = %mode.name, "mode added");
        self.modes.push(mode);
        self.modes.len() - 1
    }

    /// Remove the mode at `index`. Later indices shift down by one.
    pub fn remove_mode(&mut self, index: usize) -> bool {
        if index >= self.modes.len() {
            return false;
        }
        let removed = self.modes.remove(index);
        debug!(index, name = %removed.name, "mode removed");
        true
    }

    /// Set a mode's amplitude. No range clamping is applied here.
    pub fn set_amplitude(&mut self, index: usize, value: f64) -> bool {
        match self.modes.get_mut(index) {
            Some(mode) => {
                mode.amplitude = value;
                true
            }
            None => false,
        }
    }

    pub fn amplitude(&self, index: usize) -> Option<f64> {
        self.modes.get(index).map(|m| m.amplitude)
    }

    /// Current amplitudes in index order.
    pub fn amplitudes(&self) -> Vec<f64> {
        self.modes.iter().map(|m| m.amplitude).collect()
    }

    /// Overwrite amplitudes by index. Modes past the preset's length keep
    /// their current value; extra preset values are ignored.
    pub fn apply_preset(&mut self, preset: &Preset) {
        for (mode, &value) in self.modes.iter_mut().zip(&preset.amplitudes) {
            mode.amplitude = value;
        }
        debug!(preset = %preset.name, "preset applied");
    }

    /// Snapshot the current amplitudes as a named preset.
    pub fn current_preset(&self, name: impl Into<String>) -> Preset {
        Preset::new(name, self.amplitudes())
    }

    /// Restore every mode's default amplitude.
    pub fn reset_all(&mut self) {
        self.modes.iter_mut().for_each(DeformationMode::reset);
    }

    /// Set every amplitude to zero, leaving an undeformed sphere.
    pub fn zero_all(&mut self) {
        for mode in &mut self.modes {
            mode.amplitude = 0.0;
        }
    }

    pub fn mode_info(&self) -> Vec<ModeInfo> {
        self.modes.iter().map(DeformationMode::info).collect()
    }
}
