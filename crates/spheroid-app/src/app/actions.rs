//! Apply user actions to the app between frames.

use spheroid_config::toml_loader::default_config_path;
use spheroid_config::toml_writer::save_preset_to_path;
use spheroid_deform::ControlEvent;
use tracing::{debug, info, warn};

use super::core::{App, Flow};
use crate::controls::Action;

/// Depth change per key press.
const DEPTH_STEP: f64 = 0.25;
/// Upper bound for interactive depth changes.
const MAX_DEPTH: f64 = 10.0;

impl App {
    pub fn handle(&mut self, action: Action) -> Flow {
        debug!(?action, "action");
        self.status.clear();
        match action {
            Action::Quit => return Flow::Quit,
            Action::SelectNext => self.select_offset(1),
            Action::SelectPrev => self.select_offset(-1),
            Action::Increase => self.nudge_amplitude(self.config.deformer.amplitude_step),
            Action::Decrease => self.nudge_amplitude(-self.config.deformer.amplitude_step),
            Action::NextPreset => {
                if let Some(preset) = self.presets.cycle_next().cloned() {
                    ControlEvent::ApplyPreset(preset).apply(&mut self.deformer);
                }
            }
            Action::PrevPreset => {
                if let Some(preset) = self.presets.cycle_prev().cloned() {
                    ControlEvent::ApplyPreset(preset).apply(&mut self.deformer);
                }
            }
            Action::ZeroAll => {
                ControlEvent::Reset.apply(&mut self.deformer);
            }
            Action::ResetDefaults => self.deformer.reset_all(),
            Action::DepthUp => self.depth = (self.depth + DEPTH_STEP).min(MAX_DEPTH),
            Action::DepthDown => self.depth = (self.depth - DEPTH_STEP).max(0.0),
            Action::SavePreset => self.save_preset(),
        }
        Flow::Continue
    }

    fn select_offset(&mut self, offset: isize) {
        let count = self.deformer.mode_count();
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + offset).rem_euclid(count as isize) as usize;
    }

    fn nudge_amplitude(&mut self, delta: f64) {
        let Some(current) = self.deformer.amplitude(self.selected) else {
            return;
        };
        let value = self.config.deformer.clamp_amplitude(current + delta);
        ControlEvent::SetAmplitude {
            index: self.selected,
            value,
        }
        .apply(&mut self.deformer);
    }

    /// First `Saved N` name not already in the library, so presets kept
    /// from earlier sessions are never overwritten.
    fn unused_preset_name(&self) -> String {
        (1..)
            .map(|n| format!("Saved {n}"))
            .find(|name| self.presets.get(name).is_none())
            .unwrap_or_default()
    }

    /// Store the current amplitudes as a user preset, in memory and on disk.
    fn save_preset(&mut self) {
        let preset = self.deformer.current_preset(self.unused_preset_name());
        self.presets.insert(preset.clone());
        self.presets.select(&preset.name);

        let path = match self.config_path.clone() {
            Some(path) => path,
            None => match default_config_path() {
                Ok(path) => path,
                Err(e) => {
                    warn!("cannot locate config file: {e}");
                    self.status = format!("{} kept for this session only", preset.name);
                    return;
                }
            },
        };
        match save_preset_to_path(&preset, &path) {
            Ok(()) => {
                info!(name = %preset.name, path = %path.display(), "preset saved");
                self.status = format!("saved {}", preset.name);
            }
            Err(e) => {
                warn!("failed to save preset: {e}");
                self.status = format!("save failed: {e}");
            }
        }
    }
}
