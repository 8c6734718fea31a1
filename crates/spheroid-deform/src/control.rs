//! Control events arriving from the UI layer between frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::deformer::ShapeDeformer;
use crate::preset::Preset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ControlEvent {
    SetAmplitude { index: usize, value: f64 },
    ApplyPreset(Preset),
    /// Zero every amplitude.
    Reset,
}

impl ControlEvent {
    /// Apply to `deformer`. Returns `false` when the event referenced a
    /// mode index that does not exist.
    pub fn apply(&self, deformer: &mut ShapeDeformer) -> bool {
        match self {
            ControlEvent::SetAmplitude { index, value } => {
                let ok = deformer.set_amplitude(*index, *value);
                if !ok {
                    debug!(index, "amplitude event for unknown mode ignored");
                }
                ok
            }
            ControlEvent::ApplyPreset(preset) => {
                deformer.apply_preset(preset);
                true
            }
            ControlEvent::Reset => {
                deformer.zero_all();
                true
            }
        }
    }
}
