//! Validation for smaller config sections: camera, display, and presets.

use std::collections::HashSet;

use crate::schema::SpheroidConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Most amplitudes a single preset may carry.
const MAX_PRESET_AMPLITUDES: usize = 64;

/// Validate camera constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &SpheroidConfig) {
    validate_range_f64(
        errors,
        "camera.orbit_radius",
        config.camera.orbit_radius,
        1.0,
        100_000.0,
    );
    validate_range_f64(
        errors,
        "camera.orbit_speed",
        config.camera.orbit_speed,
        -10.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "camera.rotation_speed",
        config.camera.rotation_speed,
        -1000.0,
        1000.0,
    );
    if !config.camera.rotation_x.is_finite() {
        errors.push("camera.rotation_x must be finite".into());
    }
}

/// Validate display constraints.
pub(crate) fn validate_display(errors: &mut Vec<String>, config: &SpheroidConfig) {
    validate_range(errors, "display.width", config.display.width, 8, 4096);
    validate_range(errors, "display.height", config.display.height, 8, 4096);
    validate_range(errors, "display.cell_pixels", config.display.cell_pixels, 1, 16);
    validate_range(errors, "display.fps", config.display.fps, 1, 240);
}

/// Validate user presets: non-empty unique names, bounded length.
pub(crate) fn validate_presets(errors: &mut Vec<String>, config: &SpheroidConfig) {
    let mut seen = HashSet::new();
    for (i, preset) in config.presets.iter().enumerate() {
        let name = preset.name.trim();
        if name.is_empty() {
            errors.push(format!("presets[{i}].name must not be empty"));
        } else if !seen.insert(name.to_ascii_lowercase()) {
            errors.push(format!("presets[{i}].name {name:?} is duplicated"));
        }
        if preset.amplitudes.len() > MAX_PRESET_AMPLITUDES {
            errors.push(format!(
                "presets[{i}] has {} amplitudes (max {MAX_PRESET_AMPLITUDES})",
                preset.amplitudes.len()
            ));
        }
        if preset.amplitudes.iter().any(|a| !a.is_finite()) {
            errors.push(format!("presets[{i}] contains a non-finite amplitude"));
        }
    }
}
