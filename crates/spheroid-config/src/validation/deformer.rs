//! Deformer configuration validation (radius, amplitude range, extra modes).

use crate::schema::SpheroidConfig;

use super::helpers::validate_range_f64;

/// Validate all deformer-related constraints.
pub(crate) fn validate_deformer(errors: &mut Vec<String>, config: &SpheroidConfig) {
    let deformer = &config.deformer;

    if !deformer.base_radius.is_finite() || deformer.base_radius <= 0.0 {
        errors.push(format!(
            "deformer.base_radius = {} must be a positive number",
            deformer.base_radius
        ));
    }

    if !(deformer.amplitude_min.is_finite() && deformer.amplitude_max.is_finite())
        || deformer.amplitude_min >= deformer.amplitude_max
    {
        errors.push(format!(
            "deformer.amplitude_min = {} must be below deformer.amplitude_max = {}",
            deformer.amplitude_min, deformer.amplitude_max
        ));
    }

    if !deformer.amplitude_step.is_finite() || deformer.amplitude_step <= 0.0 {
        errors.push(format!(
            "deformer.amplitude_step = {} must be a positive number",
            deformer.amplitude_step
        ));
    }

    for (i, mode) in deformer.extra_modes.iter().enumerate() {
        if mode.name.trim().is_empty() {
            errors.push(format!("deformer.extra_modes[{i}].name must not be empty"));
        }
        validate_range_f64(
            errors,
            &format!("deformer.extra_modes[{i}].amplitude"),
            mode.amplitude,
            deformer.amplitude_min,
            deformer.amplitude_max,
        );
    }
}
