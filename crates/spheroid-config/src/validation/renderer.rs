//! Renderer configuration validation (light, projection, mesh, colors).

use crate::schema::SpheroidConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

/// Validate all renderer-related constraints.
pub(crate) fn validate_renderer(errors: &mut Vec<String>, config: &SpheroidConfig) {
    let renderer = &config.renderer;

    let [x, y, z] = renderer.light_direction;
    let len_sq = x * x + y * y + z * z;
    if !len_sq.is_finite() || len_sq == 0.0 {
        errors.push(format!(
            "renderer.light_direction = [{x}, {y}, {z}] must be a non-zero vector"
        ));
    }

    validate_range_f64(errors, "renderer.depth", renderer.depth, 0.0, 10.0);
    validate_range(
        errors,
        "renderer.resolution_theta",
        renderer.resolution_theta,
        1,
        512,
    );
    validate_range(
        errors,
        "renderer.resolution_phi",
        renderer.resolution_phi,
        1,
        512,
    );
    validate_color(errors, "renderer.background", &renderer.background);
    validate_color(errors, "renderer.outline", &renderer.outline);
}
