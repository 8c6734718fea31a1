//! Full configuration validation.
//!
//! Validates numeric ranges, colors, and preset names. Each domain has its
//! own submodule; this orchestrator calls them all and collects errors
//! into a single `ConfigError`.

mod deformer;
mod helpers;
mod misc;
mod renderer;


use crate::schema::SpheroidConfig;
use spheroid_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SpheroidConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    deformer::validate_deformer(&mut errors, config);
    renderer::validate_renderer(&mut errors, config);
    misc::validate_camera(&mut errors, config);
    misc::validate_display(&mut errors, config);
    misc::validate_presets(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
