//! Configuration schema types for Spheroid.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the documented defaults.

mod camera;
mod deformer;
mod display;
mod renderer;
mod system;

pub use camera::*;
pub use deformer::*;
pub use display::*;
pub use renderer::*;
pub use system::*;

use serde::{Deserialize, Serialize};
use spheroid_deform::Preset;

/// Root configuration for Spheroid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SpheroidConfig {
    pub deformer: DeformerConfig,
    pub renderer: RendererConfig,
    pub camera: CameraConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    /// User presets, listed after the built-ins.
    pub presets: Vec<Preset>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spheroid_deform::ModeKind;

    #[test]
    fn default_config_has_correct_deformer() {
        let config = SpheroidConfig::default();
        assert!((config.deformer.base_radius - 200.0).abs() < f64::EPSILON);
        assert_eq!(config.deformer.amplitude_min, 0.0);
        assert_eq!(config.deformer.amplitude_max, 50.0);
        assert!(config.deformer.initial_preset.is_none());
        assert!(config.deformer.extra_modes.is_empty());
    }

    #[test]
    fn default_config_has_correct_renderer() {
        let config = SpheroidConfig::default();
        assert_eq!(config.renderer.light_direction, [0.5, -0.5, 0.7]);
        assert_eq!(config.renderer.resolution_theta, 40);
        assert_eq!(config.renderer.resolution_phi, 20);
        assert_eq!(config.renderer.background, "#000000");
        assert_eq!(config.renderer.outline, "rgba(255,255,255,25)");
    }

    #[test]
    fn default_config_has_correct_camera_and_display() {
        let config = SpheroidConfig::default();
        assert!((config.camera.orbit_radius - 500.0).abs() < f64::EPSILON);
        assert!((config.camera.orbit_speed - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.display.width, 480);
        assert_eq!(config.display.height, 480);
        assert_eq!(config.display.cell_pixels, 4);
        assert_eq!(config.display.fps, 30);
    }

    #[test]
    fn default_logging_is_info() {
        let config = SpheroidConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "spheroid=info");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn clamp_amplitude_uses_range() {
        let config = DeformerConfig::default();
        assert_eq!(config.clamp_amplitude(-4.0), 0.0);
        assert_eq!(config.clamp_amplitude(12.5), 12.5);
        assert_eq!(config.clamp_amplitude(80.0), 50.0);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[renderer]
depth = 0.0

[[deformer.extra_modes]]
name = "Bulge"
amplitude = 4.0
kind = { type = "harmonic", theta_freq = 2.0, phi_freq = 1.0 }

[[presets]]
name = "Mine"
amplitudes = [1.0, 2.0]
"#;
        let config: SpheroidConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.renderer.depth, 0.0);
        assert_eq!(config.renderer.resolution_theta, 40);
        assert_eq!(config.deformer.extra_modes.len(), 1);
        let mode = config.deformer.extra_modes[0].to_mode();
        assert_eq!(mode.name, "Bulge");
        assert_eq!(mode.amplitude, 4.0);
        assert_eq!(
            mode.kind,
            ModeKind::Harmonic {
                theta_freq: 2.0,
                phi_freq: 1.0
            }
        );
        assert_eq!(config.presets[0].amplitudes, vec![1.0, 2.0]);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: SpheroidConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
