//! Spheroid configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spheroid_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::SpheroidConfig;
pub use toml_writer::{save_config, save_config_to_path};

use spheroid_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a default `config.toml` if none exists.
pub fn load_config() -> Result<SpheroidConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SpheroidConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = SpheroidConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"deformer\""));
        assert!(json.contains("\"renderer\""));
        assert!(json.contains("\"camera\""));
        assert!(json.contains("\"display\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"presets\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = SpheroidConfig::default();
        let json = config_to_json(&config);
        let parsed: SpheroidConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.deformer.base_radius, 200.0);
        assert_eq!(parsed.renderer.outline, "rgba(255,255,255,25)");
    }
}
