//! Write SpheroidConfig to TOML on disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use spheroid_common::ConfigError;
use spheroid_deform::Preset;

use crate::schema::SpheroidConfig;
use crate::toml_loader::{default_config_path, load_from_path};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to the platform default path (`~/.config/spheroid/config.toml`).
pub fn save_config(config: &SpheroidConfig) -> Result<(), ConfigError> {
    let path = default_config_path()?;
    save_config_to_path(config, &path)
}

/// Write config to a specific path.
///
/// Creates parent directories if they don't exist. Uses atomic write
/// (write to `.tmp` file, then rename) to prevent partial writes.
pub fn save_config_to_path(config: &SpheroidConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail across filesystems or on Windows with an open target.
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

/// Add `preset` to the config file at `path`, replacing any preset with
/// the same (case-insensitive) name. A missing file starts from defaults.
pub fn save_preset_to_path(preset: &Preset, path: &Path) -> Result<(), ConfigError> {
    let mut config = match load_from_path(path) {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(_)) => SpheroidConfig::default(),
        Err(e) => return Err(e),
    };
    upsert_preset(&mut config, preset.clone());
    save_config_to_path(&config, path)
}

/// Insert or replace a user preset by case-insensitive name.
pub fn upsert_preset(config: &mut SpheroidConfig, preset: Preset) {
    match config
        .presets
        .iter_mut()
        .find(|p| p.name.eq_ignore_ascii_case(&preset.name))
    {
        Some(existing) => *existing = preset,
        None => config.presets.push(preset),
    }
}

// =============================================================================
// TESTS
// =============================================================================
