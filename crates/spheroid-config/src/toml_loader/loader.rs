//! Reading `config.toml` into a [`SpheroidConfig`].

use std::io;
use std::path::Path;

use crate::schema::SpheroidConfig;
use crate::validation;
use spheroid_common::ConfigError;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};
use super::template::default_config_toml;

/// Read one config file. Absent sections and fields take their defaults.
///
/// A missing file is [`ConfigError::FileNotFound`]. Out-of-range values are
/// logged and kept; callers that need a valid config run
/// [`validation::validate`] on the result.
pub fn load_from_path(path: &Path) -> Result<SpheroidConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!("cannot read {}: {e}", path.display())));
        }
    };

    let config = parse(&content, path)?;
    info!(
        "loaded config from {} ({} user presets, {} extra modes)",
        path.display(),
        config.presets.len(),
        config.deformer.extra_modes.len()
    );
    Ok(config)
}

/// Load the per-user config, seeding it from the template on first run.
pub fn load_default() -> Result<SpheroidConfig, ConfigError> {
    let path = default_config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }

    create_default_config(&path)?;
    parse(&default_config_toml(), &path)
}

/// `origin` only labels errors and warnings.
fn parse(content: &str, origin: &Path) -> Result<SpheroidConfig, ConfigError> {
    let config: SpheroidConfig = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", origin.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}; keeping the values as written", origin.display());
    }
    Ok(config)
}
