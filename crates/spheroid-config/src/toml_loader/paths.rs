//! Where the per-user `config.toml` lives, and seeding it on first run.

use std::io;
use std::path::{Path, PathBuf};

use spheroid_common::ConfigError;
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "spheroid";
const CONFIG_FILE: &str = "config.toml";

/// `<user config dir>/spheroid/config.toml`, e.g. `~/.config/spheroid/config.toml`
/// on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| config_file_in(&base))
        .ok_or_else(|| ConfigError::ParseError("no per-user config directory on this platform".into()))
}

pub(super) fn config_file_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(CONFIG_FILE)
}

/// Write the commented template to `path`, creating missing directories.
///
/// Every setting in the template is commented out, so the seeded file
/// loads as [`SpheroidConfig::default()`](crate::SpheroidConfig).
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_error("create", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_error("write", path, e))?;

    info!("seeded config template at {}", path.display());
    Ok(())
}

fn io_error(action: &str, path: &Path, err: io::Error) -> ConfigError {
    ConfigError::ParseError(format!("cannot {action} {}: {err}", path.display()))
}
