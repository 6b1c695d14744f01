use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::core::InterfgenConfig;
use crate::errors::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".interfgen.toml";

/// Directories searched above the starting one, the start included
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse TOML text and check the values that can be checked without a sheet
pub fn parse_and_validate_config(contents: &str) -> Result<InterfgenConfig> {
    let config = toml::from_str::<InterfgenConfig>(contents)
        .map_err(|e| Error::config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e)))?;

    // Fail early on a zone list that would be rejected at generation time
    config.zone_order()?;

    Ok(config)
}

/// Load a config file the user pointed at explicitly; any failure is an error
pub fn load_config_from(path: &Path) -> Result<InterfgenConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    parse_and_validate_config(&contents)
}

/// Load a discovered config file; problems are logged and the file is skipped
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<InterfgenConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "Skipping unreadable config file");
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %config_path.display(), "{}. Using defaults.", e);
            None
        }
    }
}

/// Search `start` and up to nine of its ancestors for a config file
pub fn discover_config(start: PathBuf) -> Option<InterfgenConfig> {
    start
        .ancestors()
        .take(MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
}

/// Config discovered from the working directory, or the built-in defaults
pub fn load_config() -> InterfgenConfig {
    let discovered = match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(error = %e, "Cannot read working directory; using default config");
            None
        }
    };
    discovered.unwrap_or_else(|| {
        tracing::debug!("No {} found; using default config", CONFIG_FILE_NAME);
        InterfgenConfig::default()
    })
}
