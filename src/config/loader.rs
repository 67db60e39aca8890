#![warn(clippy::all, clippy::pedantic)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::{Config, DisplayConfig};
use crate::game::{MAX_TILE_MARGIN, MAX_TILE_WIDTH};

// Fallback config file path
const CONFIG_FILE_PATH: &str = "config/numberorder.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("config file is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(
        "tile size out of range: width {width} (1..={MAX_TILE_WIDTH}), margin {margin} (0..={MAX_TILE_MARGIN})"
    )]
    TileSize { width: u16, margin: u16 },
}

/// Loads the configuration from the default location and installs it globally.
pub fn load_config_from_file() -> Result<Config, ConfigError> {
    let config = load_config_from_path(&get_config_file_path())?;
    Config::install(config.clone());
    Ok(config)
}

/// Loads a config file, writing the defaults there first if it is missing.
pub fn load_config_from_path(config_path: &Path) -> Result<Config, ConfigError> {
    if !config_path.exists() {
        debug!("No config at {}, writing defaults", config_path.display());
        let default_config = Config::default();
        save_config_to_path(&default_config, config_path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&contents)?;
    validate_display(&config.display)?;
    Ok(config)
}

fn validate_display(display: &DisplayConfig) -> Result<(), ConfigError> {
    if display.tile_width == 0
        || display.tile_width > MAX_TILE_WIDTH
        || display.tile_margin > MAX_TILE_MARGIN
    {
        return Err(ConfigError::TileSize {
            width: display.tile_width,
            margin: display.tile_margin,
        });
    }
    Ok(())
}

pub fn save_config_to_path(config: &Config, config_path: &Path) -> Result<(), ConfigError> {
    // Create parent directory if it doesn't exist
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(config_path, toml_string)?;

    Ok(())
}

// Get the path to the config file
#[must_use]
pub fn get_config_file_path() -> PathBuf {
    // Check for environment variable override
    if let Ok(path) = std::env::var("ORDERING_CONFIG") {
        return PathBuf::from(path);
    }

    // Otherwise use default path in user's config directory
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("numberorder").join("config.toml")
    } else {
        // Fallback to local directory
        PathBuf::from(CONFIG_FILE_PATH)
    }
}
