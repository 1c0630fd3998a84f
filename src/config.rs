//! Locations of theme data and user preferences.
//!
//! Theme data lives in a data directory (`<data-dir>/gui/default.xml`);
//! preferences live in the per-user directory `~/.gui-themes/`. Both can be
//! overridden through the environment, and the binary embeds a default
//! theme for when no data directory provides one.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Theme shipped with the binary.
pub const DEFAULT_GUI: &str = include_str!("../defaults/gui/default.xml");

/// Theme file path relative to the data directory.
pub const GUI_FILE: &str = "gui/default.xml";

pub struct Config;

impl Config {
    /// Get the base directory (~/.gui-themes/)
    /// Can be overridden with GUI_THEMES_DIR environment variable
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var("GUI_THEMES_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".gui-themes"))
    }

    /// Data directory: explicit override, then GUI_THEMES_DATA_DIR, then
    /// ~/.gui-themes/data
    pub fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Ok(custom_dir) = std::env::var("GUI_THEMES_DATA_DIR") {
            return Ok(PathBuf::from(custom_dir));
        }
        Ok(Self::config_dir()?.join("data"))
    }

    /// Returns: <data-dir>/gui/default.xml
    pub fn gui_path(data_dir: &Path) -> PathBuf {
        data_dir.join(GUI_FILE)
    }

    /// Returns: ~/.gui-themes/preferences.toml
    pub fn preferences_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }
}
