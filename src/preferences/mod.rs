//! User preferences
//!
//! String-keyed values persisted as a flat TOML table. Accessor modules such
//! as [`lobby`] wrap individual keys with typed getters and setters.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

pub mod lobby;

/// Key-value store behind the preference accessors.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> bool;
    fn set_bool(&mut self, key: &str, value: bool);
    fn get_string(&self, key: &str, default: &str) -> String;
    fn set_string(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct Preferences {
    values: toml::Table,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Preferences {
    /// Empty, in-memory preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `path`. A missing file yields empty preferences that will be
    /// written to `path` on save.
    pub fn load(path: &Path) -> Result<Self> {
        let values = if path.exists() {
            let contents = fs::read_to_string(path)
                .context(format!("Failed to read preferences file: {:?}", path))?;
            toml::from_str(&contents)
                .context(format!("Failed to parse preferences file: {:?}", path))?
        } else {
            tracing::debug!("No preferences at {:?}, starting empty", path);
            toml::Table::new()
        };

        Ok(Self {
            values,
            path: Some(path.to_path_buf()),
            dirty: false,
        })
    }

    /// Load from the default location (~/.gui-themes/preferences.toml).
    pub fn load_default() -> Result<Self> {
        Self::load(&Config::preferences_path()?)
    }

    /// Write back to the file this was loaded from, if anything changed.
    pub fn save(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_string =
            toml::to_string_pretty(&self.values).context("Failed to serialize preferences")?;
        fs::write(path, toml_string).context("Failed to write preferences file")?;

        tracing::info!("Saved preferences to {:?}", path);
        self.dirty = false;
        Ok(())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn set_value(&mut self, key: &str, value: toml::Value) {
        if self.values.get(key) != Some(&value) {
            self.values.insert(key.to_string(), value);
            self.dirty = true;
        }
    }
}

impl PreferenceStore for Preferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(toml::Value::Boolean(b)) => *b,
            // Older files store flags as strings
            Some(toml::Value::String(s)) => match s.as_str() {
                "yes" | "true" => true,
                "no" | "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.set_value(key, toml::Value::Boolean(value));
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(toml::Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    fn set_string(&mut self, key: &str, value: &str) {
        self.set_value(key, toml::Value::String(value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let prefs = Preferences::new();
        assert!(!prefs.get_bool("fi_invert", false));
        assert!(prefs.get_bool("lobby_auto_open_whisper_windows", true));
        assert_eq!(prefs.get_string("login", "guest"), "guest");
    }

    #[test]
    fn test_set_and_get() {
        let mut prefs = Preferences::new();
        prefs.set_bool("fi_invert", true);
        prefs.set_string("login", "Konrad");
        assert!(prefs.get_bool("fi_invert", false));
        assert_eq!(prefs.get_string("login", ""), "Konrad");
        assert!(prefs.is_dirty());
    }

    #[test]
    fn test_string_flags_are_read() {
        let values: toml::Table = toml::from_str("a = \"yes\"\nb = \"no\"\nc = 3").unwrap();
        let prefs = Preferences {
            values,
            ..Default::default()
        };
        assert!(prefs.get_bool("a", false));
        assert!(!prefs.get_bool("b", true));
        assert!(prefs.get_bool("c", true));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut prefs = Preferences::load(&path).unwrap();
        assert!(!prefs.get_bool("fi_vacant_slots", false));
        prefs.set_bool("fi_vacant_slots", true);
        prefs.save().unwrap();
        assert!(!prefs.is_dirty());

        let reloaded = Preferences::load(&path).unwrap();
        assert!(reloaded.get_bool("fi_vacant_slots", false));
    }

    #[test]
    fn test_unchanged_value_is_not_dirty() {
        let mut prefs = Preferences::new();
        prefs.set_bool("fi_invert", true);
        prefs.dirty = false;
        prefs.set_bool("fi_invert", true);
        assert!(!prefs.is_dirty());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();
        assert!(Preferences::load(&path).is_err());
    }
}
