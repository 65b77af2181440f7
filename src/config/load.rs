//! The main config loading module for kupo.
//!
//! Handles loading and deserializing settings from `kupo.toml` in the user
//! configuration directory. A missing or invalid file falls back to the
//! built-in defaults; startup never fails on configuration.

use crate::config::{General, Keys, Theme};

use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Raw configuration as read from the toml file.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    theme: Theme,
    keys: Keys,
}

/// Main configuration struct for kupo.
#[derive(Debug)]
pub struct Config {
    general: General,
    theme: Theme,
    keys: Keys,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            theme: raw.theme,
            keys: raw.keys,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from(RawConfig::default())
    }
}

impl Config {
    /// Loads the configuration from `kupo.toml`, falling back to defaults
    /// when the file is missing or malformed.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => Config::from(raw),
                Err(_) => Config::default(),
            },
            Err(_) => Config::default(),
        }
    }

    /// `<config dir>/kupo/kupo.toml`.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kupo").join("kupo.toml"))
    }

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn keys(&self) -> &Keys {
        &self.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_config_parses_partial_sections() -> Result<(), Box<dyn std::error::Error>> {
        let toml_content = r#"
            [general]
            show_hidden = true
            instant_preview = false

            [keys]
            quit = ["x"]
        "#;

        let raw: RawConfig = toml::from_str(toml_content)?;
        let config = Config::from(raw);

        assert!(config.general().show_hidden());
        assert!(!config.general().instant_preview());
        assert!(config.general().dirs_first(), "unset fields keep defaults");
        assert_eq!(config.keys().quit(), ["x".to_string()]);
        assert_eq!(config.keys().go_up().len(), 2);
        Ok(())
    }

    #[test]
    fn default_config_is_complete() {
        let config = Config::default();
        assert!(!config.keys().go_into_dir().is_empty());
        assert!(!config.keys().help().is_empty());
    }
}
