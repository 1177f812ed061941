// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[generation]` - Backend URL and default request options
//! - `[preview]` - Phone-frame preview settings
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `WALLFORGE_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use wallforge::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when an existing config file fails to parse.
pub const CONFIG_PARSE_WARNING_KEY: &str = "notification-config-parse-warning";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Generation backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationConfig {
    /// Base URL of the wallpaper generation API.
    #[serde(
        default = "default_api_base_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub api_base_url: Option<String>,

    /// Default style label preselected in the studio form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_style: Option<String>,

    /// Default aspect-ratio wire value preselected in the studio form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_aspect_ratio: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            default_style: None,
            default_aspect_ratio: Some(DEFAULT_ASPECT_RATIO.to_string()),
        }
    }
}

/// Phone-frame preview settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PreviewConfig {
    /// Device label preselected in the studio form. Unrecognized labels fall
    /// back gracefully at parse time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Generation backend settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Phone-frame preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_file_path() -> Option<PathBuf> {
    paths::get_config_dir().map(|mut p| {
        p.push(CONFIG_FILE);
        p
    })
}

/// Loads the configuration from the resolved config directory.
///
/// A missing file yields defaults silently; an unreadable or unparsable file
/// yields defaults plus a warning key the caller can surface as a toast.
#[must_use]
pub fn load() -> (Config, Option<&'static str>) {
    match config_file_path() {
        Some(path) => load_from_path(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit path.
#[must_use]
pub fn load_from_path(path: &Path) -> (Config, Option<&'static str>) {
    if !path.exists() {
        return (Config::default(), None);
    }

    match fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<Config>(&contents) {
            Ok(config) => (config, None),
            Err(_) => (Config::default(), Some(CONFIG_PARSE_WARNING_KEY)),
        },
        Err(_) => (Config::default(), Some(CONFIG_PARSE_WARNING_KEY)),
    }
}

/// Saves the configuration to the resolved config directory.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path().ok_or_else(|| {
        crate::error::Error::Config("could not resolve config directory".to_string())
    })?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(
            config.generation.api_base_url.as_deref(),
            Some(DEFAULT_API_BASE_URL)
        );
        assert_eq!(
            config.generation.default_aspect_ratio.as_deref(),
            Some(DEFAULT_ASPECT_RATIO)
        );
        assert!(config.preview.device.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.general.theme_mode = ThemeMode::Dark;
        config.generation.api_base_url = Some("http://example.test:9000".to_string());
        config.preview.device = Some("pixel".to_string());

        save_to_path(&config, &path).expect("save should succeed");
        let (loaded, warning) = load_from_path(&path);

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nonexistent.toml");

        let (config, warning) = load_from_path(&path);
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn malformed_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "this is { not toml").expect("write should succeed");

        let (config, warning) = load_from_path(&path);
        assert_eq!(config, Config::default());
        assert_eq!(warning, Some(CONFIG_PARSE_WARNING_KEY));
    }

    #[test]
    fn partial_file_fills_in_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write should succeed");

        let (config, warning) = load_from_path(&path);
        assert!(warning.is_none());
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.generation, GenerationConfig::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join("dir").join("settings.toml");

        save_to_path(&Config::default(), &path).expect("save should succeed");
        assert!(path.exists());
    }
}
