// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[display]` - Folder sort order and fit-to-window
//! - `[navigation]` - Behavior when a file in the folder cannot be loaded
//! - `[save]` - Encoder settings used by the save command
//!
//! The file is edited by hand; the application only reads it.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `GLIMPSE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use glimpse::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! println!("sorting by {:?}", config.sort_order());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Display and folder listing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Scale large images down to the window instead of showing them 1:1.
    #[serde(
        default = "default_fit_to_window",
        skip_serializing_if = "Option::is_none"
    )]
    pub fit_to_window: Option<bool>,

    /// Order of the folder listing used by next/previous.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fit_to_window: Some(true),
            sort_order: Some(SortOrder::default()),
        }
    }
}

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NavigationConfig {
    /// Consecutive unreadable files skipped before navigation gives up.
    #[serde(
        default = "default_max_skip_attempts",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_skip_attempts: Option<u32>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            max_skip_attempts: default_max_skip_attempts(),
        }
    }
}

/// Save command settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaveConfig {
    /// JPEG encoder quality (1-100).
    #[serde(
        default = "default_jpeg_quality",
        skip_serializing_if = "Option::is_none"
    )]
    pub jpeg_quality: Option<u8>,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub save: SaveConfig,
}

impl Config {
    /// Sort order with the default applied.
    pub fn sort_order(&self) -> SortOrder {
        self.display.sort_order.unwrap_or_default()
    }

    /// JPEG quality clamped to the encoder's accepted range.
    pub fn jpeg_quality(&self) -> u8 {
        self.save
            .jpeg_quality
            .unwrap_or(DEFAULT_JPEG_QUALITY)
            .clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
    }
}

fn default_fit_to_window() -> Option<bool> {
    Some(true)
}

fn default_max_skip_attempts() -> Option<u32> {
    Some(DEFAULT_MAX_SKIP_ATTEMPTS)
}

fn default_jpeg_quality() -> Option<u8> {
    Some(DEFAULT_JPEG_QUALITY)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => {
                    eprintln!("Failed to load config from {}: {}", path.display(), err);
                    (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    )
                }
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Writes configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
