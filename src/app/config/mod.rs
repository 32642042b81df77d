// SPDX-License-Identifier: MPL-2.0
//! Read-only user settings from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[editor]` - Dial size, preview size, resize filter, export extension
//!
//! Every key is optional. The file is never written by the application.
//!
//! # Examples
//!
//! ```no_run
//! use iced_pivot::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings ignored: {key}");
//! }
//! println!("dial size: {}", config.editor.dial_size());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::editor::SessionOptions;
use crate::error::Result;
use crate::media::ResizeFilter;
use crate::ui::image_editor::EditorSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Editor settings. Out-of-range values are clamped by the accessors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EditorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dial_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_max_size: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resize_filter: Option<ResizeFilter>,

    /// Extension without the dot, e.g. "png".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_export_extension: Option<String>,
}

impl EditorConfig {
    #[must_use]
    pub fn dial_size(&self) -> f32 {
        self.dial_size
            .filter(|size| size.is_finite())
            .map_or(DEFAULT_DIAL_SIZE, |size| size.clamp(MIN_DIAL_SIZE, MAX_DIAL_SIZE))
    }

    #[must_use]
    pub fn preview_max_size(&self) -> u32 {
        self.preview_max_size
            .map_or(DEFAULT_PREVIEW_MAX_SIZE, |size| {
                size.clamp(MIN_PREVIEW_MAX_SIZE, MAX_PREVIEW_MAX_SIZE)
            })
    }

    #[must_use]
    pub fn resize_filter(&self) -> ResizeFilter {
        self.resize_filter.unwrap_or_default()
    }

    /// The configured extension with any leading dot removed; blank falls
    /// back to the default.
    #[must_use]
    pub fn default_export_extension(&self) -> String {
        self.default_export_extension
            .as_deref()
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_EXPORT_EXTENSION)
            .to_lowercase()
    }

    /// Settings handed to the editor screen.
    #[must_use]
    pub fn to_editor_settings(&self) -> EditorSettings {
        EditorSettings {
            dial_size: self.dial_size(),
            preview_max_size: self.preview_max_size(),
            session: SessionOptions {
                resize_filter: self.resize_filter(),
                default_export_extension: self.default_export_extension(),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub editor: EditorConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {other}"))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the resolved config directory.
///
/// Returns `(config, warning)`. A missing file yields defaults without a
/// warning; an unreadable or malformed file yields defaults plus the i18n key
/// of a warning toast.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from `base_dir` instead of the resolved directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        log::debug!("No config directory available; using defaults");
        return (Config::default(), None);
    };

    if !path.exists() {
        log::debug!("No config at {}; using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            log::warn!("Ignoring {}: {err}", path.display());
            (
                Config::default(),
                Some("notification-config-load-error".to_string()),
            )
        }
    }
}

/// Parses the configuration file at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::error::Error::Io) if the file cannot be read
/// and [`Error::Config`](crate::error::Error::Config) if it is not valid.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
