// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection and the colors used by custom-drawn widgets.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme preference from `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors of the angle dial for the active theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialColors {
    pub face: Color,
    pub rim: Color,
    pub indicator: Color,
    pub label: Color,
}

#[must_use]
pub fn dial_colors(theme: &Theme) -> DialColors {
    let palette_ext = theme.extended_palette();
    let face = if palette_ext.is_dark {
        Color {
            a: opacity::SURFACE,
            ..palette::GRAY_900
        }
    } else {
        Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        }
    };

    DialColors {
        face,
        rim: palette::GRAY_400,
        indicator: palette::ERROR_500,
        label: theme.palette().text,
    }
}

/// Backdrop drawn behind modal dialogs.
#[must_use]
pub fn modal_backdrop() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..palette::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // Depends on the desktop; only check it does not panic.
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.to_iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), Theme::Dark);
    }

    #[test]
    fn dial_face_follows_theme_brightness() {
        let light = dial_colors(&Theme::Light);
        let dark = dial_colors(&Theme::Dark);
        assert!(light.face.r > dark.face.r);
        assert_eq!(light.indicator, dark.indicator);
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"dark\"").expect("valid toml");
        assert_eq!(parsed.mode, ThemeMode::Dark);
    }
}
