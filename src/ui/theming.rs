// SPDX-License-Identifier: MPL-2.0
//! Light, dark or system-following theme selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the effective theme is dark. `System` asks the desktop and
    /// defaults to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// The built-in iced theme for this mode.
    #[must_use]
    pub fn to_iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_map_to_matching_theme() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Light.to_iced_theme(), iced::Theme::Light);
        assert_eq!(ThemeMode::Dark.to_iced_theme(), iced::Theme::Dark);
    }

    #[test]
    fn system_mode_does_not_panic() {
        let _ = ThemeMode::System.to_iced_theme();
    }

    #[test]
    fn serializes_in_lowercase() {
        #[derive(Serialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let text = toml::to_string(&Wrapper {
            mode: ThemeMode::System,
        })
        .expect("serialize");
        assert_eq!(text.trim(), "mode = \"system\"");
    }
}
