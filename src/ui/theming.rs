// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection and semantic color mapping.

use crate::api::ScoreBand;
use crate::ui::design_tokens::palette;
use dark_light;
use iced::Color;
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
    /// Every selectable mode, in menu order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Label key for the theme selector.
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

/// Color the overall score is rendered in: green for a strong match,
/// orange for a moderate one, red below that.
#[must_use]
pub fn score_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => palette::SUCCESS_500,
        ScoreBand::Moderate => palette::WARNING_500,
        ScoreBand::Weak => palette::ERROR_500,
    }
}
