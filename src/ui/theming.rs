// SPDX-License-Identifier: MPL-2.0
//! Light/dark/system theme selection and the colors derived from it.

use crate::prediction::ConfidenceBand;
use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
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
            // Dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Colors that are not taken from the iced palette.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_secondary: Color,
    pub text_secondary: Color,
    pub brand_primary: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_secondary: palette::GRAY_100,
            text_secondary: palette::GRAY_700,
            brand_primary: palette::PRIMARY_500,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),
            text_secondary: palette::GRAY_200,
            brand_primary: palette::PRIMARY_400,
            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
        }
    }

    /// Scheme matching an iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Accent used for the confidence line of a prediction.
    #[must_use]
    pub fn band_color(&self, band: ConfidenceBand) -> Color {
        match band {
            ConfidenceBand::High => self.success,
            ConfidenceBand::Moderate => self.warning,
            ConfidenceBand::Low => self.error,
        }
    }
}
