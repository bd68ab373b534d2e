//! Calculation input and output value objects.

use serde::{Deserialize, Serialize};

/// One text configuration to tune.
///
/// Built once per calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyInput {
    /// Family name as reported by the host (e.g. "Inter", "SF Pro Display").
    pub font_family: String,
    /// Font size in px.
    pub font_size: f64,
    /// Numeric weight, 100-900.
    pub font_weight: u16,
    /// Style label as reported by the host (e.g. "Semibold Italic"). May be empty.
    pub font_style: String,
    pub is_uppercase: bool,
    pub is_dark_bg: bool,
}

impl TypographyInput {
    /// Regular weight, no style label, mixed case, light background.
    pub fn new(font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
            font_weight: 400,
            font_style: String::new(),
            is_uppercase: false,
            is_dark_bg: false,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = style.into();
        self
    }

    #[must_use]
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.is_uppercase = uppercase;
        self
    }

    #[must_use]
    pub fn with_dark_background(mut self, dark: bool) -> Self {
        self.is_dark_bg = dark;
        self
    }
}

/// Tuned line-height and letter-spacing for one input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyResult {
    /// Line-height in px, snapped to the grid.
    pub line_height: f64,
    /// Line-height in px before snapping, 2 decimals.
    pub line_height_raw: f64,
    /// Snapped line-height as a percent of font size, 1 decimal.
    pub line_height_percent: f64,
    /// Letter-spacing in px, 2 decimals.
    pub letter_spacing: f64,
    /// Letter-spacing in em, 4 decimals.
    pub letter_spacing_em: f64,
    /// Letter-spacing as a percent of font size, 1 decimal.
    pub letter_spacing_percent: f64,
    /// Descriptor such as "Inter · 16px · Regular".
    pub font_info: String,
    /// True when a category fallback profile was used.
    pub is_approximate: bool,
}
