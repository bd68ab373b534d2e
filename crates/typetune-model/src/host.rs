//! Current and updated values as exchanged with the host document.
//!
//! Hosts report line-height as `auto`, pixels or a percent of the font size,
//! and letter-spacing as pixels or a percent. These values serialize as the
//! short strings the host shows in its UI (`auto`, `24px`, `150%`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A layer's line-height as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineHeightValue {
    #[default]
    Auto,
    Pixels(f64),
    Percent(f64),
}

impl LineHeightValue {
    /// Line-height in px at `font_size`; `None` for `Auto`.
    pub fn to_pixels(self, font_size: f64) -> Option<f64> {
        match self {
            LineHeightValue::Auto => None,
            LineHeightValue::Pixels(px) => Some(px),
            LineHeightValue::Percent(pct) => Some(pct * font_size / 100.0),
        }
    }
}

impl fmt::Display for LineHeightValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeightValue::Auto => write!(f, "auto"),
            LineHeightValue::Pixels(px) => write!(f, "{px}px"),
            LineHeightValue::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl FromStr for LineHeightValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(LineHeightValue::Auto);
        }
        let invalid = || ModelError::InvalidLineHeight(s.to_string());
        match parse_dimension(trimmed).ok_or_else(invalid)? {
            Dimension::Percent(value) => Ok(LineHeightValue::Percent(value)),
            Dimension::Pixels(value) => Ok(LineHeightValue::Pixels(value)),
        }
    }
}

/// A layer's letter-spacing as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LetterSpacingValue {
    Pixels(f64),
    /// Percent of the font size.
    Percent(f64),
}

impl Default for LetterSpacingValue {
    fn default() -> Self {
        LetterSpacingValue::Pixels(0.0)
    }
}

impl LetterSpacingValue {
    pub fn to_pixels(self, font_size: f64) -> f64 {
        match self {
            LetterSpacingValue::Pixels(px) => px,
            LetterSpacingValue::Percent(pct) => pct * font_size / 100.0,
        }
    }
}

impl fmt::Display for LetterSpacingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterSpacingValue::Pixels(px) => write!(f, "{px}px"),
            LetterSpacingValue::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

impl FromStr for LetterSpacingValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_dimension(s.trim()) {
            Some(Dimension::Percent(value)) => Ok(LetterSpacingValue::Percent(value)),
            Some(Dimension::Pixels(value)) => Ok(LetterSpacingValue::Pixels(value)),
            None => Err(ModelError::InvalidLetterSpacing(s.to_string())),
        }
    }
}

enum Dimension {
    Pixels(f64),
    Percent(f64),
}

/// Parses `12`, `12px` or `12%`. Bare numbers are pixels.
fn parse_dimension(s: &str) -> Option<Dimension> {
    let (number, percent) = if let Some(rest) = s.strip_suffix('%') {
        (rest, true)
    } else if let Some(rest) = s
        .strip_suffix("px")
        .or_else(|| s.strip_suffix("PX"))
    {
        (rest, false)
    } else {
        (s, false)
    };
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if percent {
        Dimension::Percent(value)
    } else {
        Dimension::Pixels(value)
    })
}

/// Hosts send either `"24px"` style strings or bare pixel numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

macro_rules! string_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let parsed: Result<Self, ModelError> = match RawValue::deserialize(deserializer)? {
                    RawValue::Number(value) => value.to_string().parse(),
                    RawValue::Text(text) => text.parse(),
                };
                parsed.map_err(serde::de::Error::custom)
            }
        }
    };
}

string_serde!(LineHeightValue);
string_serde!(LetterSpacingValue);

/// Values currently set on a text layer, captured before any mutation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentValues {
    pub line_height: LineHeightValue,
    pub letter_spacing: LetterSpacingValue,
}

/// Values a host writes back onto a text layer or shared style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextUpdate {
    /// Line-height as a percent of the font size.
    pub line_height_percent: f64,
    /// Letter-spacing in px.
    pub letter_spacing_px: f64,
}

impl TextUpdate {
    pub fn line_height(&self) -> LineHeightValue {
        LineHeightValue::Percent(self.line_height_percent)
    }

    pub fn letter_spacing(&self) -> LetterSpacingValue {
        LetterSpacingValue::Pixels(self.letter_spacing_px)
    }
}

impl From<TextUpdate> for CurrentValues {
    /// The values a layer reports once `update` has been written to it.
    fn from(update: TextUpdate) -> Self {
        Self {
            line_height: update.line_height(),
            letter_spacing: update.letter_spacing(),
        }
    }
}
