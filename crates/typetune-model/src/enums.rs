//! Type-safe enumerations for typography classification.
//!
//! Each enum round-trips through the lowercase labels used by settings
//! files and command-line flags (`sans-serif`, `display`, `auto`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Broad design category of a typeface.
///
/// Selects the fallback profile when a family is not in the profile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontCategory {
    #[default]
    SansSerif,
    Serif,
    Mono,
    Display,
}

impl FontCategory {
    /// Returns the canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            FontCategory::SansSerif => "sans-serif",
            FontCategory::Serif => "serif",
            FontCategory::Mono => "mono",
            FontCategory::Display => "display",
        }
    }
}

impl fmt::Display for FontCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FontCategory {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "sans-serif" | "sans serif" | "sans" => Ok(FontCategory::SansSerif),
            "serif" => Ok(FontCategory::Serif),
            "mono" | "monospace" => Ok(FontCategory::Mono),
            "display" => Ok(FontCategory::Display),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// Typographic role of a text layer, derived from its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextContext {
    /// Headlines and hero text (32px and up).
    Display,
    /// Running text.
    Body,
    /// Small print, labels and footnotes.
    Caption,
}

impl TextContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextContext::Display => "display",
            TextContext::Body => "body",
            TextContext::Caption => "caption",
        }
    }
}

impl fmt::Display for TextContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TextContext {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "display" => Ok(TextContext::Display),
            "body" => Ok(TextContext::Body),
            "caption" => Ok(TextContext::Caption),
            _ => Err(ModelError::UnknownContext(s.to_string())),
        }
    }
}

/// Context selection: classify by size, or force a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextOverride {
    #[default]
    Auto,
    Display,
    Body,
    Caption,
}

impl ContextOverride {
    /// The forced context, or `None` for automatic classification.
    pub fn forced(&self) -> Option<TextContext> {
        match self {
            ContextOverride::Auto => None,
            ContextOverride::Display => Some(TextContext::Display),
            ContextOverride::Body => Some(TextContext::Body),
            ContextOverride::Caption => Some(TextContext::Caption),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self.forced() {
            Some(context) => context.as_str(),
            None => "auto",
        }
    }
}

impl From<TextContext> for ContextOverride {
    fn from(context: TextContext) -> Self {
        match context {
            TextContext::Display => ContextOverride::Display,
            TextContext::Body => ContextOverride::Body,
            TextContext::Caption => ContextOverride::Caption,
        }
    }
}

impl fmt::Display for ContextOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContextOverride {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(ContextOverride::Auto);
        }
        s.parse::<TextContext>().map(ContextOverride::from)
    }
}

/// How the dark-background flag is decided for a text layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BgMode {
    /// Estimate from the layer's ancestor fills.
    #[default]
    Auto,
    /// Always treat the background as light.
    Light,
    /// Always treat the background as dark.
    Dark,
}

impl BgMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BgMode::Auto => "auto",
            BgMode::Light => "light",
            BgMode::Dark => "dark",
        }
    }

    /// Resolves the dark flag, running `analyze` only in `Auto` mode.
    pub fn resolve(&self, analyze: impl FnOnce() -> bool) -> bool {
        match self {
            BgMode::Auto => analyze(),
            BgMode::Light => false,
            BgMode::Dark => true,
        }
    }
}

impl fmt::Display for BgMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BgMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(BgMode::Auto),
            "light" => Ok(BgMode::Light),
            "dark" => Ok(BgMode::Dark),
            _ => Err(ModelError::UnknownBgMode(s.to_string())),
        }
    }
}
