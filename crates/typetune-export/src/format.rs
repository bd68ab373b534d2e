//! Export target formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("unknown export format '{0}' (expected css, css-fluid, ios or android)")]
    UnknownFormat(String),
}

/// Target platform for a code snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    #[default]
    Css,
    /// `clamp()` declarations scaling between 375px and 1440px viewports.
    CssFluid,
    Ios,
    Android,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Css,
        ExportFormat::CssFluid,
        ExportFormat::Ios,
        ExportFormat::Android,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::CssFluid => "css-fluid",
            ExportFormat::Ios => "ios",
            ExportFormat::Android => "android",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "css-fluid" | "fluid" => Ok(ExportFormat::CssFluid),
            "ios" | "swift" => Ok(ExportFormat::Ios),
            "android" => Ok(ExportFormat::Android),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}
