//! User-configurable tuning settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::enums::{BgMode, ContextOverride};
use crate::error::ModelError;

/// Pixel quantum line-heights snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum GridStep {
    One,
    Two,
    #[default]
    Four,
    Eight,
}

impl GridStep {
    pub fn as_px(&self) -> f64 {
        f64::from(u32::from(*self))
    }
}

impl From<GridStep> for u32 {
    fn from(step: GridStep) -> Self {
        match step {
            GridStep::One => 1,
            GridStep::Two => 2,
            GridStep::Four => 4,
            GridStep::Eight => 8,
        }
    }
}

impl TryFrom<u32> for GridStep {
    type Error = ModelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GridStep::One),
            2 => Ok(GridStep::Two),
            4 => Ok(GridStep::Four),
            8 => Ok(GridStep::Eight),
            other => Err(ModelError::InvalidGridStep(other.to_string())),
        }
    }
}

impl fmt::Display for GridStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u32::from(*self))
    }
}

impl FromStr for GridStep {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: u32 = trimmed
            .strip_suffix("px")
            .unwrap_or(trimmed)
            .parse()
            .map_err(|_| ModelError::InvalidGridStep(trimmed.to_string()))?;
        GridStep::try_from(value)
    }
}

/// Settings loaded once per session and adjusted by the user.
///
/// Every key is optional when deserializing; missing keys keep their
/// defaults, so older settings files stay loadable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginSettings {
    pub grid_step: GridStep,
    /// Overrides the background analyzer unless `Auto`.
    pub bg_mode: BgMode,
    pub context_override: ContextOverride,
    /// Write results back without being asked.
    pub auto_apply: bool,
    /// Also write results into the shared text styles layers use.
    pub update_styles: bool,
}

impl PluginSettings {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_grid_step(mut self, step: GridStep) -> Self {
        self.grid_step = step;
        self
    }

    #[must_use]
    pub fn with_bg_mode(mut self, mode: BgMode) -> Self {
        self.bg_mode = mode;
        self
    }

    #[must_use]
    pub fn with_context_override(mut self, context: ContextOverride) -> Self {
        self.context_override = context;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_accepts_only_supported_values() {
        assert_eq!(GridStep::try_from(8), Ok(GridStep::Eight));
        assert_eq!(GridStep::try_from(3), Err(ModelError::InvalidGridStep("3".to_string())));
        assert_eq!("2px".parse::<GridStep>(), Ok(GridStep::Two));
        assert_eq!(GridStep::default().as_px(), 4.0);
    }
}
