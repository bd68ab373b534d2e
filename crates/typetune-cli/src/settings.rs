//! Settings file loading and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use typetune_model::{BgMode, ContextOverride, GridStep, PluginSettings};

/// Reads settings from a JSON file. Missing keys keep their defaults.
pub fn load_settings(path: &Path) -> Result<PluginSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read settings {}", path.display()))?;
    let settings: PluginSettings = serde_json::from_str(&text)
        .with_context(|| format!("parse settings {}", path.display()))?;
    debug!(path = %path.display(), grid_step = %settings.grid_step, "loaded settings");
    Ok(settings)
}

/// Values given on the command line, which win over the settings file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub grid_step: Option<GridStep>,
    pub context_override: Option<ContextOverride>,
    pub bg_mode: Option<BgMode>,
}

impl SettingsOverrides {
    pub fn apply(&self, mut settings: PluginSettings) -> PluginSettings {
        if let Some(step) = self.grid_step {
            settings.grid_step = step;
        }
        if let Some(context) = self.context_override {
            settings.context_override = context;
        }
        if let Some(mode) = self.bg_mode {
            settings.bg_mode = mode;
        }
        settings
    }
}

/// Loads `path` when given, otherwise defaults, then applies `overrides`.
pub fn resolve_settings(
    path: Option<&Path>,
    overrides: &SettingsOverrides,
) -> Result<PluginSettings> {
    let base = match path {
        Some(path) => load_settings(path)?,
        None => PluginSettings::default(),
    };
    Ok(overrides.apply(base))
}
