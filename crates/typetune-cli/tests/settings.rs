//! Settings file loading and flag precedence.

use std::io::Write;

use tempfile::NamedTempFile;
use typetune_cli::settings::{SettingsOverrides, load_settings, resolve_settings};
use typetune_model::{BgMode, ContextOverride, GridStep, PluginSettings};

fn settings_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(json.as_bytes()).expect("write settings");
    file
}

#[test]
fn loads_partial_settings() {
    let file = settings_file(
        r#"{ "gridStep": 8, "bgMode": "dark", "autoApply": true, "updateStyles": true }"#,
    );
    let settings = load_settings(file.path()).expect("load settings");
    assert_eq!(settings.grid_step, GridStep::Eight);
    assert_eq!(settings.bg_mode, BgMode::Dark);
    assert_eq!(settings.context_override, ContextOverride::Auto);
    assert!(settings.auto_apply);
    assert!(settings.update_styles);
}

#[test]
fn rejects_invalid_grid_step_with_path_context() {
    let file = settings_file(r#"{ "gridStep": 5 }"#);
    let err = load_settings(file.path()).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.starts_with("parse settings"), "{message}");
    assert!(message.contains("invalid grid step 5"), "{message}");
}

#[test]
fn missing_file_is_an_error() {
    let file = settings_file("{}");
    let missing = file.path().with_extension("absent");
    let err = resolve_settings(Some(&missing), &SettingsOverrides::default()).unwrap_err();
    assert!(err.to_string().starts_with("read settings"), "{err}");
}

#[test]
fn flags_override_file_values() {
    let file = settings_file(r#"{ "gridStep": 2, "contextOverride": "body", "bgMode": "light" }"#);
    let overrides = SettingsOverrides {
        grid_step: Some(GridStep::One),
        context_override: None,
        bg_mode: Some(BgMode::Auto),
    };
    let settings = resolve_settings(Some(file.path()), &overrides).expect("resolve settings");
    assert_eq!(settings.grid_step, GridStep::One);
    assert_eq!(settings.context_override, ContextOverride::Body);
    assert_eq!(settings.bg_mode, BgMode::Auto);
}

#[test]
fn no_file_means_defaults() {
    let settings =
        resolve_settings(None, &SettingsOverrides::default()).expect("resolve settings");
    assert_eq!(settings, PluginSettings::default());
}
