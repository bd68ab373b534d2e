pub mod enums;
pub mod error;
pub mod host;
pub mod options;
pub mod paint;
pub mod typography;

pub use enums::{BgMode, ContextOverride, FontCategory, TextContext};
pub use error::ModelError;
pub use host::{CurrentValues, LetterSpacingValue, LineHeightValue, TextUpdate};
pub use options::{GridStep, PluginSettings};
pub use paint::{GradientStop, Paint, PaintKind, Rgb};
pub use typography::{TypographyInput, TypographyResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_builder_sets_fields() {
        let input = TypographyInput::new("Inter", 16.0)
            .with_weight(600)
            .with_style("Semi Bold")
            .with_uppercase(true)
            .with_dark_background(true);
        assert_eq!(input.font_family, "Inter");
        assert_eq!(input.font_weight, 600);
        assert!(input.is_uppercase);
        assert!(input.is_dark_bg);
    }

    #[test]
    fn result_serializes_camel_case() {
        let result = TypographyResult {
            line_height: 24.0,
            line_height_raw: 23.2,
            line_height_percent: 150.0,
            letter_spacing: -0.06,
            letter_spacing_em: -0.004,
            letter_spacing_percent: -0.4,
            font_info: "Inter · 16px · Regular".to_string(),
            is_approximate: false,
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains("\"lineHeightPercent\":150.0"));
        let round: TypographyResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
    }
}
