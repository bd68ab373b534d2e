//! Snippet output for every format.

use insta::assert_snapshot;
use typetune_core::{CalcParams, calculate_with};
use typetune_export::{ExportFormat, export_code};
use typetune_model::{TypographyInput, TypographyResult};

fn body_result() -> TypographyResult {
    TypographyResult {
        line_height: 24.0,
        line_height_raw: 23.2,
        line_height_percent: 150.0,
        letter_spacing: 0.2,
        letter_spacing_em: 0.0125,
        letter_spacing_percent: 1.3,
        font_info: "Inter · 16px · Regular".to_string(),
        is_approximate: false,
    }
}

fn without_tracking() -> TypographyResult {
    TypographyResult {
        letter_spacing: 0.0,
        letter_spacing_em: 0.0,
        letter_spacing_percent: 0.0,
        ..body_result()
    }
}

#[test]
fn css() {
    assert_snapshot!(export_code(&body_result(), 16.0, ExportFormat::Css), @r"
    font-size: 16px;
    line-height: 24px; /* 150% */
    letter-spacing: 0.0125em; /* 1.3% */
    ");
}

#[test]
fn css_omits_zero_letter_spacing() {
    let code = export_code(&without_tracking(), 16.0, ExportFormat::Css);
    assert!(code.contains("font-size: 16px"));
    assert!(!code.contains("letter-spacing"));
    assert_eq!(code.lines().count(), 2);
}

#[test]
fn css_fluid() {
    assert_snapshot!(export_code(&body_result(), 16.0, ExportFormat::CssFluid), @r"
    font-size: clamp(14px, 0.38vw + 12.58px, 18px);
    line-height: clamp(21px, 0.56vw + 18.9px, 27px);
    letter-spacing: 0.0125em;
    ");
}

#[test]
fn css_fluid_omits_zero_letter_spacing() {
    let code = export_code(&without_tracking(), 16.0, ExportFormat::CssFluid);
    assert!(code.starts_with("font-size: clamp(14px"));
    assert!(!code.contains("letter-spacing"));
}

#[test]
fn ios() {
    assert_snapshot!(export_code(&body_result(), 16.0, ExportFormat::Ios), @r"
    let paragraphStyle = NSMutableParagraphStyle()
    paragraphStyle.lineHeightMultiple = 1.5
    let attributes: [NSAttributedString.Key: Any] = [
        .font: UIFont.systemFont(ofSize: 16),
        .kern: 0.2,
        .paragraphStyle: paragraphStyle
    ]
    ");
}

#[test]
fn android() {
    assert_snapshot!(export_code(&body_result(), 16.0, ExportFormat::Android), @r#"
    android:textSize="16sp"
    android:lineSpacingMultiplier="1.5"
    android:letterSpacing="0.0125"
    "#);
}

#[test]
fn calculated_results_render_in_every_format() {
    let result = calculate_with(
        &TypographyInput::new("Inter", 48.0).with_weight(700),
        &CalcParams::new(),
    );
    for format in ExportFormat::ALL {
        let code = export_code(&result, 48.0, format);
        assert!(!code.is_empty(), "{format}");
        if format != ExportFormat::CssFluid {
            assert!(code.contains("48"), "{format}: {code}");
        }
    }
    let css = export_code(&result, 48.0, ExportFormat::Css);
    assert!(css.contains(&format!("line-height: {}px", result.line_height)));
}

#[test]
fn formats_serialize_as_their_labels() {
    for format in ExportFormat::ALL {
        let json = serde_json::to_string(&format).expect("serialize format");
        assert_eq!(json, format!("\"{}\"", format.as_str()));
        let parsed: ExportFormat = serde_json::from_str(&json).expect("deserialize format");
        assert_eq!(parsed, format);
    }
    assert!(serde_json::from_str::<ExportFormat>("\"swift\"").is_err());
}
