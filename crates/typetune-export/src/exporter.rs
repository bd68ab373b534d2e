//! Snippet rendering.

use typetune_core::{round_half_up, round_to};
use typetune_model::TypographyResult;

use crate::format::ExportFormat;

/// Narrowest viewport of the fluid range, in px.
const FLUID_MIN_VIEWPORT: f64 = 375.0;
/// Widest viewport of the fluid range, in px.
const FLUID_MAX_VIEWPORT: f64 = 1440.0;
/// Font size at the narrow end, relative to the tuned size.
const FLUID_MIN_SCALE: f64 = 0.875;
/// Font size at the wide end, relative to the tuned size.
const FLUID_MAX_SCALE: f64 = 1.125;

/// Renders `result` for `format`. Lines are joined with `\n`, without a
/// trailing newline.
pub fn export_code(result: &TypographyResult, font_size: f64, format: ExportFormat) -> String {
    match format {
        ExportFormat::Css => css(result, font_size),
        ExportFormat::CssFluid => css_fluid(result, font_size),
        ExportFormat::Ios => ios(result, font_size),
        ExportFormat::Android => android(result, font_size),
    }
}

fn css(result: &TypographyResult, font_size: f64) -> String {
    let mut lines = vec![
        format!("font-size: {font_size}px;"),
        format!(
            "line-height: {}px; /* {}% */",
            result.line_height, result.line_height_percent
        ),
    ];
    if result.letter_spacing != 0.0 {
        lines.push(format!(
            "letter-spacing: {}em; /* {}% */",
            result.letter_spacing_em, result.letter_spacing_percent
        ));
    }
    lines.join("\n")
}

/// `clamp()` bounds and the linear `vw + px` term between them.
struct FluidRange {
    min: f64,
    max: f64,
    vw: f64,
    base: f64,
}

impl FluidRange {
    fn new(min: f64, max: f64) -> Self {
        let vw = round_half_up((max - min) / (FLUID_MAX_VIEWPORT - FLUID_MIN_VIEWPORT) * 10000.0)
            / 100.0;
        let base = round_to(min - vw * (FLUID_MIN_VIEWPORT / 100.0), 2);
        Self { min, max, vw, base }
    }

    fn clamp(&self) -> String {
        format!(
            "clamp({}px, {}vw + {}px, {}px)",
            self.min, self.vw, self.base, self.max
        )
    }
}

fn css_fluid(result: &TypographyResult, font_size: f64) -> String {
    let min_size = round_half_up(font_size * FLUID_MIN_SCALE);
    let max_size = round_half_up(font_size * FLUID_MAX_SCALE);
    let ratio = result.line_height / font_size;
    let size = FluidRange::new(min_size, max_size);
    let line_height = FluidRange::new(
        round_half_up(min_size * ratio),
        round_half_up(max_size * ratio),
    );

    let mut lines = vec![
        format!("font-size: {};", size.clamp()),
        format!("line-height: {};", line_height.clamp()),
    ];
    if result.letter_spacing != 0.0 {
        lines.push(format!("letter-spacing: {}em;", result.letter_spacing_em));
    }
    lines.join("\n")
}

fn line_height_multiple(result: &TypographyResult, font_size: f64) -> f64 {
    round_to(result.line_height / font_size, 2)
}

fn ios(result: &TypographyResult, font_size: f64) -> String {
    let multiple = line_height_multiple(result, font_size);
    [
        "let paragraphStyle = NSMutableParagraphStyle()".to_string(),
        format!("paragraphStyle.lineHeightMultiple = {multiple}"),
        "let attributes: [NSAttributedString.Key: Any] = [".to_string(),
        format!("    .font: UIFont.systemFont(ofSize: {font_size}),"),
        format!("    .kern: {},", result.letter_spacing),
        "    .paragraphStyle: paragraphStyle".to_string(),
        "]".to_string(),
    ]
    .join("\n")
}

fn android(result: &TypographyResult, font_size: f64) -> String {
    let multiple = line_height_multiple(result, font_size);
    format!(
        "android:textSize=\"{font_size}sp\"\n\
         android:lineSpacingMultiplier=\"{multiple}\"\n\
         android:letterSpacing=\"{}\"",
        result.letter_spacing_em
    )
}
