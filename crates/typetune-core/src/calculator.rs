//! Line-height and letter-spacing calculation.

use tracing::trace;
use typetune_fonts::{guess_category, resolve_or_fallback};
use typetune_model::{
    ContextOverride, GridStep, PluginSettings, TextContext, TypographyInput, TypographyResult,
};

use crate::context::{classify, context_multiplier};
use crate::grid::{adaptive_step, snap_to_grid};
use crate::rounding::{round_half_up, round_to};

/// Line-height factor for light text on a dark background.
const DARK_LINE_HEIGHT_FACTOR: f64 = 1.015;
/// Tracking added for light text on a dark background.
const DARK_TRACKING: f64 = 0.015;

/// Settings that shape a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalcParams {
    pub context_override: ContextOverride,
    pub grid_step: GridStep,
}

impl CalcParams {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_context_override(mut self, context_override: ContextOverride) -> Self {
        self.context_override = context_override;
        self
    }

    #[must_use]
    pub fn with_grid_step(mut self, grid_step: GridStep) -> Self {
        self.grid_step = grid_step;
        self
    }
}

impl From<&PluginSettings> for CalcParams {
    fn from(settings: &PluginSettings) -> Self {
        Self {
            context_override: settings.context_override,
            grid_step: settings.grid_step,
        }
    }
}

/// Computes the tuned line-height and letter-spacing for `input`.
///
/// Never fails: unknown families use a category fallback and report
/// `is_approximate`.
pub fn calculate(
    input: &TypographyInput,
    context_override: ContextOverride,
    grid_step: GridStep,
) -> TypographyResult {
    let size = input.font_size;

    let category_source = if input.font_style.is_empty() {
        &input.font_family
    } else {
        &input.font_style
    };
    let category = guess_category(category_source);
    let resolved = resolve_or_fallback(&input.font_family, Some(category));
    let profile = resolved.profile;

    let context = context_override.forced().unwrap_or_else(|| classify(size));
    let multiplier = context_multiplier(context, size);
    let weight = profile.weight_adjust(input.font_weight);
    trace!(
        family = %input.font_family,
        size,
        %context,
        profile = profile.family,
        approximate = resolved.is_approximate,
        "calculating"
    );

    let dark_factor = if input.is_dark_bg {
        DARK_LINE_HEIGHT_FACTOR
    } else {
        1.0
    };
    let line_height_raw = size
        * profile.base_line_height_ratio
        * multiplier
        * (1.0 + weight.line_height)
        * dark_factor;
    let line_height = snap_to_grid(line_height_raw, adaptive_step(size, grid_step));
    let line_height_percent = round_half_up(line_height / size * 1000.0) / 10.0;

    let display_adjust = if context == TextContext::Display {
        profile.display_tightening
    } else {
        0.0
    };
    let case_adjust = if input.is_uppercase {
        profile.uppercase_boost
    } else {
        0.0
    };
    let dark_adjust = if input.is_dark_bg { DARK_TRACKING } else { 0.0 };
    let tracking = profile.base_tracking_ratio
        + size_scale(size)
        + display_adjust
        + weight.tracking
        + case_adjust
        + dark_adjust;

    TypographyResult {
        line_height,
        line_height_raw: round_to(line_height_raw, 2),
        line_height_percent,
        letter_spacing: round_to(size * tracking, 2),
        letter_spacing_em: round_to(tracking, 4),
        letter_spacing_percent: round_half_up(tracking * 1000.0) / 10.0,
        font_info: describe(input),
        is_approximate: resolved.is_approximate,
    }
}

/// [`calculate`] with bundled settings.
pub fn calculate_with(input: &TypographyInput, params: &CalcParams) -> TypographyResult {
    calculate(input, params.context_override, params.grid_step)
}

/// Size-dependent tracking: small text opens up, large text tightens.
fn size_scale(size: f64) -> f64 {
    if size <= 12.0 {
        0.008
    } else if size <= 24.0 {
        0.0
    } else if size <= 48.0 {
        -0.01 * (size - 24.0) / 24.0
    } else {
        -0.01 - 0.02 * ((size - 48.0) / 48.0).min(1.0)
    }
}

fn describe(input: &TypographyInput) -> String {
    let style = if input.font_style.is_empty() {
        format!("w{}", input.font_weight)
    } else {
        input.font_style.clone()
    };
    format!("{} · {}px · {}", input.font_family, input.font_size, style)
}
