//! Size-based context classification.

use typetune_model::TextContext;

/// Sizes at or above this are display text.
pub const DISPLAY_MIN_SIZE: f64 = 32.0;
/// Sizes at or below this are captions.
// Open product question: 11px was also used as the caption boundary.
pub const CAPTION_MAX_SIZE: f64 = 13.0;
/// Display sizes at or above this get the tightest multiplier.
const DISPLAY_CEILING_SIZE: f64 = 128.0;

const DISPLAY_MAX_MULTIPLIER: f64 = 0.93;
const DISPLAY_MIN_MULTIPLIER: f64 = 0.79;
const CAPTION_MULTIPLIER: f64 = 1.1;

/// Classifies a font size. NaN is body text.
pub fn classify(font_size: f64) -> TextContext {
    if font_size >= DISPLAY_MIN_SIZE {
        TextContext::Display
    } else if font_size <= CAPTION_MAX_SIZE {
        TextContext::Caption
    } else {
        TextContext::Body
    }
}

/// Line-height multiplier for `context` at `font_size`.
///
/// Display text tightens linearly from 0.93 at 32px to 0.79 at 128px and
/// stays at 0.79 above that. A display override below 32px extrapolates
/// past 0.93.
pub fn context_multiplier(context: TextContext, font_size: f64) -> f64 {
    match context {
        TextContext::Display => {
            if font_size >= DISPLAY_CEILING_SIZE {
                return DISPLAY_MIN_MULTIPLIER;
            }
            let t = (font_size - DISPLAY_MIN_SIZE) / (DISPLAY_CEILING_SIZE - DISPLAY_MIN_SIZE);
            DISPLAY_MAX_MULTIPLIER - t * (DISPLAY_MAX_MULTIPLIER - DISPLAY_MIN_MULTIPLIER)
        }
        TextContext::Caption => CAPTION_MULTIPLIER,
        TextContext::Body => 1.0,
    }
}
