//! Grid snapping for line-heights.

use typetune_model::GridStep;

use crate::rounding::round_half_up;

/// Sizes at or below this snap to half the configured step.
const SMALL_TEXT_MAX_SIZE: f64 = 16.0;

/// Snaps `value` to the nearest multiple of `step`, ties up.
///
/// Steps of 1 or less round to a whole pixel.
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    if step <= 1.0 {
        return round_half_up(value);
    }
    round_half_up(value / step) * step
}

/// Step used for `font_size`: half of `grid_step` for small text.
pub fn adaptive_step(font_size: f64, grid_step: GridStep) -> f64 {
    let step = grid_step.as_px();
    if font_size <= SMALL_TEXT_MAX_SIZE {
        step / 2.0
    } else {
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_half_up() {
        assert_eq!(snap_to_grid(22.0, 4.0), 24.0);
        assert_eq!(snap_to_grid(21.0, 4.0), 20.0);
        assert_eq!(snap_to_grid(18.0, 4.0), 20.0);
        assert_eq!(snap_to_grid(17.0, 2.0), 18.0);
        assert_eq!(snap_to_grid(19.0, 8.0), 16.0);
        assert_eq!(snap_to_grid(22.5, 0.5), 23.0);
        assert_eq!(snap_to_grid(22.4, 1.0), 22.0);
    }

    #[test]
    fn small_text_uses_half_step() {
        assert_eq!(adaptive_step(16.0, GridStep::Four), 2.0);
        assert_eq!(adaptive_step(16.5, GridStep::Four), 4.0);
        assert_eq!(adaptive_step(12.0, GridStep::One), 0.5);
        assert_eq!(adaptive_step(24.0, GridStep::Eight), 8.0);
    }
}
