//! Font profile model and weight interpolation.

use typetune_model::FontCategory;

/// Line-height slope per 400 units of weight when no weight table exists.
const LINEAR_LINE_HEIGHT_SLOPE: f64 = 0.03;
/// Tracking slope per 400 units of weight when no weight table exists.
const LINEAR_TRACKING_SLOPE: f64 = 0.008;

/// Per-weight deltas relative to the regular (400) cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightAdjust {
    pub weight: u16,
    /// Relative line-height delta, applied as `(1 + line_height_adjust)`.
    pub line_height_adjust: f64,
    /// Tracking delta added to the tracking ratio.
    pub tracking_adjust: f64,
}

impl WeightAdjust {
    pub const fn new(weight: u16, line_height_adjust: f64, tracking_adjust: f64) -> Self {
        Self {
            weight,
            line_height_adjust,
            tracking_adjust,
        }
    }

    fn delta(&self) -> WeightDelta {
        WeightDelta {
            line_height: self.line_height_adjust,
            tracking: self.tracking_adjust,
        }
    }
}

/// Interpolated adjustment for a concrete weight.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightDelta {
    pub line_height: f64,
    pub tracking: f64,
}

/// Typographic baseline for one family.
///
/// `weights` is sorted by ascending weight. A non-empty table always holds a
/// 400 entry with zero adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontProfile {
    pub family: &'static str,
    pub category: FontCategory,
    /// Line-height as a multiple of font size, 1.0-1.6.
    pub base_line_height_ratio: f64,
    /// Tracking as a fraction of font size.
    pub base_tracking_ratio: f64,
    /// Tracking delta applied in display context only.
    pub display_tightening: f64,
    /// Tracking delta for all-caps text. Never negative.
    pub uppercase_boost: f64,
    pub weights: &'static [WeightAdjust],
}

impl FontProfile {
    /// Adjustment for `weight`.
    ///
    /// Weights between two table entries interpolate linearly; weights
    /// outside the table clamp to the nearest edge entry. Profiles with
    /// fewer than two entries extrapolate from 400 with fixed slopes.
    pub fn weight_adjust(&self, weight: u16) -> WeightDelta {
        let table = self.weights;
        let (Some(first), Some(last)) = (table.first(), table.last()) else {
            return linear_weight_delta(weight);
        };
        if table.len() == 1 {
            return linear_weight_delta(weight);
        }
        if weight <= first.weight {
            return first.delta();
        }
        if weight >= last.weight {
            return last.delta();
        }

        for pair in table.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if weight == lower.weight {
                return lower.delta();
            }
            if weight < upper.weight {
                let t = f64::from(weight - lower.weight) / f64::from(upper.weight - lower.weight);
                return WeightDelta {
                    line_height: lower.line_height_adjust
                        + t * (upper.line_height_adjust - lower.line_height_adjust),
                    tracking: lower.tracking_adjust
                        + t * (upper.tracking_adjust - lower.tracking_adjust),
                };
            }
        }
        last.delta()
    }
}

fn linear_weight_delta(weight: u16) -> WeightDelta {
    let delta = (f64::from(weight) - 400.0) / 400.0;
    WeightDelta {
        line_height: -delta * LINEAR_LINE_HEIGHT_SLOPE,
        tracking: -delta * LINEAR_TRACKING_SLOPE,
    }
}

/// Outcome of resolving a family name against the profile table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedProfile {
    pub profile: &'static FontProfile,
    /// True when `profile` is a category fallback.
    pub is_approximate: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[WeightAdjust] = &[
        WeightAdjust::new(300, 0.02, 0.004),
        WeightAdjust::new(400, 0.0, 0.0),
        WeightAdjust::new(700, -0.03, -0.006),
    ];

    fn profile(weights: &'static [WeightAdjust]) -> FontProfile {
        FontProfile {
            family: "Test",
            category: FontCategory::SansSerif,
            base_line_height_ratio: 1.4,
            base_tracking_ratio: 0.0,
            display_tightening: 0.0,
            uppercase_boost: 0.05,
            weights,
        }
    }

    #[test]
    fn exact_weight_uses_table_entry() {
        let delta = profile(TABLE).weight_adjust(700);
        assert_eq!(delta.line_height, -0.03);
        assert_eq!(delta.tracking, -0.006);
        assert_eq!(profile(TABLE).weight_adjust(400), WeightDelta::default());
    }

    #[test]
    fn intermediate_weight_interpolates() {
        // 550 sits halfway between 400 and 700.
        let delta = profile(TABLE).weight_adjust(550);
        assert!((delta.line_height - -0.015).abs() < 1e-12);
        assert!((delta.tracking - -0.003).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_weight_clamps_to_edges() {
        assert_eq!(profile(TABLE).weight_adjust(100), TABLE[0].delta());
        assert_eq!(profile(TABLE).weight_adjust(900), TABLE[2].delta());
    }

    #[test]
    fn missing_or_single_entry_table_extrapolates_linearly() {
        const SINGLE: &[WeightAdjust] = &[WeightAdjust::new(400, 0.0, 0.0)];
        for weights in [&[][..], SINGLE] {
            let bold = profile(weights).weight_adjust(800);
            assert!((bold.line_height - -0.03).abs() < 1e-12);
            assert!((bold.tracking - -0.008).abs() < 1e-12);
            let thin = profile(weights).weight_adjust(200);
            assert!((thin.line_height - 0.015).abs() < 1e-12);
        }
    }
}
