//! Half-up rounding helpers.
//!
//! Ties always round toward positive infinity (`-2.5` becomes `-2`), which
//! differs from [`f64::round`] (half away from zero) and from banker's
//! rounding.

/// Rounds to the nearest integer, ties up.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds to `decimals` fractional digits, ties up.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    round_half_up(value * factor) / factor
}
