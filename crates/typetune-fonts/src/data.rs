//! Calibrated profile table.
//!
//! Values are heuristics tuned by eye against each family's vertical
//! metrics and spacing, not measurements. Weight tables are shared between
//! families with similar weight ranges.

use typetune_model::FontCategory;
use typetune_model::FontCategory::{Display, Mono, SansSerif, Serif};

use crate::profile::{FontProfile, WeightAdjust};

const fn w(weight: u16, line_height_adjust: f64, tracking_adjust: f64) -> WeightAdjust {
    WeightAdjust::new(weight, line_height_adjust, tracking_adjust)
}

/// Variable sans families covering Thin to Black.
const SANS_FULL: &[WeightAdjust] = &[
    w(100, 0.04, 0.012),
    w(200, 0.03, 0.008),
    w(300, 0.015, 0.004),
    w(400, 0.0, 0.0),
    w(500, -0.005, -0.002),
    w(600, -0.01, -0.004),
    w(700, -0.02, -0.006),
    w(800, -0.025, -0.008),
    w(900, -0.03, -0.01),
];

/// System and web-safe sans families shipping a handful of cuts.
const SANS_COMPACT: &[WeightAdjust] = &[
    w(300, 0.015, 0.004),
    w(400, 0.0, 0.0),
    w(500, -0.005, -0.002),
    w(700, -0.02, -0.006),
];

const SERIF: &[WeightAdjust] = &[
    w(300, 0.02, 0.003),
    w(400, 0.0, 0.0),
    w(700, -0.015, -0.004),
    w(900, -0.025, -0.006),
];

const MONO: &[WeightAdjust] = &[
    w(100, 0.02, 0.002),
    w(300, 0.01, 0.001),
    w(400, 0.0, 0.0),
    w(500, -0.005, -0.001),
    w(700, -0.01, -0.002),
    w(800, -0.015, -0.003),
];

const DISPLAY: &[WeightAdjust] = &[
    w(400, 0.0, 0.0),
    w(700, -0.015, -0.008),
    w(900, -0.025, -0.012),
];

/// Single-cut families; interpolation falls back to the linear slopes.
const REGULAR_ONLY: &[WeightAdjust] = &[w(400, 0.0, 0.0)];

const fn profile(
    family: &'static str,
    category: FontCategory,
    base_line_height_ratio: f64,
    base_tracking_ratio: f64,
    display_tightening: f64,
    uppercase_boost: f64,
    weights: &'static [WeightAdjust],
) -> FontProfile {
    FontProfile {
        family,
        category,
        base_line_height_ratio,
        base_tracking_ratio,
        display_tightening,
        uppercase_boost,
        weights,
    }
}

pub(crate) static PROFILES: &[FontProfile] = &[
    // Sans-serif
    profile("Inter", SansSerif, 1.45, -0.004, -0.012, 0.05, SANS_FULL),
    profile("SF Pro", SansSerif, 1.29, -0.002, -0.01, 0.04, SANS_FULL),
    profile("SF Compact", SansSerif, 1.27, 0.0, -0.008, 0.04, SANS_FULL),
    profile("Roboto", SansSerif, 1.42, 0.0, -0.01, 0.05, SANS_FULL),
    profile("Helvetica Neue", SansSerif, 1.35, -0.003, -0.012, 0.05, SANS_FULL),
    profile("Helvetica", SansSerif, 1.35, -0.002, -0.012, 0.05, SANS_COMPACT),
    profile("Arial", SansSerif, 1.38, 0.0, -0.01, 0.05, SANS_COMPACT),
    profile("Segoe UI", SansSerif, 1.36, 0.0, -0.01, 0.05, SANS_COMPACT),
    profile("Noto Sans", SansSerif, 1.45, 0.0, -0.01, 0.05, SANS_FULL),
    profile("IBM Plex Sans", SansSerif, 1.45, 0.0, -0.01, 0.05, SANS_FULL),
    profile("Open Sans", SansSerif, 1.5, 0.0, -0.012, 0.05, SANS_COMPACT),
    profile("Lato", SansSerif, 1.45, 0.002, -0.01, 0.06, SANS_FULL),
    profile("Montserrat", SansSerif, 1.4, -0.002, -0.015, 0.04, SANS_FULL),
    profile("Poppins", SansSerif, 1.5, -0.002, -0.012, 0.04, SANS_FULL),
    profile("Source Sans 3", SansSerif, 1.45, 0.002, -0.01, 0.05, SANS_FULL),
    profile("Nunito", SansSerif, 1.5, 0.003, -0.01, 0.05, SANS_FULL),
    profile("Work Sans", SansSerif, 1.45, 0.0, -0.012, 0.05, SANS_FULL),
    profile("DM Sans", SansSerif, 1.45, -0.004, -0.014, 0.05, SANS_FULL),
    profile("Manrope", SansSerif, 1.45, -0.003, -0.014, 0.05, SANS_COMPACT),
    profile("Plus Jakarta Sans", SansSerif, 1.45, -0.003, -0.012, 0.05, SANS_FULL),
    profile("Geist", SansSerif, 1.45, -0.006, -0.014, 0.05, SANS_FULL),
    profile("Raleway", SansSerif, 1.5, 0.004, -0.012, 0.05, SANS_FULL),
    // Serif
    profile("Merriweather", Serif, 1.6, 0.0, -0.008, 0.05, SERIF),
    profile("Georgia", Serif, 1.5, 0.0, -0.008, 0.05, SERIF),
    profile("Lora", Serif, 1.55, 0.0, -0.008, 0.05, SERIF),
    profile("Source Serif 4", Serif, 1.5, 0.0, -0.008, 0.05, SERIF),
    profile("New York", Serif, 1.35, 0.0, -0.01, 0.04, SERIF),
    profile("Times New Roman", Serif, 1.4, 0.004, -0.006, 0.05, SERIF),
    profile("IBM Plex Serif", Serif, 1.5, 0.0, -0.008, 0.05, SERIF),
    profile("PT Serif", Serif, 1.5, 0.0, -0.008, 0.05, SERIF),
    // Monospace
    profile("SF Mono", Mono, 1.4, 0.0, 0.0, 0.02, MONO),
    profile("JetBrains Mono", Mono, 1.5, 0.0, 0.0, 0.02, MONO),
    profile("Fira Code", Mono, 1.45, 0.0, 0.0, 0.02, MONO),
    profile("Roboto Mono", Mono, 1.45, 0.0, 0.0, 0.02, MONO),
    profile("Source Code Pro", Mono, 1.45, 0.0, 0.0, 0.02, MONO),
    // Display
    profile("Playfair Display", Display, 1.25, -0.004, -0.015, 0.06, DISPLAY),
    profile("Oswald", Display, 1.3, 0.005, -0.008, 0.02, DISPLAY),
    profile("Bebas Neue", Display, 1.1, 0.01, -0.005, 0.0, REGULAR_ONLY),
];

/// Alias (lowercase) to canonical family.
pub(crate) static ALIASES: &[(&str, &str)] = &[
    ("sf pro display", "SF Pro"),
    ("sf pro text", "SF Pro"),
    ("sf pro rounded", "SF Pro"),
    ("sf compact display", "SF Compact"),
    ("sf compact text", "SF Compact"),
    ("sf compact rounded", "SF Compact"),
    ("roboto flex", "Roboto"),
    ("noto sans jp", "Noto Sans"),
    ("noto sans kr", "Noto Sans"),
    ("noto sans sc", "Noto Sans"),
    ("noto sans tc", "Noto Sans"),
    ("ibm plex mono", "IBM Plex Sans"),
    ("inter display", "Inter"),
    ("inter variable", "Inter"),
    ("inter tight", "Inter"),
    ("source sans pro", "Source Sans 3"),
    ("source serif pro", "Source Serif 4"),
    ("new york small", "New York"),
    ("new york medium", "New York"),
    ("new york large", "New York"),
    ("new york extra large", "New York"),
    ("geist sans", "Geist"),
    ("times", "Times New Roman"),
];

/// Category fallbacks. No weight tables, so weights extrapolate linearly.
pub(crate) static FALLBACK_SANS: FontProfile =
    profile("Fallback Sans", SansSerif, 1.45, 0.0, -0.01, 0.05, &[]);
pub(crate) static FALLBACK_SERIF: FontProfile =
    profile("Fallback Serif", Serif, 1.5, 0.0, -0.008, 0.05, &[]);
pub(crate) static FALLBACK_MONO: FontProfile =
    profile("Fallback Mono", Mono, 1.45, 0.0, 0.0, 0.02, &[]);
pub(crate) static FALLBACK_DISPLAY: FontProfile =
    profile("Fallback Display", Display, 1.25, -0.005, -0.012, 0.04, &[]);
