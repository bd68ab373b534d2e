//! Name-based heuristics: category guessing and style-to-weight mapping.

use typetune_model::FontCategory;

/// Guesses a category from a family or style name.
///
/// Substring tests run in priority order: monospace markers, then "serif"
/// (ignoring "sans serif" / "sans-serif"), then "display". Anything else is
/// sans-serif, including serif faces without a marker such as Merriweather.
pub fn guess_category(name: &str) -> FontCategory {
    let lower = name.to_lowercase();

    if lower.contains("mono") || lower.contains("code") {
        return FontCategory::Mono;
    }
    let without_sans = lower.replace("sans-serif", "").replace("sans serif", "");
    if without_sans.contains("serif") {
        return FontCategory::Serif;
    }
    if lower.contains("display") {
        return FontCategory::Display;
    }
    FontCategory::SansSerif
}

/// Ordered style markers; earlier entries win.
const STYLE_WEIGHTS: &[(&[&str], u16)] = &[
    (&["thin", "hairline"], 100),
    (&["extralight", "ultralight"], 200),
    (&["light"], 300),
    (&["medium"], 500),
    (&["semibold", "demibold"], 600),
    (&["extrabold", "ultrabold"], 800),
    (&["bold"], 700),
    (&["black", "heavy"], 900),
];

/// Numeric weight implied by a style label ("SemiBold Italic" -> 600).
///
/// Labels without a recognized marker are 400.
pub fn weight_from_style(style: &str) -> u16 {
    let lower = style.to_lowercase();
    STYLE_WEIGHTS
        .iter()
        .find(|(markers, _)| markers.iter().any(|marker| lower.contains(marker)))
        .map_or(400, |(_, weight)| *weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_mono() {
        assert_eq!(guess_category("SF Mono"), FontCategory::Mono);
        assert_eq!(guess_category("Fira Code"), FontCategory::Mono);
    }

    #[test]
    fn detects_serif_but_not_sans_serif() {
        assert_eq!(guess_category("PT Serif"), FontCategory::Serif);
        assert_eq!(guess_category("Generic Sans Serif"), FontCategory::SansSerif);
        assert_eq!(guess_category("sans-serif"), FontCategory::SansSerif);
        assert_eq!(guess_category("Noto Sans"), FontCategory::SansSerif);
        assert_eq!(guess_category("IBM Plex Sans"), FontCategory::SansSerif);
    }

    #[test]
    fn merriweather_has_no_marker() {
        assert_eq!(guess_category("Merriweather"), FontCategory::SansSerif);
    }

    #[test]
    fn detects_display_and_defaults() {
        assert_eq!(guess_category("Playfair Display"), FontCategory::Display);
        assert_eq!(guess_category("Inter"), FontCategory::SansSerif);
        assert_eq!(guess_category("Regular"), FontCategory::SansSerif);
        assert_eq!(guess_category(""), FontCategory::SansSerif);
    }

    #[test]
    fn style_weights() {
        assert_eq!(weight_from_style("Thin"), 100);
        assert_eq!(weight_from_style("ExtraLight Italic"), 200);
        assert_eq!(weight_from_style("Light"), 300);
        assert_eq!(weight_from_style("Regular"), 400);
        assert_eq!(weight_from_style("Medium"), 500);
        assert_eq!(weight_from_style("SemiBold"), 600);
        assert_eq!(weight_from_style("Demibold"), 600);
        assert_eq!(weight_from_style("Bold"), 700);
        assert_eq!(weight_from_style("ExtraBold"), 800);
        assert_eq!(weight_from_style("Black"), 900);
        assert_eq!(weight_from_style("Heavy Italic"), 900);
    }
}
