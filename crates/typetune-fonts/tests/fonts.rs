//! Integrity checks over the shipped profile table.

use std::collections::HashSet;

use proptest::prelude::*;
use typetune_fonts::{
    all_families, fallback_profile, guess_category, profiles, resolve, resolve_or_fallback,
};
use typetune_model::FontCategory;

#[test]
fn table_covers_popular_families() {
    assert!(profiles().len() >= 30);
    for family in [
        "Inter",
        "SF Pro",
        "Roboto",
        "Helvetica Neue",
        "Merriweather",
        "Georgia",
        "JetBrains Mono",
        "Playfair Display",
    ] {
        assert!(resolve(family).is_some(), "missing {family}");
    }
}

#[test]
fn family_names_are_unique_ignoring_case() {
    let mut seen = HashSet::new();
    for family in all_families() {
        assert!(seen.insert(family.to_lowercase()), "duplicate {family}");
    }
}

#[test]
fn profile_values_stay_in_range() {
    for profile in profiles() {
        let ratio = profile.base_line_height_ratio;
        assert!((1.0..=1.6).contains(&ratio), "{}: {ratio}", profile.family);
        assert!(profile.uppercase_boost >= 0.0, "{}", profile.family);

        let weights = profile.weights;
        assert!(
            weights.windows(2).all(|pair| pair[0].weight < pair[1].weight),
            "{}: weights not ascending",
            profile.family
        );
        if !weights.is_empty() {
            let regular = weights.iter().find(|entry| entry.weight == 400);
            let regular = regular.unwrap_or_else(|| panic!("{}: no 400 entry", profile.family));
            assert_eq!(regular.line_height_adjust, 0.0);
            assert_eq!(regular.tracking_adjust, 0.0);
        }
    }
}

#[test]
fn every_family_resolves_to_itself() {
    for family in all_families() {
        let resolved = resolve(&family.to_uppercase()).map(|p| p.family);
        assert_eq!(resolved, Some(family));
    }
}

#[test]
fn fallbacks_are_marked_approximate() {
    let resolved = resolve_or_fallback("Totally Custom Grotesk", Some(FontCategory::Display));
    assert!(resolved.is_approximate);
    assert_eq!(resolved.profile, fallback_profile(FontCategory::Display));
    assert!(resolve("Totally Custom Grotesk").is_none());
}

#[test]
fn category_guesses_match_table_categories_for_marked_names() {
    for family in ["PT Serif", "IBM Plex Serif", "Source Serif 4"] {
        assert_eq!(guess_category(family), FontCategory::Serif);
        assert_eq!(resolve(family).map(|p| p.category), Some(FontCategory::Serif));
    }
    for family in ["SF Mono", "Fira Code", "Roboto Mono", "Source Code Pro"] {
        assert_eq!(guess_category(family), FontCategory::Mono);
        assert_eq!(resolve(family).map(|p| p.category), Some(FontCategory::Mono));
    }
}

proptest! {
    #[test]
    fn weight_adjust_stays_within_table_bounds(index in 0usize..64, weight in 1u16..1000) {
        let all = profiles();
        let profile = &all[index % all.len()];
        let delta = profile.weight_adjust(weight);
        if profile.weights.len() > 1 {
            let (lo, hi) = profile.weights.iter().fold((f64::MAX, f64::MIN), |(lo, hi), entry| {
                (lo.min(entry.line_height_adjust), hi.max(entry.line_height_adjust))
            });
            prop_assert!(delta.line_height >= lo - 1e-12 && delta.line_height <= hi + 1e-12);
        }
        prop_assert!(delta.line_height.is_finite());
        prop_assert!(delta.tracking.is_finite());
    }

    #[test]
    fn heavier_weights_never_loosen_line_height(index in 0usize..64, weight in 100u16..900) {
        let all = profiles();
        let profile = &all[index % all.len()];
        let lighter = profile.weight_adjust(weight);
        let heavier = profile.weight_adjust(weight + 100);
        prop_assert!(heavier.line_height <= lighter.line_height + 1e-12);
    }
}
