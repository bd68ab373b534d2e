//! Family name resolution.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;
use typetune_model::FontCategory;

use crate::data::{
    ALIASES, FALLBACK_DISPLAY, FALLBACK_MONO, FALLBACK_SANS, FALLBACK_SERIF, PROFILES,
};
use crate::profile::{FontProfile, ResolvedProfile};

/// Lowercase family name to profile.
static PROFILE_INDEX: LazyLock<HashMap<String, &'static FontProfile>> = LazyLock::new(|| {
    PROFILES
        .iter()
        .map(|profile| (profile.family.to_lowercase(), profile))
        .collect()
});

/// Lowercase alias to canonical family.
static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ALIASES.iter().copied().collect());

/// All profiles in table order.
pub fn profiles() -> &'static [FontProfile] {
    PROFILES
}

/// Canonical family names in table order.
pub fn all_families() -> impl Iterator<Item = &'static str> {
    PROFILES.iter().map(|profile| profile.family)
}

/// Looks up `family` case-insensitively, following aliases.
///
/// Matching is exact after lowercasing; "Inter Tight" resolves through its
/// alias while "Inter Condensed" does not resolve at all.
pub fn resolve(family: &str) -> Option<&'static FontProfile> {
    let key = family.to_lowercase();
    let canonical = match ALIAS_INDEX.get(key.as_str()) {
        Some(target) => target.to_lowercase(),
        None => key,
    };
    PROFILE_INDEX.get(&canonical).copied()
}

/// Resolves `family`, degrading to the fallback for `category` (sans-serif
/// when `None`).
pub fn resolve_or_fallback(family: &str, category: Option<FontCategory>) -> ResolvedProfile {
    if let Some(profile) = resolve(family) {
        return ResolvedProfile {
            profile,
            is_approximate: false,
        };
    }
    let category = category.unwrap_or_default();
    debug!(family, %category, "no profile for family, using category fallback");
    ResolvedProfile {
        profile: fallback_profile(category),
        is_approximate: true,
    }
}

/// The synthetic profile used for unknown families of `category`.
pub fn fallback_profile(category: FontCategory) -> &'static FontProfile {
    match category {
        FontCategory::SansSerif => &FALLBACK_SANS,
        FontCategory::Serif => &FALLBACK_SERIF,
        FontCategory::Mono => &FALLBACK_MONO,
        FontCategory::Display => &FALLBACK_DISPLAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_case_insensitively() {
        assert_eq!(resolve("inter").map(|p| p.family), Some("Inter"));
        assert_eq!(resolve("SF PRO").map(|p| p.family), Some("SF Pro"));
        assert!(resolve("").is_none());
        assert!(resolve("Inter Condensed").is_none());
    }

    #[test]
    fn aliases_resolve_to_canonical_profiles() {
        assert_eq!(resolve("SF Pro Display").map(|p| p.family), Some("SF Pro"));
        assert_eq!(resolve("sf pro text").map(|p| p.family), Some("SF Pro"));
        assert_eq!(resolve("Roboto Flex").map(|p| p.family), Some("Roboto"));
        assert_eq!(resolve("Noto Sans JP").map(|p| p.family), Some("Noto Sans"));
        assert_eq!(
            resolve("IBM Plex Mono").map(|p| p.family),
            Some("IBM Plex Sans")
        );
    }

    #[test]
    fn fallback_follows_category() {
        let resolved = resolve_or_fallback("Unknown", Some(FontCategory::Mono));
        assert!(resolved.is_approximate);
        assert_eq!(resolved.profile.category, FontCategory::Mono);
        assert!(resolved.profile.weights.is_empty());

        let default = resolve_or_fallback("Unknown", None);
        assert_eq!(default.profile.category, FontCategory::SansSerif);
    }

    #[test]
    fn known_family_ignores_category_hint() {
        let resolved = resolve_or_fallback("Merriweather", Some(FontCategory::SansSerif));
        assert!(!resolved.is_approximate);
        assert_eq!(resolved.profile.category, FontCategory::Serif);
    }
}
