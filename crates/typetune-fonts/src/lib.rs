//! Font profile store.
//!
//! A static table of calibrated profiles for popular families, alias
//! resolution for variant names, and per-category fallbacks for everything
//! else.

mod category;
mod data;
mod profile;
mod registry;

pub use category::{guess_category, weight_from_style};
pub use profile::{FontProfile, ResolvedProfile, WeightAdjust, WeightDelta};
pub use registry::{all_families, fallback_profile, profiles, resolve, resolve_or_fallback};
