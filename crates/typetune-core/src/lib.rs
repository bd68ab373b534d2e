//! Typography calculation engine.
//!
//! Everything here is a pure function over immutable inputs. Host access is
//! limited to the [`NodeTree`] trait used by background analysis.

pub mod background;
pub mod calculator;
pub mod context;
pub mod grid;
pub mod grouping;
pub mod rounding;

pub use background::{
    NodeTree, average_fill_luminance, is_dark_background, is_dark_chain, relative_luminance,
};
pub use calculator::{CalcParams, calculate, calculate_with};
pub use context::{classify, context_multiplier};
pub use grid::{adaptive_step, snap_to_grid};
pub use grouping::{
    DeduplicatedGroup, TextItem, TuneReport, dedup_key, group_items, is_already_good,
    letter_spacing_within_tolerance, line_height_within_tolerance,
};
pub use rounding::{round_half_up, round_to};
