//! Deduplication of text items and the "already good" tolerance check.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;
use typetune_model::{CurrentValues, TextUpdate, TypographyInput, TypographyResult};

use crate::calculator::{CalcParams, calculate_with};

/// Relative line-height tolerance.
const LINE_HEIGHT_TOLERANCE: f64 = 0.05;
/// Absolute line-height tolerance when the target is zero.
const ZERO_LINE_HEIGHT_TOLERANCE: f64 = 0.5;
/// Minimum letter-spacing tolerance in px.
const MIN_LETTER_SPACING_TOLERANCE: f64 = 0.2;
/// Relative letter-spacing tolerance.
const LETTER_SPACING_TOLERANCE: f64 = 0.05;

/// One text layer as observed before any change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextItem {
    pub id: String,
    pub input: TypographyInput,
    pub current: CurrentValues,
}

impl TextItem {
    pub fn new(id: impl Into<String>, input: TypographyInput, current: CurrentValues) -> Self {
        Self {
            id: id.into(),
            input,
            current,
        }
    }
}

/// Identity merging items with the same configuration.
pub fn dedup_key(input: &TypographyInput) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        input.font_family, input.font_weight, input.font_size, input.is_dark_bg, input.is_uppercase
    )
}

/// Items sharing one configuration and one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeduplicatedGroup {
    pub key: String,
    /// Input of the first member.
    pub input: TypographyInput,
    pub result: TypographyResult,
    /// Current values of the first member.
    pub current: CurrentValues,
    pub item_ids: Vec<String>,
    /// True only when every member is within tolerance of `result`.
    pub already_good: bool,
}

impl DeduplicatedGroup {
    pub fn count(&self) -> usize {
        self.item_ids.len()
    }

    /// Values to write back to every member.
    pub fn update(&self) -> TextUpdate {
        TextUpdate {
            line_height_percent: self.result.line_height_percent,
            letter_spacing_px: self.result.letter_spacing,
        }
    }
}

/// `current_px` of `None` is an automatic line-height and never matches.
pub fn line_height_within_tolerance(current_px: Option<f64>, target_px: f64) -> bool {
    let Some(current) = current_px else {
        return false;
    };
    let tolerance = if target_px == 0.0 {
        ZERO_LINE_HEIGHT_TOLERANCE
    } else {
        (target_px * LINE_HEIGHT_TOLERANCE).abs()
    };
    (current - target_px).abs() <= tolerance
}

pub fn letter_spacing_within_tolerance(current_px: f64, target_px: f64) -> bool {
    let tolerance = MIN_LETTER_SPACING_TOLERANCE.max(LETTER_SPACING_TOLERANCE * target_px.abs());
    (current_px - target_px).abs() <= tolerance
}

/// Whether `current` is close enough to `result` that no write is needed.
pub fn is_already_good(result: &TypographyResult, font_size: f64, current: &CurrentValues) -> bool {
    line_height_within_tolerance(current.line_height.to_pixels(font_size), result.line_height)
        && letter_spacing_within_tolerance(
            current.letter_spacing.to_pixels(font_size),
            result.letter_spacing,
        )
}

/// Groups `items` by [`dedup_key`], calculating once per group.
///
/// A group is already good only when all of its members are. Groups are
/// ordered by font size descending, then family ascending.
pub fn group_items(items: &[TextItem], params: &CalcParams) -> Vec<DeduplicatedGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DeduplicatedGroup> = Vec::new();

    for item in items {
        let key = dedup_key(&item.input);
        if let Some(&position) = index.get(&key) {
            let group = &mut groups[position];
            group.already_good &=
                is_already_good(&group.result, item.input.font_size, &item.current);
            group.item_ids.push(item.id.clone());
            continue;
        }
        let result = calculate_with(&item.input, params);
        let already_good = is_already_good(&result, item.input.font_size, &item.current);
        index.insert(key.clone(), groups.len());
        groups.push(DeduplicatedGroup {
            key,
            input: item.input.clone(),
            result,
            current: item.current,
            item_ids: vec![item.id.clone()],
            already_good,
        });
    }

    groups.sort_by(|a, b| {
        b.input
            .font_size
            .total_cmp(&a.input.font_size)
            .then_with(|| a.input.font_family.cmp(&b.input.font_family))
    });
    debug!(items = items.len(), groups = groups.len(), "grouped text items");
    groups
}

/// Outcome of one grouping pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TuneReport {
    pub groups: Vec<DeduplicatedGroup>,
    pub total_items: usize,
}

impl TuneReport {
    pub fn new(items: &[TextItem], params: &CalcParams) -> Self {
        Self {
            groups: group_items(items, params),
            total_items: items.len(),
        }
    }

    /// Number of groups that need no change.
    pub fn already_good(&self) -> usize {
        self.groups.iter().filter(|group| group.already_good).count()
    }

    /// Number of groups to update.
    pub fn needs_change(&self) -> usize {
        self.groups.len() - self.already_good()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} already well-tuned, {} to update",
            self.already_good(),
            self.needs_change()
        )
    }
}
