//! Writing a tune report back onto a scene.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, warn};
use typetune_core::TuneReport;

use crate::scene::{Scene, TextChange};

/// What one write-back pass changed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyOutcome {
    pub layers: Vec<TextChange>,
    /// Shared text styles that were rewritten.
    pub styles: Vec<String>,
    /// Members that could not be written.
    pub skipped: Vec<String>,
}

/// Writes every group that is not already good onto all of its members.
///
/// A member that cannot be written is skipped with a warning. With
/// `update_styles`, each shared style takes the values of the first
/// written layer that uses it.
pub fn apply_report(scene: &mut Scene, report: &TuneReport, update_styles: bool) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for group in report.groups.iter().filter(|group| !group.already_good) {
        let update = group.update();
        for id in &group.item_ids {
            match scene.apply(id, update) {
                Ok(change) => outcome.layers.push(change),
                Err(error) => {
                    warn!(node = %id, "skipping text layer: {error:#}");
                    outcome.skipped.push(id.clone());
                }
            }
        }
    }

    if update_styles {
        let mut seen = BTreeSet::new();
        for change in &outcome.layers {
            let Some(style) = change.text_style_id.as_deref() else {
                continue;
            };
            if !seen.insert(style) {
                debug!(style, node = %change.id, "text style already written");
                continue;
            }
            match scene.apply_style(style, change.after) {
                Ok(()) => outcome.styles.push(style.to_string()),
                Err(error) => warn!(style, "skipping text style: {error:#}"),
            }
        }
    }
    outcome
}
