use anyhow::Result;
use serde::Serialize;
use tracing::{info, info_span};

use typetune_cli::apply::{ApplyOutcome, apply_report};
use typetune_cli::scene::Scene;
use typetune_core::{CalcParams, TuneReport, calculate_with};
use typetune_export::{ExportFormat, export_code};
use typetune_fonts::{profiles, weight_from_style};
use typetune_model::{PluginSettings, TextUpdate, TypographyInput, TypographyResult};

use crate::cli::{CalcArgs, ExportArgs, TextArgs, TuneArgs};
use crate::summary::{print_changes, print_fonts, print_report, print_result};

pub fn run_calc(args: &CalcArgs, settings: &PluginSettings) -> Result<()> {
    let (input, result) = calculate_text(&args.text, settings);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        info!(family = %input.font_family, size = input.font_size, "calculated");
        print_result(&result);
    }
    Ok(())
}

pub fn run_export(args: &ExportArgs, settings: &PluginSettings) -> Result<()> {
    let (input, result) = calculate_text(&args.text, settings);
    let format = ExportFormat::from(args.format);
    println!("{}", export_code(&result, input.font_size, format));
    Ok(())
}

pub fn run_fonts() -> Result<()> {
    print_fonts(profiles());
    Ok(())
}

pub fn run_tune(args: &TuneArgs, settings: &PluginSettings) -> Result<()> {
    let span = info_span!("tune", scene = %args.scene.display());
    let _guard = span.enter();

    let mut scene = Scene::load(&args.scene)?;
    let items = scene.text_items(settings.bg_mode);
    info!(nodes = scene.node_count(), text_layers = items.len(), "loaded scene");

    let report = TuneReport::new(&items, &CalcParams::from(settings));
    let target = args.write_target(settings.auto_apply);
    let outcome = match &target {
        Some(path) => {
            let outcome = apply_report(&mut scene, &report, settings.update_styles);
            scene.save(path)?;
            info!(
                path = %path.display(),
                layers = outcome.layers.len(),
                styles = outcome.styles.len(),
                skipped = outcome.skipped.len(),
                "wrote scene"
            );
            Some(outcome)
        }
        None => None,
    };

    if args.json {
        let output = TuneOutput::new(&report, outcome.as_ref());
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_report(&report);
        if let (Some(outcome), Some(path)) = (&outcome, &target) {
            print_changes(outcome, path);
        }
    }
    Ok(())
}

fn text_input(args: &TextArgs, settings: &PluginSettings) -> TypographyInput {
    let weight = args
        .weight
        .unwrap_or_else(|| weight_from_style(&args.style));
    let dark = args.dark || settings.bg_mode.resolve(|| false);
    TypographyInput::new(args.family.as_str(), args.size)
        .with_weight(weight)
        .with_style(args.style.as_str())
        .with_uppercase(args.uppercase)
        .with_dark_background(dark)
}

fn calculate_text(
    args: &TextArgs,
    settings: &PluginSettings,
) -> (TypographyInput, TypographyResult) {
    let input = text_input(args, settings);
    let result = calculate_with(&input, &CalcParams::from(settings));
    (input, result)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TuneOutput<'a> {
    total_items: usize,
    already_good: usize,
    needs_change: usize,
    groups: Vec<GroupOutput<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    applied: Option<&'a ApplyOutcome>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GroupOutput<'a> {
    key: &'a str,
    font_info: &'a str,
    item_ids: &'a [String],
    already_good: bool,
    result: &'a TypographyResult,
    update: TextUpdate,
}

impl<'a> TuneOutput<'a> {
    fn new(report: &'a TuneReport, applied: Option<&'a ApplyOutcome>) -> Self {
        let groups = report
            .groups
            .iter()
            .map(|group| GroupOutput {
                key: &group.key,
                font_info: &group.result.font_info,
                item_ids: &group.item_ids,
                already_good: group.already_good,
                result: &group.result,
                update: group.update(),
            })
            .collect();
        Self {
            total_items: report.total_items,
            already_good: report.already_good(),
            needs_change: report.needs_change(),
            groups,
            applied,
        }
    }
}
