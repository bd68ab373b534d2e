//! Table rendering for command output.

use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use typetune_cli::apply::ApplyOutcome;
use typetune_core::{DeduplicatedGroup, TuneReport};
use typetune_fonts::FontProfile;
use typetune_model::TypographyResult;

pub fn print_result(result: &TypographyResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);
    table.add_row(vec![Cell::new("Font"), Cell::new(&result.font_info)]);
    table.add_row(vec![
        Cell::new("Line height"),
        Cell::new(format!(
            "{}px ({}%)",
            result.line_height, result.line_height_percent
        ))
        .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Unsnapped"),
        dim_cell(format!("{}px", result.line_height_raw)),
    ]);
    table.add_row(vec![
        Cell::new("Letter spacing"),
        Cell::new(format!(
            "{}px / {}em / {}%",
            result.letter_spacing, result.letter_spacing_em, result.letter_spacing_percent
        ))
        .add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Profile"), profile_cell(result.is_approximate)]);
    println!("{table}");
}

pub fn print_fonts(profiles: &[FontProfile]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Category"),
        header_cell("Line height"),
        header_cell("Tracking"),
        header_cell("Display"),
        header_cell("Caps"),
        header_cell("Weights"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for profile in profiles {
        table.add_row(vec![
            Cell::new(profile.family).add_attribute(Attribute::Bold),
            Cell::new(profile.category),
            Cell::new(profile.base_line_height_ratio),
            Cell::new(profile.base_tracking_ratio),
            Cell::new(profile.display_tightening),
            Cell::new(profile.uppercase_boost),
            Cell::new(profile.weights.len()),
        ]);
    }
    println!("{table}");
    println!("{} profiles", profiles.len());
}

pub fn print_report(report: &TuneReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Font"),
        header_cell("Layers"),
        header_cell("Line height"),
        header_cell("Letter spacing"),
        header_cell("Status"),
    ]);
    apply_report_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for group in &report.groups {
        table.add_row(group_row(group));
    }
    println!("{table}");
    println!(
        "{} text layers in {} groups: {}",
        report.total_items,
        report.groups.len(),
        report.summary()
    );
}

pub fn print_changes(outcome: &ApplyOutcome, path: &Path) {
    if !outcome.layers.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Layer"),
            header_cell("Line height"),
            header_cell("Letter spacing"),
            header_cell("Style"),
        ]);
        apply_table_style(&mut table);
        for change in &outcome.layers {
            table.add_row(vec![
                Cell::new(&change.id).add_attribute(Attribute::Bold),
                Cell::new(format!(
                    "{} → {}",
                    change.before.line_height, change.after.line_height
                )),
                Cell::new(format!(
                    "{} → {}",
                    change.before.letter_spacing, change.after.letter_spacing
                )),
                dim_cell(change.text_style_id.as_deref().unwrap_or("-")),
            ]);
        }
        println!("{table}");
    }
    let mut line = format!(
        "Wrote {} text layers to {}",
        outcome.layers.len(),
        path.display()
    );
    if !outcome.styles.is_empty() {
        line.push_str(&format!(" ({} text styles updated)", outcome.styles.len()));
    }
    if !outcome.skipped.is_empty() {
        line.push_str(&format!(", skipped {}", outcome.skipped.join(", ")));
    }
    println!("{line}");
}

fn group_row(group: &DeduplicatedGroup) -> Vec<Cell> {
    let result = &group.result;
    let mut font = result.font_info.clone();
    if group.input.is_uppercase {
        font.push_str(" · caps");
    }
    if group.input.is_dark_bg {
        font.push_str(" · dark");
    }
    vec![
        Cell::new(font),
        Cell::new(group.count()),
        Cell::new(format!(
            "{} → {}px ({}%)",
            group.current.line_height, result.line_height, result.line_height_percent
        )),
        Cell::new(format!(
            "{} → {}px",
            group.current.letter_spacing, result.letter_spacing
        )),
        status_cell(group.already_good),
    ]
}

fn status_cell(already_good: bool) -> Cell {
    if already_good {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("update")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    }
}

fn profile_cell(is_approximate: bool) -> Cell {
    if is_approximate {
        Cell::new("approximate (category fallback)").fg(Color::Yellow)
    } else {
        Cell::new("calibrated").fg(Color::Green)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_report_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
