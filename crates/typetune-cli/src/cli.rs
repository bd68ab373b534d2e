//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use typetune_export::ExportFormat;
use typetune_model::{BgMode, ContextOverride, GridStep};

#[derive(Parser)]
#[command(
    name = "typetune",
    version,
    about = "TypeTune - tuned line-height and letter-spacing for any font",
    long_about = "Compute line-height and letter-spacing from calibrated font profiles.\n\n\
                  Values adapt to size, weight, case and background darkness, snap to a\n\
                  pixel grid, and export as CSS, fluid CSS, iOS or Android snippets."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Settings JSON file (gridStep, bgMode, contextOverride, ...).
    #[arg(long = "settings", value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Line-height grid in px: 1, 2, 4 or 8 (halved for text up to 16px).
    #[arg(long = "grid-step", value_name = "PX", global = true)]
    pub grid_step: Option<GridStep>,

    /// Force a text context instead of classifying by size.
    #[arg(long = "context", value_enum, global = true)]
    pub context: Option<ContextArg>,

    /// Background handling: analyze fills, or force light or dark.
    #[arg(long = "bg", value_enum, global = true)]
    pub bg: Option<BgArg>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Calculate line-height and letter-spacing for one text configuration.
    Calc(CalcArgs),

    /// Print a code snippet for one text configuration.
    Export(ExportArgs),

    /// List the calibrated font profiles.
    Fonts,

    /// Group the text layers of a scene file, report which need updates and
    /// optionally write the tuned values back.
    Tune(TuneArgs),
}

#[derive(Args)]
pub struct TextArgs {
    /// Font family, e.g. "Inter" or "SF Pro Display".
    #[arg(long = "family")]
    pub family: String,

    /// Font size in px.
    #[arg(long = "size")]
    pub size: f64,

    /// Numeric weight (default: derived from --style).
    #[arg(long = "weight")]
    pub weight: Option<u16>,

    /// Style label, e.g. "Semibold Italic".
    #[arg(long = "style", default_value = "")]
    pub style: String,

    /// Text is set in all caps.
    #[arg(long = "uppercase")]
    pub uppercase: bool,

    /// Text sits on a dark background (default: from --bg or settings).
    #[arg(long = "dark")]
    pub dark: bool,
}

#[derive(Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub text: TextArgs,

    /// Snippet format.
    #[arg(long = "format", value_enum, default_value = "css")]
    pub format: ExportFormatArg,
}

#[derive(Args)]
pub struct TuneArgs {
    /// Scene JSON file.
    #[arg(value_name = "SCENE")]
    pub scene: PathBuf,

    /// Print groups and their updates as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Write the tuned scene to this file.
    #[arg(long = "write", value_name = "OUT", conflicts_with = "in_place")]
    pub write: Option<PathBuf>,

    /// Write the tuned scene back over SCENE (also enabled by autoApply).
    #[arg(long = "in-place")]
    pub in_place: bool,
}

impl TuneArgs {
    /// Where tuned values go, if anywhere.
    pub fn write_target(&self, auto_apply: bool) -> Option<PathBuf> {
        self.write
            .clone()
            .or_else(|| (self.in_place || auto_apply).then(|| self.scene.clone()))
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Css,
    CssFluid,
    Ios,
    Android,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Css => ExportFormat::Css,
            ExportFormatArg::CssFluid => ExportFormat::CssFluid,
            ExportFormatArg::Ios => ExportFormat::Ios,
            ExportFormatArg::Android => ExportFormat::Android,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ContextArg {
    Auto,
    Display,
    Body,
    Caption,
}

impl From<ContextArg> for ContextOverride {
    fn from(arg: ContextArg) -> Self {
        match arg {
            ContextArg::Auto => ContextOverride::Auto,
            ContextArg::Display => ContextOverride::Display,
            ContextArg::Body => ContextOverride::Body,
            ContextArg::Caption => ContextOverride::Caption,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum BgArg {
    Auto,
    Light,
    Dark,
}

impl From<BgArg> for BgMode {
    fn from(arg: BgArg) -> Self {
        match arg {
            BgArg::Auto => BgMode::Auto,
            BgArg::Light => BgMode::Light,
            BgArg::Dark => BgMode::Dark,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
