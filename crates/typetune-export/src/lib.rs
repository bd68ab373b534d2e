//! Code snippets for tuned typography.
//!
//! ```
//! use typetune_core::{CalcParams, calculate_with};
//! use typetune_export::{ExportFormat, export_code};
//! use typetune_model::TypographyInput;
//!
//! let result = calculate_with(&TypographyInput::new("Inter", 16.0), &CalcParams::new());
//! let css = export_code(&result, 16.0, ExportFormat::Css);
//! assert!(css.starts_with("font-size: 16px;"));
//! ```

mod exporter;
mod format;

pub use exporter::export_code;
pub use format::{ExportError, ExportFormat};
