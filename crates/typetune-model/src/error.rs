use thiserror::Error;

/// Errors raised when parsing labels and host-reported values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown font category: {0}")]
    UnknownCategory(String),

    #[error("unknown text context: {0}")]
    UnknownContext(String),

    #[error("unknown background mode: {0}")]
    UnknownBgMode(String),

    #[error("invalid grid step {0} (expected 1, 2, 4 or 8)")]
    InvalidGridStep(String),

    #[error("invalid line-height value: {0}")]
    InvalidLineHeight(String),

    #[error("invalid letter-spacing value: {0}")]
    InvalidLetterSpacing(String),
}
