//! Label lookup errors.

use super::error_code::{self, ErrorCode};
use super::LoadError;

/// Errors raised by the item-code → display-label lookup.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    /// The records and the label source disagree about which items exist.
    #[error("No label for item '{item}'")]
    UnknownItem { item: String },

    #[error("Label file error: {0}")]
    Load(#[from] LoadError),
}

impl ErrorCode for LabelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownItem { .. } => error_code::LABEL_ERROR,
            Self::Load(e) => e.error_code(),
        }
    }
}
