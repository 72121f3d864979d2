//! Pipeline errors.

use super::error_code::ErrorCode;
use super::{ConfigError, LabelError, LoadError, MiningError};

/// Errors that can occur during a full mining run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Label error: {0}")]
    Label(#[from] LabelError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),
}

impl ErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Load(e) => e.error_code(),
            Self::Label(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
        }
    }
}
