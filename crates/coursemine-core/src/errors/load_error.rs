//! Record and label file loading errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while reading delimited input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record at {path}:{line}: {message}")]
    MalformedRecord {
        path: String,
        line: usize,
        message: String,
    },

    #[error("Invalid score '{value}' at {path}:{line}")]
    InvalidScore {
        path: String,
        line: usize,
        value: String,
    },
}

impl ErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } | Self::InvalidScore { .. } => {
                error_code::MALFORMED_RECORD
            }
            Self::FileNotFound { .. } | Self::Io { .. } => error_code::LOAD_ERROR,
        }
    }
}
