//! Mining errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while mining itemsets and rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid mining parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    /// An antecedent had no recorded support. Only reachable when rules are
    /// requested for an itemset that did not come out of the same mining run.
    #[error("No recorded support for itemset {itemset}")]
    MissingSupport { itemset: String },
}

impl ErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        error_code::MINING_ERROR
    }
}
