//! Input file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DELIMITER;

/// Where the score records and the label table come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Delimited file of `entity,item,score` records.
    pub records_path: Option<PathBuf>,
    /// Delimited file of `item,label` pairs. Item codes are printed as-is when unset.
    pub labels_path: Option<PathBuf>,
    /// Single-character field delimiter. Default: ",".
    pub delimiter: Option<String>,
    /// Skip the first line of the records file. Default: false.
    pub has_header: Option<bool>,
    /// Skip the first line of the label file. Default: false.
    pub labels_has_header: Option<bool>,
}

impl InputConfig {
    /// Returns the effective delimiter, defaulting to ','.
    /// Validation guarantees a configured value is exactly one character.
    pub fn effective_delimiter(&self) -> char {
        self.delimiter
            .as_deref()
            .and_then(|d| d.chars().next())
            .unwrap_or(DEFAULT_DELIMITER)
    }

    /// Returns whether the records file starts with a header line, defaulting to false.
    pub fn effective_has_header(&self) -> bool {
        self.has_header.unwrap_or(false)
    }

    /// Returns whether the label file starts with a header line, defaulting to false.
    pub fn effective_labels_has_header(&self) -> bool {
        self.labels_has_header.unwrap_or(false)
    }
}
