//! Delimited-file loading for score records and label pairs.
//!
//! Plain delimiter splitting: no quoting or escaping. Fields are trimmed, blank
//! lines are skipped, line numbers in errors are 1-based.

use std::path::Path;

use coursemine_core::config::InputConfig;
use coursemine_core::constants::DEFAULT_DELIMITER;
use coursemine_core::errors::LoadError;

use crate::itemset::Item;
use crate::transactions::ScoreRecord;

/// How input files are split into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputOptions {
    pub delimiter: char,
    pub has_header: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            has_header: false,
        }
    }
}

impl InputOptions {
    /// Options for the records file.
    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            delimiter: config.effective_delimiter(),
            has_header: config.effective_has_header(),
        }
    }

    /// Options for the label file: same delimiter, its own header flag.
    pub fn labels_from_config(config: &InputConfig) -> Self {
        Self {
            delimiter: config.effective_delimiter(),
            has_header: config.effective_labels_has_header(),
        }
    }
}

/// Read a whole file, distinguishing a missing file from other I/O failures.
pub(crate) fn read_input(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => LoadError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })
}

/// Non-blank data lines with their 1-based line numbers.
pub(crate) fn data_lines<'a>(
    text: &'a str,
    options: &InputOptions,
) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let skip = usize::from(options.has_header);
    text.trim_start_matches('\u{feff}')
        .lines()
        .enumerate()
        .skip(skip)
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

/// Read `entity,item,score` records from a file.
pub fn read_records(path: &Path, options: &InputOptions) -> Result<Vec<ScoreRecord>, LoadError> {
    let text = read_input(path)?;
    let records = parse_records(&text, &path.display().to_string(), options)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded score records");
    Ok(records)
}

/// Parse `entity,item,score` records from text. `source` names the input in errors.
/// Fields past the third are ignored.
pub fn parse_records(
    text: &str,
    source: &str,
    options: &InputOptions,
) -> Result<Vec<ScoreRecord>, LoadError> {
    let mut records = Vec::new();
    for (line_no, line) in data_lines(text, options) {
        let fields: Vec<&str> = line.split(options.delimiter).map(str::trim).collect();
        if fields.len() < 3 {
            return Err(LoadError::MalformedRecord {
                path: source.to_string(),
                line: line_no,
                message: format!("expected 3 fields, found {}", fields.len()),
            });
        }
        if fields[0].is_empty() || fields[1].is_empty() {
            return Err(LoadError::MalformedRecord {
                path: source.to_string(),
                line: line_no,
                message: "entity and item must be non-empty".to_string(),
            });
        }
        let score = fields[2]
            .parse::<i64>()
            .map_err(|_| LoadError::InvalidScore {
                path: source.to_string(),
                line: line_no,
                value: fields[2].to_string(),
            })?;
        records.push(ScoreRecord::new(fields[0], Item::from(fields[1]), score));
    }
    Ok(records)
}
