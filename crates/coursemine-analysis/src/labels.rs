//! Item code → display label lookup.

use std::path::Path;

use coursemine_core::errors::{LabelError, LoadError};
use coursemine_core::types::collections::FxHashMap;

use crate::itemset::{Item, Itemset};
use crate::loader::{data_lines, read_input, InputOptions};

/// Translates item codes into display labels for reporting.
pub trait LabelLookup {
    /// Label for one item. Unknown items are an error, never a fallback.
    fn label<'a>(&'a self, item: &'a Item) -> Result<&'a str, LabelError>;

    /// Labels for every item of an itemset, in itemset order.
    fn label_itemset(&self, itemset: &Itemset) -> Result<Vec<String>, LabelError> {
        itemset
            .iter()
            .map(|item| self.label(item).map(str::to_string))
            .collect()
    }
}

/// Label table loaded from `code,label` lines.
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: FxHashMap<Item, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, C, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, L)>,
        C: Into<Item>,
        L: Into<String>,
    {
        Self {
            labels: pairs
                .into_iter()
                .map(|(code, label)| (code.into(), label.into()))
                .collect(),
        }
    }

    /// Load labels from a file. Later lines win over earlier ones for the same code.
    pub fn load(path: &Path, options: &InputOptions) -> Result<Self, LabelError> {
        let text = read_input(path)?;
        let table = Self::parse(&text, &path.display().to_string(), options)?;
        tracing::info!(path = %path.display(), labels = table.len(), "loaded item labels");
        Ok(table)
    }

    /// Parse `code,label` lines. Everything after the first delimiter is the label,
    /// so labels may themselves contain the delimiter.
    pub fn parse(text: &str, source: &str, options: &InputOptions) -> Result<Self, LoadError> {
        let mut labels = FxHashMap::default();
        for (line_no, line) in data_lines(text, options) {
            let mut parts = line.splitn(2, options.delimiter);
            let code = parts.next().map(str::trim).unwrap_or_default();
            let label = parts.next().map(str::trim);
            match label {
                Some(label) if !code.is_empty() => {
                    labels.insert(Item::from(code), label.to_string());
                }
                _ => {
                    return Err(LoadError::MalformedRecord {
                        path: source.to_string(),
                        line: line_no,
                        message: "expected code and label".to_string(),
                    })
                }
            }
        }
        Ok(Self { labels })
    }

    pub fn insert(&mut self, code: impl Into<Item>, label: impl Into<String>) {
        self.labels.insert(code.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl LabelLookup for LabelTable {
    fn label<'a>(&'a self, item: &'a Item) -> Result<&'a str, LabelError> {
        self.labels
            .get(item)
            .map(String::as_str)
            .ok_or_else(|| LabelError::UnknownItem {
                item: item.as_str().to_string(),
            })
    }
}

/// Labels every item with its own code.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLabels;

impl LabelLookup for IdentityLabels {
    fn label<'a>(&'a self, item: &'a Item) -> Result<&'a str, LabelError> {
        Ok(item.as_str())
    }
}
