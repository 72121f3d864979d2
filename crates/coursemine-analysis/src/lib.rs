//! coursemine-analysis: Apriori mining over per-entity score records.
//!
//! Dependency chain: loader → transactions → mining (frequent-1 → candidates ⇄ support
//! → rules) → pipeline → reporters. Labels are only consulted when rules and
//! itemsets are turned into report rows.

pub mod itemset;
pub mod labels;
pub mod loader;
pub mod mining;
pub mod pipeline;
pub mod reporters;
pub mod transactions;

pub use itemset::{Item, Itemset};
pub use labels::{IdentityLabels, LabelLookup, LabelTable};
pub use mining::{Apriori, FrequentLevel, FrequentLevels, Rule, RuleGenerator};
pub use pipeline::{MiningParams, MiningPipeline, MiningReport, SupportThreshold};
pub use transactions::{ScoreRecord, TransactionTable};
