//! Mining pipeline: resolve thresholds, mine levels, generate and label rules.
//!
//! Holds no state between runs, so one pipeline can be run against any number
//! of transaction tables.

use std::fmt;

use coursemine_core::config::{MiningConfig, RuleScope};
use coursemine_core::errors::{MiningError, PipelineError};
use serde::Serialize;

use crate::itemset::Itemset;
use crate::labels::LabelLookup;
use crate::mining::{Apriori, FrequentLevels, LabeledRule, LevelStats, RuleGenerator};
use crate::transactions::TransactionTable;

/// Minimum support as given by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SupportThreshold {
    /// Absolute transaction count.
    Count(u64),
    /// Fraction of entities, rounded up.
    Fraction(f64),
}

impl SupportThreshold {
    /// Absolute count for a table of `entity_count` transactions.
    /// A fraction never resolves below 1; a count is taken as given.
    pub fn resolve(&self, entity_count: usize) -> u64 {
        match *self {
            Self::Count(n) => n,
            Self::Fraction(f) => ((f * entity_count as f64).ceil() as u64).max(1),
        }
    }
}

/// Thresholds for one pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningParams {
    pub min_support: SupportThreshold,
    pub min_confidence: f64,
    pub rule_scope: RuleScope,
}

impl MiningParams {
    /// An absolute `min_support` wins over `support_fraction`.
    pub fn from_config(config: &MiningConfig) -> Self {
        let min_support = match config.min_support {
            Some(n) => SupportThreshold::Count(n),
            None => SupportThreshold::Fraction(config.effective_support_fraction()),
        };
        Self {
            min_support,
            min_confidence: config.effective_min_confidence(),
            rule_scope: config.effective_rule_scope(),
        }
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        match self.min_support {
            SupportThreshold::Count(0) => {
                return Err(MiningError::InvalidParameter {
                    name: "min_support".to_string(),
                    message: "must be at least 1".to_string(),
                })
            }
            SupportThreshold::Fraction(f) if !(0.0..=1.0).contains(&f) => {
                return Err(MiningError::InvalidParameter {
                    name: "support_fraction".to_string(),
                    message: format!("{f} is outside [0, 1]"),
                })
            }
            _ => {}
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::InvalidParameter {
                name: "min_confidence".to_string(),
                message: format!("{} is outside [0, 1]", self.min_confidence),
            });
        }
        Ok(())
    }
}

impl Default for MiningParams {
    fn default() -> Self {
        Self::from_config(&MiningConfig::default())
    }
}

/// A frequent itemset ready for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledItemset {
    pub labels: Vec<String>,
    pub codes: Vec<String>,
    pub support: u64,
    /// support / number of entities.
    pub support_ratio: f64,
}

/// All frequent itemsets of one size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelReport {
    pub size: usize,
    pub itemsets: Vec<LabeledItemset>,
}

/// Per-run counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningDiagnostics {
    pub entity_count: usize,
    pub distinct_items: usize,
    pub min_support: u64,
    pub passes: Vec<LevelStats>,
    pub frequent_itemsets: usize,
    pub rule_count: usize,
}

impl MiningDiagnostics {
    /// Candidates dropped by subset pruning across all passes.
    pub fn total_pruned(&self) -> usize {
        self.passes.iter().map(|p| p.pruned).sum()
    }

    /// Candidates that went through support counting across all passes.
    pub fn total_candidates(&self) -> usize {
        self.passes.iter().map(|p| p.candidates).sum()
    }
}

impl fmt::Display for MiningDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MiningDiagnostics {{ entities={}, items={}, min_support={}, passes={}, candidates={}, pruned={}, frequent={}, rules={} }}",
            self.entity_count,
            self.distinct_items,
            self.min_support,
            self.passes.len(),
            self.total_candidates(),
            self.total_pruned(),
            self.frequent_itemsets,
            self.rule_count,
        )
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct MiningReport {
    pub entity_count: usize,
    pub min_support: u64,
    pub min_confidence: f64,
    pub rule_scope: RuleScope,
    pub levels: Vec<LevelReport>,
    pub rules: Vec<LabeledRule>,
    pub diagnostics: MiningDiagnostics,
    /// Raw levels, for callers that need supports by itemset.
    pub frequent: FrequentLevels,
}

/// Explicit, reusable mining pipeline.
#[derive(Debug, Clone, Copy)]
pub struct MiningPipeline {
    params: MiningParams,
}

impl MiningPipeline {
    pub fn new(params: MiningParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    /// Resolve the support threshold against the number of entities.
    pub fn resolve_min_support(&self, entity_count: usize) -> u64 {
        self.params.min_support.resolve(entity_count)
    }

    /// Mine `table`, generate rules per the configured scope, and label the output.
    pub fn run(
        &self,
        table: &TransactionTable,
        labels: &dyn LabelLookup,
    ) -> Result<MiningReport, PipelineError> {
        self.params.validate()?;

        let entity_count = table.len();
        let min_support = self.resolve_min_support(entity_count);
        tracing::info!(
            entities = entity_count,
            min_support,
            min_confidence = self.params.min_confidence,
            "starting mining run"
        );

        let mined = Apriori::new(min_support).mine(table);
        let levels = label_levels(&mined.levels, entity_count, labels)?;

        let generator = RuleGenerator::new(self.params.min_confidence);
        let mut rules = Vec::new();
        for (itemset, support) in rule_sources(&mined.levels, self.params.rule_scope) {
            rules.extend(generator.labeled_rules_for(itemset, support, &mined.levels, labels)?);
        }

        let diagnostics = MiningDiagnostics {
            entity_count,
            distinct_items: table.distinct_items(),
            min_support,
            passes: mined.stats,
            frequent_itemsets: mined.levels.itemset_count(),
            rule_count: rules.len(),
        };
        tracing::info!(%diagnostics, "mining run finished");

        Ok(MiningReport {
            entity_count,
            min_support,
            min_confidence: self.params.min_confidence,
            rule_scope: self.params.rule_scope,
            levels,
            rules,
            diagnostics,
            frequent: mined.levels,
        })
    }
}

/// Itemsets to generate rules from. Empty when no level was found.
fn rule_sources(levels: &FrequentLevels, scope: RuleScope) -> Vec<(&Itemset, u64)> {
    match scope {
        RuleScope::Maximal => levels
            .last()
            .map(|level| level.iter().collect())
            .unwrap_or_default(),
        RuleScope::All => levels
            .iter()
            .filter(|level| level.size() >= 2)
            .flat_map(|level| level.iter())
            .collect(),
    }
}

fn label_levels(
    levels: &FrequentLevels,
    entity_count: usize,
    labels: &dyn LabelLookup,
) -> Result<Vec<LevelReport>, PipelineError> {
    levels
        .iter()
        .map(|level| -> Result<LevelReport, PipelineError> {
            let itemsets = level
                .iter()
                .map(|(itemset, support)| -> Result<LabeledItemset, PipelineError> {
                    Ok(LabeledItemset {
                        labels: labels.label_itemset(itemset)?,
                        codes: itemset.codes(),
                        support,
                        support_ratio: support as f64 / entity_count as f64,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(LevelReport {
                size: level.size(),
                itemsets,
            })
        })
        .collect()
}
