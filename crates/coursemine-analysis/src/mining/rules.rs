//! Association rule generation from a frequent itemset.
//!
//! Every non-empty proper subset of the itemset is tried as an antecedent, for
//! all sizes 1..n-1. No pruning across antecedent sizes: the enumeration is
//! exhaustive, so the output is every split that clears the confidence bar.

use coursemine_core::errors::{LabelError, MiningError, PipelineError};
use serde::Serialize;

use super::types::{FrequentLevels, Rule};
use crate::itemset::Itemset;
use crate::labels::LabelLookup;

/// A rule with both sides translated to display labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledRule {
    pub antecedent: Vec<String>,
    pub consequent: Vec<String>,
    pub antecedent_codes: Vec<String>,
    pub consequent_codes: Vec<String>,
    pub support: u64,
    pub confidence: f64,
}

impl Rule {
    pub fn label(&self, labels: &dyn LabelLookup) -> Result<LabeledRule, LabelError> {
        Ok(LabeledRule {
            antecedent: labels.label_itemset(&self.antecedent)?,
            consequent: labels.label_itemset(&self.consequent)?,
            antecedent_codes: self.antecedent.codes(),
            consequent_codes: self.consequent.codes(),
            support: self.support,
            confidence: self.confidence,
        })
    }
}

/// Emits rules whose confidence is at least `min_confidence`.
#[derive(Debug, Clone, Copy)]
pub struct RuleGenerator {
    min_confidence: f64,
}

impl RuleGenerator {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    /// Rules splitting `itemset` (whose support is `support`) into antecedent and
    /// consequent, with antecedent supports read from `levels`.
    ///
    /// `levels` must come from the run that produced `itemset`; an antecedent
    /// missing from it is reported as `MiningError::MissingSupport`.
    pub fn rules_for(
        &self,
        itemset: &Itemset,
        support: u64,
        levels: &FrequentLevels,
    ) -> Result<Vec<Rule>, MiningError> {
        let mut rules = Vec::new();
        for size in 1..itemset.len() {
            for antecedent in itemset.combinations(size) {
                let antecedent_support =
                    levels
                        .support(&antecedent)
                        .ok_or_else(|| MiningError::MissingSupport {
                            itemset: antecedent.to_string(),
                        })?;
                // Antecedent ⊂ frequent itemset, so its support is >= min support >= 1.
                assert!(
                    antecedent_support > 0,
                    "frequent antecedent {} recorded with zero support",
                    antecedent
                );

                let confidence = support as f64 / antecedent_support as f64;
                if confidence >= self.min_confidence {
                    let consequent = itemset.difference(&antecedent);
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                    });
                }
            }
        }
        tracing::debug!(itemset = %itemset, rules = rules.len(), "generated rules");
        Ok(rules)
    }

    /// `rules_for` followed by label translation of both sides.
    pub fn labeled_rules_for(
        &self,
        itemset: &Itemset,
        support: u64,
        levels: &FrequentLevels,
        labels: &dyn LabelLookup,
    ) -> Result<Vec<LabeledRule>, PipelineError> {
        let rules = self.rules_for(itemset, support, levels)?;
        rules
            .iter()
            .map(|rule| rule.label(labels).map_err(PipelineError::from))
            .collect()
    }
}
