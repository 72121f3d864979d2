//! Mining parameter configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SCORE, DEFAULT_SUPPORT_FRACTION};

/// Which frequent itemsets rules are generated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleScope {
    /// Only itemsets of the largest non-empty level.
    #[default]
    Maximal,
    /// Every frequent itemset with at least two items.
    All,
}

impl RuleScope {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Maximal => "maximal",
            Self::All => "all",
        }
    }
}

impl fmt::Display for RuleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maximal" => Ok(Self::Maximal),
            "all" => Ok(Self::All),
            other => Err(format!("unknown rule scope '{other}' (expected maximal or all)")),
        }
    }
}

/// Thresholds for the Apriori run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum score for a record's item to enter a transaction. Default: 90.
    pub min_score: Option<i64>,
    /// Absolute minimum support count. Takes precedence over `support_fraction`.
    pub min_support: Option<u64>,
    /// Minimum support as a fraction of entities, rounded up. Default: 0.25.
    pub support_fraction: Option<f64>,
    /// Minimum rule confidence. Default: 0.5.
    pub min_confidence: Option<f64>,
    /// Rule generation scope. Default: maximal.
    pub rule_scope: Option<RuleScope>,
}

impl MiningConfig {
    /// Returns the effective minimum score, defaulting to 90.
    pub fn effective_min_score(&self) -> i64 {
        self.min_score.unwrap_or(DEFAULT_MIN_SCORE)
    }

    /// Returns the effective support fraction, defaulting to 0.25.
    pub fn effective_support_fraction(&self) -> f64 {
        self.support_fraction.unwrap_or(DEFAULT_SUPPORT_FRACTION)
    }

    /// Returns the effective minimum confidence, defaulting to 0.5.
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    /// Returns the effective rule scope, defaulting to maximal.
    pub fn effective_rule_scope(&self) -> RuleScope {
        self.rule_scope.unwrap_or_default()
    }
}
