//! Apriori driver: L_1, then candidate generation and support counting until a
//! level comes back empty.

use super::candidates::generate_candidates;
use super::frequent_one::frequent_one_itemsets;
use super::support::count_support;
use super::types::{FrequentLevels, LevelStats};
use crate::transactions::TransactionTable;

/// Result of one mining run.
#[derive(Debug, Clone, Default)]
pub struct AprioriResult {
    /// Non-empty frequent levels, L_1 first.
    pub levels: FrequentLevels,
    /// One entry per counting pass, including the final pass that came back empty.
    pub stats: Vec<LevelStats>,
}

/// Exact, single-threaded Apriori miner.
#[derive(Debug, Clone, Copy)]
pub struct Apriori {
    min_support: u64,
}

impl Apriori {
    /// `min_support` is an absolute transaction count and must be at least 1.
    /// With 0 every candidate survives and the run enumerates the full power set
    /// of each transaction.
    pub fn new(min_support: u64) -> Self {
        Self { min_support }
    }

    pub fn min_support(&self) -> u64 {
        self.min_support
    }

    /// Mine all frequent itemsets of `table`.
    ///
    /// Terminates because every pass grows itemset size by one over a finite
    /// item universe; the first empty level is not recorded in `levels`.
    pub fn mine(&self, table: &TransactionTable) -> AprioriResult {
        let mut result = AprioriResult::default();

        let (mut current, stats) = frequent_one_itemsets(table, self.min_support);
        result.stats.push(stats);

        while !current.is_empty() {
            tracing::info!(level = current.size(), itemsets = current.len(), "frequent level");
            let candidates = generate_candidates(&current);
            let (next, stats) = count_support(candidates, table, self.min_support);
            result.stats.push(stats);
            result.levels.push(current);
            current = next;
        }

        tracing::debug!(
            levels = result.levels.len(),
            itemsets = result.levels.itemset_count(),
            "apriori finished"
        );
        result
    }
}
