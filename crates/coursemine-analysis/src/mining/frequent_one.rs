//! Frequent 1-itemsets from a single transaction scan.

use coursemine_core::types::collections::{BTreeMap, FxHashMap};

use super::types::{FrequentLevel, LevelStats};
use crate::itemset::{Item, Itemset};
use crate::transactions::TransactionTable;

/// Count each item once per transaction and keep those with `count >= min_support`.
///
/// Transactions are already deduplicated, so a plain per-item tally is a
/// transaction count.
pub fn frequent_one_itemsets(table: &TransactionTable, min_support: u64) -> (FrequentLevel, LevelStats) {
    let mut counts: FxHashMap<&Item, u64> = FxHashMap::default();
    for transaction in table.itemsets() {
        for item in transaction {
            *counts.entry(item).or_insert(0) += 1;
        }
    }

    let distinct = counts.len();
    let supports: BTreeMap<Itemset, u64> = counts
        .into_iter()
        .filter(|&(_, count)| count >= min_support)
        .map(|(item, count)| (Itemset::singleton(item.clone()), count))
        .collect();

    let stats = LevelStats {
        size: 1,
        candidates: distinct,
        pruned: 0,
        frequent: supports.len(),
    };
    (FrequentLevel::from_supports(1, supports), stats)
}
