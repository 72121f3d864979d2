//! Support counting: one containment test per (candidate, transaction) pair.

use super::types::{Candidates, FrequentLevel, LevelStats};
use crate::transactions::TransactionTable;

/// Count every candidate against every transaction and keep those with
/// `count >= min_support`.
///
/// O(|candidates| × |transactions|) subset tests; no item index is built.
pub fn count_support(
    mut candidates: Candidates,
    table: &TransactionTable,
    min_support: u64,
) -> (FrequentLevel, LevelStats) {
    let size = candidates.size();
    let pruned = candidates.pruned();
    let total = candidates.len();

    for (candidate, count) in candidates.counts_mut().iter_mut() {
        *count += table
            .itemsets()
            .filter(|transaction| candidate.is_subset_of(transaction))
            .count() as u64;
    }

    let mut supports = candidates.into_counts();
    supports.retain(|_, count| *count >= min_support);

    let stats = LevelStats {
        size,
        candidates: total,
        pruned,
        frequent: supports.len(),
    };
    (FrequentLevel::from_supports(size, supports), stats)
}
