//! Candidate generation (apriori-gen): prefix self-join plus subset pruning.

use super::types::{Candidates, FrequentLevel};
use crate::itemset::Itemset;

/// Build candidate (k+1)-itemsets from frequent k-itemsets.
///
/// Two frequent itemsets join when they agree on all but their last item; the
/// union is admitted only if every k-subset of it is itself frequent. Because
/// keys are sorted, itemsets sharing a prefix are contiguous, so the inner scan
/// stops at the first key with a different prefix.
pub fn generate_candidates(level: &FrequentLevel) -> Candidates {
    let keys: Vec<&Itemset> = level.itemsets().collect();
    let mut candidates = Candidates::new(level.size() + 1);

    for (idx, first) in keys.iter().enumerate() {
        for second in &keys[idx + 1..] {
            if !first.shares_prefix(second) {
                break;
            }
            candidates.joined += 1;
            let union = first.union(second);
            if has_infrequent_subset(&union, level) {
                candidates.pruned += 1;
                continue;
            }
            candidates.admit(union);
        }
    }

    tracing::debug!(
        size = candidates.size(),
        joined = candidates.joined(),
        pruned = candidates.pruned(),
        admitted = candidates.len(),
        "generated candidates"
    );
    candidates
}

/// True if some (k-1)-subset of `candidate` is missing from `level`.
pub fn has_infrequent_subset(candidate: &Itemset, level: &FrequentLevel) -> bool {
    candidate
        .immediate_subsets()
        .any(|subset| !level.contains(&subset))
}

#[cfg(test)]
mod tests {
    use coursemine_core::types::collections::BTreeMap;

    use super::*;

    fn level(size: usize, keys: &[&[&str]]) -> FrequentLevel {
        let supports: BTreeMap<Itemset, u64> =
            keys.iter().map(|codes| (Itemset::of(codes), 1)).collect();
        FrequentLevel::from_supports(size, supports)
    }

    #[test]
    fn test_singletons_join_pairwise() {
        let l1 = level(1, &[&["x"], &["y"], &["z"]]);
        let c2 = generate_candidates(&l1);
        let keys: Vec<String> = c2.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["(x, y)", "(x, z)", "(y, z)"]);
        assert!(c2.iter().all(|(_, count)| count == 0));
        assert_eq!(c2.pruned(), 0);
    }

    #[test]
    fn test_prune_infrequent_subset() {
        // (a,b,c) joins from (a,b)+(a,c) but (b,c) is not frequent.
        let l2 = level(2, &[&["a", "b"], &["a", "c"], &["b", "d"]]);
        let c3 = generate_candidates(&l2);
        assert!(c3.is_empty());
        assert_eq!(c3.joined(), 1);
        assert_eq!(c3.pruned(), 1);
    }

    #[test]
    fn test_join_requires_shared_prefix() {
        let l2 = level(2, &[&["a", "b"], &["a", "c"], &["b", "c"], &["b", "d"]]);
        let c3 = generate_candidates(&l2);
        let keys: Vec<String> = c3.iter().map(|(k, _)| k.to_string()).collect();
        // (b,c,d) would need (c,d); (a,b,c) has all subsets.
        assert_eq!(keys, vec!["(a, b, c)"]);
        assert_eq!(c3.size(), 3);
    }

    #[test]
    fn test_empty_level_yields_no_candidates() {
        let c = generate_candidates(&FrequentLevel::new(2));
        assert!(c.is_empty());
        assert_eq!(c.size(), 3);
    }
}
