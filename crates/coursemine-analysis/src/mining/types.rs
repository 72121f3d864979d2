//! Frequent-itemset levels, candidate sets, and rules.

use std::fmt;

use coursemine_core::types::collections::BTreeMap;
use serde::Serialize;

use crate::itemset::Itemset;

/// Support counts for candidate k-itemsets awaiting a counting pass.
///
/// Keys are unique canonical itemsets, all of size `size`.
#[derive(Debug, Clone, Default)]
pub struct Candidates {
    size: usize,
    counts: BTreeMap<Itemset, u64>,
    /// Pairs that passed the prefix join.
    pub(crate) joined: usize,
    /// Joined pairs rejected because some (k-1)-subset was infrequent.
    pub(crate) pruned: usize,
}

impl Candidates {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Admit a candidate with a zero count. Re-admitting is a no-op.
    pub fn admit(&mut self, itemset: Itemset) {
        debug_assert_eq!(itemset.len(), self.size);
        self.counts.entry(itemset).or_insert(0);
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn joined(&self) -> usize {
        self.joined
    }

    pub fn pruned(&self) -> usize {
        self.pruned
    }

    pub fn get(&self, itemset: &Itemset) -> Option<u64> {
        self.counts.get(itemset).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    pub(crate) fn counts_mut(&mut self) -> &mut BTreeMap<Itemset, u64> {
        &mut self.counts
    }

    pub(crate) fn into_counts(self) -> BTreeMap<Itemset, u64> {
        self.counts
    }
}

/// Frequent k-itemsets with their support counts, iterated in sorted-key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequentLevel {
    size: usize,
    supports: BTreeMap<Itemset, u64>,
}

impl FrequentLevel {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            supports: BTreeMap::new(),
        }
    }

    pub(crate) fn from_supports(size: usize, supports: BTreeMap<Itemset, u64>) -> Self {
        debug_assert!(supports.keys().all(|k| k.len() == size));
        Self { size, supports }
    }

    /// Number of items in every itemset of this level.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn support(&self, itemset: &Itemset) -> Option<u64> {
        self.supports.get(itemset).copied()
    }

    pub fn contains(&self, itemset: &Itemset) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.supports.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, u64)> {
        self.supports.iter().map(|(k, v)| (k, *v))
    }
}

/// All non-empty frequent levels of one mining run; L_1 at index 0.
///
/// Append-only while the driver runs, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequentLevels {
    levels: Vec<FrequentLevel>,
}

impl FrequentLevels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next level. Levels must arrive as L_1, L_2, ... and be non-empty.
    pub(crate) fn push(&mut self, level: FrequentLevel) {
        assert_eq!(
            level.size(),
            self.levels.len() + 1,
            "frequent levels must be appended in size order"
        );
        debug_assert!(!level.is_empty());
        self.levels.push(level);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level holding itemsets of `size` items.
    pub fn level(&self, size: usize) -> Option<&FrequentLevel> {
        size.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// The largest non-empty level.
    pub fn last(&self) -> Option<&FrequentLevel> {
        self.levels.last()
    }

    /// Support of any itemset recorded in this run.
    pub fn support(&self, itemset: &Itemset) -> Option<u64> {
        self.level(itemset.len())?.support(itemset)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequentLevel> {
        self.levels.iter()
    }

    /// Total frequent itemsets across all levels.
    pub fn itemset_count(&self) -> usize {
        self.levels.iter().map(FrequentLevel::len).sum()
    }
}

impl<'a> IntoIterator for &'a FrequentLevels {
    type Item = &'a FrequentLevel;
    type IntoIter = std::slice::Iter<'a, FrequentLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Association rule `antecedent → consequent` split from one frequent itemset.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    /// Support of `antecedent ∪ consequent`.
    pub support: u64,
    /// support(antecedent ∪ consequent) / support(antecedent).
    pub confidence: f64,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} --> {} (confidence {:.3})",
            self.antecedent, self.consequent, self.confidence
        )
    }
}

/// Counts for one Apriori iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Itemset size of the level.
    pub size: usize,
    /// Candidates sent to support counting (distinct items for size 1).
    pub candidates: usize,
    /// Joined itemsets dropped by the subset check before counting.
    pub pruned: usize,
    /// Candidates that met minimum support.
    pub frequent: usize,
}
