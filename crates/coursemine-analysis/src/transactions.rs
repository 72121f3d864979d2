//! Transaction table: entity id → qualifying itemset.

use coursemine_core::types::collections::{BTreeMap, FxHashSet};

use crate::itemset::{Item, Itemset};

/// One raw input row: an entity scored `score` in `item`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub entity_id: String,
    pub item: Item,
    pub score: i64,
}

impl ScoreRecord {
    pub fn new(entity_id: impl Into<String>, item: impl Into<Item>, score: i64) -> Self {
        Self {
            entity_id: entity_id.into(),
            item: item.into(),
            score,
        }
    }
}

/// Immutable mapping from entity id to its sorted, deduplicated qualifying items.
///
/// Entities are iterated in id order. Entities with no qualifying item are
/// absent, so `len()` counts only entities that contribute a transaction.
#[derive(Debug, Clone, Default)]
pub struct TransactionTable {
    transactions: BTreeMap<String, Itemset>,
}

impl TransactionTable {
    /// Keep every record scoring at least `min_score`, grouped per entity.
    pub fn from_records(records: impl IntoIterator<Item = ScoreRecord>, min_score: i64) -> Self {
        let mut grouped: BTreeMap<String, Vec<Item>> = BTreeMap::new();
        for record in records {
            if record.score >= min_score {
                grouped.entry(record.entity_id).or_default().push(record.item);
            }
        }
        Self {
            transactions: grouped
                .into_iter()
                .map(|(entity, items)| (entity, Itemset::new(items)))
                .collect(),
        }
    }

    /// Build directly from per-entity item lists. Empty lists are dropped.
    pub fn from_itemsets<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, Itemset)>,
        S: Into<String>,
    {
        Self {
            transactions: rows
                .into_iter()
                .filter(|(_, items)| !items.is_empty())
                .map(|(entity, items)| (entity.into(), items))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, entity_id: &str) -> Option<&Itemset> {
        self.transactions.get(entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Itemset)> {
        self.transactions.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The itemsets alone, in entity order.
    pub fn itemsets(&self) -> impl Iterator<Item = &Itemset> {
        self.transactions.values()
    }

    /// Number of distinct items across all transactions.
    pub fn distinct_items(&self) -> usize {
        self.transactions
            .values()
            .flat_map(|t| t.iter())
            .collect::<FxHashSet<&Item>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_dedup_and_sort() {
        let records = vec![
            ScoreRecord::new("s1", "c3", 95),
            ScoreRecord::new("s1", "c1", 90),
            ScoreRecord::new("s1", "c3", 99),
            ScoreRecord::new("s1", "c2", 89),
            ScoreRecord::new("s2", "c2", 60),
            ScoreRecord::new("s3", "c2", 100),
        ];
        let table = TransactionTable::from_records(records, 90);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("s1"), Some(&Itemset::of(&["c1", "c3"])));
        assert_eq!(table.get("s2"), None);
        assert_eq!(table.get("s3"), Some(&Itemset::of(&["c2"])));
        assert_eq!(table.distinct_items(), 3);
    }

    #[test]
    fn test_iteration_in_entity_order() {
        let table = TransactionTable::from_itemsets(vec![
            ("b", Itemset::of(&["x"])),
            ("a", Itemset::of(&["y"])),
            ("c", Itemset::default()),
        ]);
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
