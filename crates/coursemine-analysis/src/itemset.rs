//! Items and canonical itemsets.
//!
//! An `Itemset` always holds its items sorted ascending with no duplicates, so
//! two itemsets built from the same items in any order compare and hash equal.
//! Every constructor goes through `Itemset::new` or preserves sortedness itself.

use std::fmt;

use coursemine_core::types::collections::SmallVec4;
use serde::{Deserialize, Deserializer, Serialize};

/// Opaque item code (a course code), ordered lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Box<str>);

impl Item {
    pub fn new(code: impl Into<Box<str>>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Item {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for Item {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sorted, duplicate-free sequence of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Itemset {
    items: SmallVec4<Item>,
}

impl Itemset {
    /// Build an itemset from items in any order; duplicates collapse.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        let mut items: SmallVec4<Item> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }

    pub fn singleton(item: Item) -> Self {
        let mut items = SmallVec4::new();
        items.push(item);
        Self { items }
    }

    /// Convenience for literals: `Itemset::of(&["x", "y"])`.
    pub fn of(codes: &[&str]) -> Self {
        Self::new(codes.iter().map(|c| Item::from(*c)))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.binary_search(item).is_ok()
    }

    /// True when both itemsets agree on everything but their last item.
    /// This is the Apriori self-join condition for two (k-1)-itemsets.
    pub fn shares_prefix(&self, other: &Itemset) -> bool {
        let n = self.len();
        n == other.len() && n > 0 && self.items[..n - 1] == other.items[..n - 1]
    }

    /// Sorted union of two itemsets.
    pub fn union(&self, other: &Itemset) -> Itemset {
        let mut items = SmallVec4::with_capacity(self.len() + other.len());
        let (mut i, mut j) = (0, 0);
        while i < self.len() && j < other.len() {
            match self.items[i].cmp(&other.items[j]) {
                std::cmp::Ordering::Less => {
                    items.push(self.items[i].clone());
                    i += 1;
                }
                std::cmp::Ordering::Greater => {
                    items.push(other.items[j].clone());
                    j += 1;
                }
                std::cmp::Ordering::Equal => {
                    items.push(self.items[i].clone());
                    i += 1;
                    j += 1;
                }
            }
        }
        items.extend(self.items[i..].iter().cloned());
        items.extend(other.items[j..].iter().cloned());
        Itemset { items }
    }

    /// Items of `self` not in `other`, still sorted.
    pub fn difference(&self, other: &Itemset) -> Itemset {
        Itemset {
            items: self
                .items
                .iter()
                .filter(|item| !other.contains(item))
                .cloned()
                .collect(),
        }
    }

    /// The itemset with the item at `index` removed.
    pub fn without(&self, index: usize) -> Itemset {
        let mut items = self.items.clone();
        items.remove(index);
        Itemset { items }
    }

    /// Set containment. Linear merge walk over the two sorted sequences.
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let mut theirs = other.items.iter();
        'outer: for mine in &self.items {
            for candidate in theirs.by_ref() {
                match candidate.cmp(mine) {
                    std::cmp::Ordering::Less => continue,
                    std::cmp::Ordering::Equal => continue 'outer,
                    std::cmp::Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// All sub-itemsets of exactly `size` items, in lexicographic order.
    pub fn combinations(&self, size: usize) -> Combinations<'_> {
        Combinations::new(self, size)
    }

    /// Every (size-1)-subset, each obtained by dropping one item.
    pub fn immediate_subsets(&self) -> impl Iterator<Item = Itemset> + '_ {
        (0..self.len()).map(move |i| self.without(i))
    }

    pub fn codes(&self) -> Vec<String> {
        self.items.iter().map(|i| i.as_str().to_string()).collect()
    }
}

impl FromIterator<Item> for Itemset {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Deserialized items go through `Itemset::new`, so any order is accepted.
impl<'de> Deserialize<'de> for Itemset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Item>::deserialize(deserializer).map(Itemset::new)
    }
}

impl<'a> IntoIterator for &'a Itemset {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str(")")
    }
}

/// Iterator over fixed-size sub-itemsets, driven by an index vector.
pub struct Combinations<'a> {
    source: &'a Itemset,
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    fn new(source: &'a Itemset, size: usize) -> Self {
        Self {
            source,
            indices: (0..size).collect(),
            done: size > source.len(),
        }
    }
}

impl Iterator for Combinations<'_> {
    type Item = Itemset;

    fn next(&mut self) -> Option<Itemset> {
        if self.done {
            return None;
        }
        let current = Itemset {
            items: self
                .indices
                .iter()
                .map(|&i| self.source.items[i].clone())
                .collect(),
        };

        // Advance: find the rightmost index that can still move right.
        let n = self.source.len();
        let k = self.indices.len();
        let mut pos = k;
        while pos > 0 {
            pos -= 1;
            if self.indices[pos] < n - k + pos {
                self.indices[pos] += 1;
                for next in pos + 1..k {
                    self.indices[next] = self.indices[next - 1] + 1;
                }
                return Some(current);
            }
        }
        self.done = true;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_is_canonical() {
        let a = Itemset::of(&["y", "x", "y", "z"]);
        let b = Itemset::of(&["z", "x", "y"]);
        assert_eq!(a, b);
        assert_eq!(a.codes(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_deserialize_is_canonical() {
        let parsed: Itemset = serde_json::from_str(r#"["y", "x", "x"]"#).unwrap();
        assert_eq!(parsed, Itemset::of(&["x", "y"]));
        assert!(parsed.contains(&Item::from("y")));
        assert!(Itemset::of(&["x"]).is_subset_of(&parsed));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"["x","y"]"#);
    }

    #[test]
    fn test_shares_prefix() {
        assert!(Itemset::of(&["a", "b"]).shares_prefix(&Itemset::of(&["a", "c"])));
        assert!(!Itemset::of(&["a", "b"]).shares_prefix(&Itemset::of(&["b", "c"])));
        // singletons share the empty prefix
        assert!(Itemset::of(&["a"]).shares_prefix(&Itemset::of(&["b"])));
        assert!(!Itemset::of(&["a"]).shares_prefix(&Itemset::of(&["a", "b"])));
    }

    #[test]
    fn test_union_and_difference() {
        let l = Itemset::of(&["a", "c", "d"]);
        let r = Itemset::of(&["b", "c"]);
        assert_eq!(l.union(&r), Itemset::of(&["a", "b", "c", "d"]));
        assert_eq!(l.difference(&r), Itemset::of(&["a", "d"]));
        assert!(l.difference(&l).is_empty());
    }

    #[test]
    fn test_subset() {
        let t = Itemset::of(&["a", "b", "d", "f"]);
        assert!(Itemset::of(&["a", "d"]).is_subset_of(&t));
        assert!(Itemset::of(&["f"]).is_subset_of(&t));
        assert!(Itemset::default().is_subset_of(&t));
        assert!(!Itemset::of(&["c"]).is_subset_of(&t));
        assert!(!Itemset::of(&["a", "g"]).is_subset_of(&t));
        assert!(!t.is_subset_of(&Itemset::of(&["a"])));
    }

    #[test]
    fn test_combinations() {
        let l = Itemset::of(&["a", "b", "c", "d"]);
        let pairs: Vec<String> = l.combinations(2).map(|c| c.to_string()).collect();
        assert_eq!(
            pairs,
            vec!["(a, b)", "(a, c)", "(a, d)", "(b, c)", "(b, d)", "(c, d)"]
        );
        assert_eq!(l.combinations(1).count(), 4);
        assert_eq!(l.combinations(3).count(), 4);
        assert_eq!(l.combinations(4).count(), 1);
        assert_eq!(l.combinations(5).count(), 0);
    }

    #[test]
    fn test_immediate_subsets() {
        let subsets: Vec<Itemset> = Itemset::of(&["a", "b", "c"]).immediate_subsets().collect();
        assert_eq!(
            subsets,
            vec![
                Itemset::of(&["b", "c"]),
                Itemset::of(&["a", "c"]),
                Itemset::of(&["a", "b"]),
            ]
        );
    }
}
