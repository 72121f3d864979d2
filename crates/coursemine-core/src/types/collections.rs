//! Re-exports of collection types used by the miner.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
pub use std::collections::BTreeMap;

/// SmallVec sized for itemsets (usually <4 items).
pub type SmallVec4<T> = SmallVec<[T; 4]>;
