//! Data structures shared across coursemine crates.

pub mod collections;

pub use collections::{BTreeMap, FxHashMap, FxHashSet, SmallVec};
