//! Apriori frequent-itemset mining and rule generation.
//!
//! Dependency chain: frequent_one → (candidates → support)* → rules

pub mod candidates;
pub mod driver;
pub mod frequent_one;
pub mod rules;
pub mod support;
pub mod types;

pub use candidates::{generate_candidates, has_infrequent_subset};
pub use driver::{Apriori, AprioriResult};
pub use frequent_one::frequent_one_itemsets;
pub use rules::{LabeledRule, RuleGenerator};
pub use support::count_support;
pub use types::{Candidates, FrequentLevel, FrequentLevels, LevelStats, Rule};
