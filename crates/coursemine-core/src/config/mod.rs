//! Configuration system for coursemine.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod coursemine_config;
pub mod input_config;
pub mod mining_config;

pub use coursemine_config::{CliOverrides, CoursemineConfig};
pub use input_config::InputConfig;
pub use mining_config::{MiningConfig, RuleScope};
