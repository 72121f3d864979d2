//! coursemine-core: shared foundation for the coursemine workspace.
//!
//! - `errors`: one `thiserror` enum per subsystem, each with a stable error code
//! - `config`: TOML configuration with layered resolution
//! - `tracing`: `tracing-subscriber` setup driven by `COURSEMINE_LOG`
//! - `types`: collection re-exports shared by the analysis crate
//! - `constants`: compiled defaults

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::CoursemineConfig;
pub use errors::{ErrorCode, PipelineError};
