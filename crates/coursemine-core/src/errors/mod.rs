//! Error handling for coursemine.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod label_error;
pub mod load_error;
pub mod mining_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use label_error::LabelError;
pub use load_error::LoadError;
pub use mining_error::MiningError;
pub use pipeline_error::PipelineError;
