//! Shared constants for coursemine.

/// coursemine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default minimum score for a record to qualify its item.
pub const DEFAULT_MIN_SCORE: i64 = 90;

/// Default support threshold as a fraction of entities.
pub const DEFAULT_SUPPORT_FRACTION: f64 = 0.25;

/// Default minimum rule confidence.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Default field delimiter for record and label files.
pub const DEFAULT_DELIMITER: char = ',';

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "coursemine.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "COURSEMINE_LOG";

/// Log filter used when `COURSEMINE_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "coursemine=info,coursemine_core=info,coursemine_analysis=info";
