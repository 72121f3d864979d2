//! ErrorCode trait for caller-facing error reporting.

/// Every error enum implements this to provide a stable code string
/// that callers (the CLI, scripts parsing stderr) can match on.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const LABEL_ERROR: &str = "LABEL_ERROR";
pub const MINING_ERROR: &str = "MINING_ERROR";
