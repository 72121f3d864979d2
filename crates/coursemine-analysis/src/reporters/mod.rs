//! Output formats for mining reports.

pub mod console;
pub mod json;

use crate::pipeline::MiningReport;

/// Trait for report generation.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &MiningReport) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str) -> Option<Box<dyn Reporter>> {
    match format {
        "console" => Some(Box::new(console::ConsoleReporter::default())),
        "json" => Some(Box::new(json::JsonReporter)),
        _ => None,
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
