//! JSON reporter for machine consumption.

use serde_json::json;

use super::Reporter;
use crate::pipeline::MiningReport;

/// JSON reporter for machine-readable output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &MiningReport) -> Result<String, String> {
        let output = json!({
            "entity_count": report.entity_count,
            "min_support": report.min_support,
            "min_confidence": report.min_confidence,
            "rule_scope": report.rule_scope,
            "levels": report.levels,
            "rules": report.rules,
            "diagnostics": report.diagnostics,
        });

        serde_json::to_string_pretty(&output).map_err(|e| e.to_string())
    }
}
