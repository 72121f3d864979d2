//! Console reporter: human-readable output.

use super::Reporter;
use crate::pipeline::MiningReport;

/// Plain-text reporter for terminals.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    /// Print every frequent level, not only the rules.
    pub show_levels: bool,
    /// Digits after the decimal point for confidences and ratios.
    pub precision: usize,
}

impl ConsoleReporter {
    pub fn new(show_levels: bool, precision: usize) -> Self {
        Self {
            show_levels,
            precision,
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true, 3)
    }
}

fn bracketed(labels: &[String]) -> String {
    format!("[{}]", labels.join(", "))
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &MiningReport) -> Result<String, String> {
        let p = self.precision;
        let mut output = String::new();

        output.push_str(&format!("Entities:       {}\n", report.entity_count));
        output.push_str(&format!("Min support:    {}\n", report.min_support));
        output.push_str(&format!("Min confidence: {}\n", report.min_confidence));
        output.push_str(&format!("Rule scope:     {}\n", report.rule_scope));

        if self.show_levels {
            for level in &report.levels {
                output.push_str(&format!(
                    "\nL{} ({} itemsets)\n",
                    level.size,
                    level.itemsets.len()
                ));
                for itemset in &level.itemsets {
                    output.push_str(&format!(
                        "  {}  support: {} ({:.p$})\n",
                        bracketed(&itemset.labels),
                        itemset.support,
                        itemset.support_ratio,
                    ));
                }
            }
        }

        if report.levels.is_empty() {
            output.push_str("\nNo frequent itemsets.\n");
            return Ok(output);
        }

        output.push_str(&format!("\nRules ({})\n", report.rules.len()));
        for rule in &report.rules {
            output.push_str(&format!(
                "  {} --> {}  confidence: {:.p$}\n",
                bracketed(&rule.antecedent),
                bracketed(&rule.consequent),
                rule.confidence,
            ));
        }

        Ok(output)
    }
}
