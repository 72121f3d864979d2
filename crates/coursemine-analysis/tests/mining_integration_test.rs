//! End-to-end mining: records on disk → transactions → levels → labeled rules → reports.

use coursemine_analysis::labels::{IdentityLabels, LabelTable};
use coursemine_analysis::loader::{read_records, InputOptions};
use coursemine_analysis::mining::{Apriori, RuleGenerator};
use coursemine_analysis::pipeline::{MiningParams, MiningPipeline, SupportThreshold};
use coursemine_analysis::reporters::{available_formats, create_reporter};
use coursemine_analysis::{Itemset, TransactionTable};
use coursemine_core::config::RuleScope;
use coursemine_core::errors::{ErrorCode, LabelError, LoadError, PipelineError};

const RECORDS: &str = "\
A,x,95
A,y,91
A,z,40
B,x,90
B,y,99
B,z,93
B,x,97
C,x,100
C,y,89
D,y,92
D,z,90
E,w,10
";

const LABELS: &str = "\
x,Calculus
y,Linear Algebra
z,Physics
";

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn load_table(dir: &tempfile::TempDir) -> TransactionTable {
    let path = write(dir, "scores.csv", RECORDS);
    let records = read_records(&path, &InputOptions::default()).unwrap();
    TransactionTable::from_records(records, 90)
}

#[test]
fn test_round_trip_scenario() {
    let dir = tempfile::TempDir::new().unwrap();
    let table = load_table(&dir);

    // E has no qualifying score and is not an entity of the table.
    assert_eq!(table.len(), 4);
    assert_eq!(table.get("A"), Some(&Itemset::of(&["x", "y"])));
    assert_eq!(table.get("B"), Some(&Itemset::of(&["x", "y", "z"])));
    assert_eq!(table.get("C"), Some(&Itemset::of(&["x"])));
    assert_eq!(table.get("D"), Some(&Itemset::of(&["y", "z"])));

    let levels = Apriori::new(2).mine(&table).levels;
    assert_eq!(levels.len(), 2);
    let l1: Vec<u64> = levels.level(1).unwrap().iter().map(|(_, s)| s).collect();
    assert_eq!(l1, vec![3, 3, 2]);
    let l2: Vec<String> = levels
        .level(2)
        .unwrap()
        .iter()
        .map(|(k, s)| format!("{k}:{s}"))
        .collect();
    assert_eq!(l2, vec!["(x, y):2", "(y, z):2"]);

    let xy = Itemset::of(&["x", "y"]);
    let emitted = RuleGenerator::new(0.6).rules_for(&xy, 2, &levels).unwrap();
    assert_eq!(emitted.len(), 2);
    for rule in &emitted {
        assert!((rule.confidence - 2.0 / 3.0).abs() < 1e-9);
    }
    assert!(RuleGenerator::new(0.7).rules_for(&xy, 2, &levels).unwrap().is_empty());
}

#[test]
fn test_pipeline_with_labels_from_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let table = load_table(&dir);
    let labels_path = write(&dir, "course.csv", LABELS);
    let labels = LabelTable::load(&labels_path, &InputOptions::default()).unwrap();

    let params = MiningParams {
        min_support: SupportThreshold::Fraction(0.5),
        min_confidence: 0.6,
        rule_scope: RuleScope::Maximal,
    };
    let report = MiningPipeline::new(params).run(&table, &labels).unwrap();

    assert_eq!(report.min_support, 2);
    let first = &report.rules[0];
    assert_eq!(first.antecedent, vec!["Calculus"]);
    assert_eq!(first.consequent, vec!["Linear Algebra"]);
    assert!(report
        .rules
        .iter()
        .all(|r| r.confidence >= 0.6 && r.confidence <= 1.0));

    let console = create_reporter("console").unwrap().generate(&report).unwrap();
    assert!(console.contains("[Calculus] --> [Linear Algebra]  confidence: 0.667"));
    assert!(console.contains("L2 (2 itemsets)"));

    let json = create_reporter("json").unwrap().generate(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["min_support"], 2);
    assert_eq!(value["rule_scope"], "maximal");
    assert_eq!(value["rules"].as_array().unwrap().len(), report.rules.len());
    assert_eq!(value["levels"][1]["itemsets"][0]["codes"][0], "x");
}

#[test]
fn test_missing_label_fails_the_run() {
    let dir = tempfile::TempDir::new().unwrap();
    let table = load_table(&dir);
    let labels = LabelTable::from_pairs([("x", "Calculus"), ("y", "Linear Algebra")]);

    let params = MiningParams {
        min_support: SupportThreshold::Count(2),
        min_confidence: 0.5,
        rule_scope: RuleScope::Maximal,
    };
    let err = MiningPipeline::new(params).run(&table, &labels).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Label(LabelError::UnknownItem { ref item }) if item == "z"
    ));
    assert_eq!(err.error_code(), "LABEL_ERROR");
}

#[test]
fn test_empty_input_produces_no_levels_or_rules() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = write(&dir, "empty.csv", "");
    let records = read_records(&path, &InputOptions::default()).unwrap();
    let table = TransactionTable::from_records(records, 90);
    assert!(table.is_empty());

    let report = MiningPipeline::new(MiningParams::default())
        .run(&table, &IdentityLabels)
        .unwrap();
    assert!(report.levels.is_empty());
    assert!(report.rules.is_empty());
    assert!(report.frequent.is_empty());

    let console = create_reporter("console").unwrap().generate(&report).unwrap();
    assert!(console.contains("No frequent itemsets."));
}

#[test]
fn test_pipeline_is_repeatable() {
    let dir = tempfile::TempDir::new().unwrap();
    let table = load_table(&dir);
    let pipeline = MiningPipeline::new(MiningParams {
        min_support: SupportThreshold::Count(1),
        min_confidence: 0.0,
        rule_scope: RuleScope::All,
    });
    let first = pipeline.run(&table, &IdentityLabels).unwrap();
    let second = pipeline.run(&table, &IdentityLabels).unwrap();
    assert_eq!(first.levels, second.levels);
    assert_eq!(first.rules, second.rules);
}

#[test]
fn test_missing_records_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = read_records(&dir.path().join("nope.csv"), &InputOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
}

#[test]
fn test_unknown_reporter_format() {
    assert!(create_reporter("xml").is_none());
    for format in available_formats() {
        assert_eq!(create_reporter(format).unwrap().name(), *format);
    }
}
