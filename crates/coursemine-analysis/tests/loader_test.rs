//! Loading records and labels from files on disk.

use std::fs;

use coursemine_analysis::labels::{LabelLookup, LabelTable};
use coursemine_analysis::loader::{read_records, InputOptions};
use coursemine_analysis::{Item, ScoreRecord, TransactionTable};
use coursemine_core::config::InputConfig;
use coursemine_core::errors::{ErrorCode, LabelError, LoadError};
use tempfile::TempDir;

#[test]
fn test_semicolon_file_with_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.csv");
    fs::write(&path, "student;course;score\ns1;c1;91\ns1;c2;70\n\ns2;c1;95\n").unwrap();

    let config = InputConfig {
        delimiter: Some(";".to_string()),
        has_header: Some(true),
        ..Default::default()
    };
    let options = InputOptions::from_config(&config);
    let records = read_records(&path, &options).unwrap();
    assert_eq!(
        records,
        vec![
            ScoreRecord::new("s1", "c1", 91),
            ScoreRecord::new("s1", "c2", 70),
            ScoreRecord::new("s2", "c1", 95),
        ]
    );

    let table = TransactionTable::from_records(records, 90);
    assert_eq!(table.len(), 2);
    assert_eq!(table.distinct_items(), 1);
}

#[test]
fn test_bad_score_reports_file_and_line() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scores.csv");
    fs::write(&path, "s1,c1,95\ns1,c2,ninety\n").unwrap();

    let err = read_records(&path, &InputOptions::default()).unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_RECORD");
    match err {
        LoadError::InvalidScore { path: source, line, value } => {
            assert!(source.ends_with("scores.csv"));
            assert_eq!(line, 2);
            assert_eq!(value, "ninety");
        }
        other => panic!("expected InvalidScore, got {other:?}"),
    }
}

#[test]
fn test_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = read_records(dir.path(), &InputOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert_eq!(err.error_code(), "LOAD_ERROR");
}

#[test]
fn test_label_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.csv");
    fs::write(&path, "c1,Calculus\nc2,Linear Algebra\nc1,Calculus I\n").unwrap();

    let labels = LabelTable::load(&path, &InputOptions::default()).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.label(&Item::from("c1")).unwrap(), "Calculus I");
    assert_eq!(labels.label(&Item::from("c2")).unwrap(), "Linear Algebra");
}

#[test]
fn test_missing_label_file() {
    let dir = TempDir::new().unwrap();
    let err = LabelTable::load(&dir.path().join("none.csv"), &InputOptions::default()).unwrap_err();
    assert!(matches!(err, LabelError::Load(LoadError::FileNotFound { .. })));
    assert_eq!(err.error_code(), "LOAD_ERROR");
}

#[test]
fn test_records_header_does_not_skip_first_label() {
    let dir = TempDir::new().unwrap();
    let records_path = dir.path().join("scores.csv");
    let labels_path = dir.path().join("course.csv");
    fs::write(&records_path, "student,course,score\ns1,c1,95\n").unwrap();
    fs::write(&labels_path, "c1,Calculus\nc2,Physics\n").unwrap();

    let config = InputConfig {
        has_header: Some(true),
        ..Default::default()
    };
    let records = read_records(&records_path, &InputOptions::from_config(&config)).unwrap();
    assert_eq!(records, vec![ScoreRecord::new("s1", "c1", 95)]);

    let labels = LabelTable::load(&labels_path, &InputOptions::labels_from_config(&config)).unwrap();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels.label(&Item::from("c1")).unwrap(), "Calculus");
}

#[test]
fn test_label_header_configured_separately() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("course.csv");
    fs::write(&path, "code,name\nc1,Calculus\n").unwrap();

    let config = InputConfig {
        labels_has_header: Some(true),
        ..Default::default()
    };
    let labels = LabelTable::load(&path, &InputOptions::labels_from_config(&config)).unwrap();
    assert_eq!(labels.len(), 1);
    assert!(labels.label(&Item::from("code")).is_err());
    assert!(!InputOptions::from_config(&config).has_header);
}
