//! Integration tests for smudge.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use smudge::{
    CorruptionPlan, DataTable, Parser, PlanEntry, Smudge, SmudgeConfig, SmudgeError,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn seeded(seed: u64) -> Smudge {
    Smudge::with_config(SmudgeConfig {
        seed: Some(seed),
        ..SmudgeConfig::default()
    })
}

fn read_back(path: &PathBuf) -> DataTable {
    let (table, _) = Parser::new().parse_file(path).expect("Failed to re-read output");
    table
}

// =============================================================================
// Shape and Labeling Tests
// =============================================================================

#[test]
fn test_outputs_keep_input_shape() {
    let file = create_test_file(
        "id,score,label\n\
         1,0.5,aa\n\
         2,1.5,bb\n\
         3,2.5,cc\n\
         4,3.5,dd\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(1, 50.0), PlanEntry::new(2, 50.0)]);
    let report = seeded(7).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    assert_eq!(corrupted.headers, vec!["id", "score", "label"]);
    assert_eq!(tracker.headers, corrupted.headers);
    assert_eq!(corrupted.row_count(), 4);
    assert_eq!(tracker.row_count(), 4);
}

#[test]
fn test_untargeted_columns_are_untouched() {
    let file = create_test_file(
        "id,name\n\
         1,Alice\n\
         2,Bob\n\
         3,Carol\n\
         4,Dave\n\
         5,Erin\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(1, 100.0)]);
    let report = seeded(13).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    for row in 0..5 {
        assert_eq!(corrupted.get(row, 0), Some((row + 1).to_string().as_str()));
        assert_eq!(tracker.get(row, 0), Some("1"));
    }
    assert_eq!(report.summary.columns["id"].total(), 0);
    assert_eq!(report.summary.columns["name"].total(), 5);
}

#[test]
fn test_tracker_codes_match_cell_state() {
    let file = create_test_file(
        "word\n\
         apple\n\
         banana\n\
         cherry\n\
         damson\n\
         elder\n\
         feijoa\n\
         grape\n\
         honeydew\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let originals = [
        "apple", "banana", "cherry", "damson", "elder", "feijoa", "grape", "honeydew",
    ];

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 100.0)]);
    let report = seeded(41).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    for (row, original) in originals.iter().enumerate() {
        let cell = corrupted.get(row, 0).unwrap();
        match tracker.get(row, 0).unwrap() {
            "2" => {
                let diff = cell.chars().count() as i64 - original.chars().count() as i64;
                assert!(diff == 1 || diff == -1, "code 2 but length diff {}", diff);
            }
            "3" => {
                assert_eq!(cell.len(), 8);
                assert!(cell.chars().all(|c| c.is_ascii_alphanumeric()));
            }
            "4" => assert_eq!(cell, ""),
            code => panic!("unexpected tracker code {} for a text column", code),
        }
    }
}

// =============================================================================
// Numeric Column Scenarios
// =============================================================================

#[test]
fn test_numeric_column_twenty_percent() {
    // 100 integer rows, 20% corruption: exactly 20 cells in {4, 5}
    let mut content = String::from("value\n");
    for i in 1..=100 {
        content.push_str(&format!("{}\n", i));
    }
    let file = create_test_file(&content);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 20.0)]);
    let report = seeded(2024).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    let mut touched = 0;
    for row in 0..100 {
        let cell = corrupted.get(row, 0).unwrap();
        match tracker.get(row, 0).unwrap() {
            "1" => assert_eq!(cell, (row + 1).to_string()),
            "4" => {
                assert_eq!(cell, "");
                touched += 1;
            }
            "5" => {
                // Integer noise stays integral
                cell.parse::<i64>().expect("code 5 cell no longer integral");
                touched += 1;
            }
            code => panic!("unexpected tracker code {} for an integer column", code),
        }
    }
    assert_eq!(touched, 20);
    assert_eq!(report.summary.cells_corrupted, 20);
}

#[test]
fn test_float_noise_changes_value() {
    let mut content = String::from("reading\n");
    for i in 0..50 {
        content.push_str(&format!("{:.1}\n", i as f64 / 2.0));
    }
    let file = create_test_file(&content);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 100.0)]);
    let report = seeded(5150).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    for row in 0..50 {
        if tracker.get(row, 0) == Some("5") {
            let original = row as f64 / 2.0;
            let mutated: f64 = corrupted.get(row, 0).unwrap().parse().unwrap();
            assert!(mutated != original, "noise left row {} unchanged", row);
        }
    }
    assert!(report.summary.columns["reading"].noise > 0);
}

// =============================================================================
// Edge Cases
// =============================================================================

#[test]
fn test_empty_plan_is_identity() {
    let file = create_test_file("a,b\nx,1\ny,2\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let report = seeded(1).run(file.path(), &CorruptionPlan::new(), &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "a,b\nx,1\ny,2\n"
    );
    assert_eq!(
        std::fs::read_to_string(&report.tracker_output).unwrap(),
        "a,b\n1,1\n1,1\n"
    );
}

#[test]
fn test_zero_row_table_passes_through() {
    let file = create_test_file("a,b\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 50.0)]);
    let report = seeded(1).run(file.path(), &plan, &output).unwrap();

    let corrupted = read_back(&output);
    let tracker = read_back(&report.tracker_output);

    assert_eq!(corrupted.row_count(), 0);
    assert_eq!(tracker.row_count(), 0);
    assert_eq!(report.summary.cells_corrupted, 0);
}

#[test]
fn test_out_of_range_plan_writes_nothing() {
    let file = create_test_file("a\n1\n2\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.csv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(5, 10.0)]);
    let err = seeded(1).run(file.path(), &plan, &output).unwrap_err();

    assert!(matches!(err, SmudgeError::ColumnOutOfRange { index: 5, .. }));
    assert!(!output.exists());
    assert!(!dir.path().join("dirty_tracker.csv").exists());
}

#[test]
fn test_missing_input_fails_before_corruption() {
    let plan = CorruptionPlan::new();
    let err = seeded(1)
        .run("definitely/not/here.csv", &plan, "out.csv")
        .unwrap_err();
    assert!(matches!(err, SmudgeError::Io { .. }));
}

#[test]
fn test_tsv_round_trips_with_same_delimiter() {
    let file = create_test_file("a\tb\n1\tx\n2\ty\n3\tz\n");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dirty.tsv");

    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(1, 33.0)]);
    let report = seeded(3).run(file.path(), &plan, &output).unwrap();

    assert_eq!(report.source.format, "tsv");
    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("a\tb\n"));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_outputs() {
    let content = "id,word\n1,alpha\n2,beta\n3,gamma\n4,delta\n5,epsilon\n";
    let plan = CorruptionPlan::with_entries(vec![PlanEntry::new(0, 60.0), PlanEntry::new(1, 60.0)]);

    let mut outputs = Vec::new();
    for _ in 0..2 {
        let file = create_test_file(content);
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("dirty.csv");
        let report = seeded(424242).run(file.path(), &plan, &output).unwrap();
        outputs.push((
            std::fs::read_to_string(&output).unwrap(),
            std::fs::read_to_string(&report.tracker_output).unwrap(),
        ));
    }

    assert_eq!(outputs[0], outputs[1]);
}
