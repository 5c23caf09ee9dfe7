//! Unit tests for storage functionality

use super::*;
use serde_json::json;
use tempfile::TempDir;

#[test]
fn test_parse_lowercases_and_trims() {
    let history = SelectionHistory::parse("Arsenal\n  LIVERPOOL \nman city\n");

    assert_eq!(history.len(), 3);
    assert!(history.contains("arsenal"));
    assert!(history.contains("liverpool"));
    assert!(history.contains("Man City"));
}

#[test]
fn test_parse_skips_blank_lines() {
    let history = SelectionHistory::parse("\narsenal\n\n   \nspurs\n");
    assert_eq!(history.iter().collect::<Vec<_>>(), vec!["arsenal", "spurs"]);
}

#[test]
fn test_parse_collapses_duplicates() {
    let history = SelectionHistory::parse("Chelsea\nchelsea\nCHELSEA\n");
    assert_eq!(history.len(), 1);
}

#[test]
fn test_contains_is_case_insensitive() {
    let history: SelectionHistory = ["Nott'm Forest"].into_iter().collect();

    assert!(history.contains("nott'm forest"));
    assert!(history.contains("NOTT'M FOREST"));
    assert!(!history.contains("forest"));
}

#[test]
fn test_load_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let history = SelectionHistory::load(&dir.path().join("lms.txt")).unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_record_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lms.txt");

    let mut history = SelectionHistory::load(&path).unwrap();
    history.record(&path, "Aston Villa").unwrap();
    assert!(history.contains("aston villa"));

    let reloaded = SelectionHistory::load(&path).unwrap();
    assert_eq!(reloaded.iter().collect::<Vec<_>>(), vec!["aston villa"]);
}

#[test]
fn test_record_appends_without_rewriting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lms.txt");
    // Existing file content is preserved byte for byte, including odd casing
    std::fs::write(&path, "Brighton\n").unwrap();

    let mut history = SelectionHistory::load(&path).unwrap();
    history.record(&path, "Fulham").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "Brighton\nfulham\n");
}

#[test]
fn test_snapshot_uses_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players_data_gw.json");

    save_snapshot(&path, &json!({ "events": [{ "id": 1 }] })).unwrap();
    let out = std::fs::read_to_string(&path).unwrap();

    assert_eq!(
        out,
        "{\n    \"events\": [\n        {\n            \"id\": 1\n        }\n    ]\n}"
    );
}

#[test]
fn test_save_snapshot_overwrites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("players_data_gw.json");

    save_snapshot(&path, &json!({ "teams": [1, 2, 3], "extra": "long value" })).unwrap();
    save_snapshot(&path, &json!({ "teams": [] })).unwrap();

    let reloaded: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(reloaded, json!({ "teams": [] }));
}
