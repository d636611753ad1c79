// tests/integration_tests/export_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use std::fs;
use txtstat::{analyse_file, export_json};

#[test]
fn test_exported_json_matches_the_record() -> Result<()> {
    let dir = setup_test_directory()?;
    let statistics = analyse_file(&dir.path().join("fable.txt"));

    let out = dir.path().join("fable_results.json");
    export_json(&statistics, &out)?;

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out)?)?;
    assert_eq!(value["filename"], "fable.txt");
    assert_eq!(value["total_words"], 14);
    assert_eq!(value["total_sentences"], 3);
    assert_eq!(value["ten_most_common_words"][0][0], "the");
    assert_eq!(value["ten_most_common_words"][0][1], 3);
    Ok(())
}

#[test]
fn test_export_to_unwritable_path_is_an_error() -> Result<()> {
    let dir = setup_test_directory()?;
    let statistics = analyse_file(&dir.path().join("fable.txt"));

    let result = export_json(&statistics, &dir.path().join("missing/out.json"));
    assert!(result.is_err(), "parent directory does not exist");
    Ok(())
}
