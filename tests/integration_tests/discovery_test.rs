// tests/integration_tests/discovery_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use std::path::Path;
use txtstat::{analyse_file, find_text_files};

#[test]
fn test_discovery_finds_sorted_txt_files() -> Result<()> {
    let dir = setup_test_directory()?;

    let files = find_text_files(dir.path())?;
    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();

    assert_eq!(
        names,
        vec!["old.txt", "fable.txt", "letter.txt"],
        "hidden files and non-txt files are skipped, paths are sorted"
    );
    Ok(())
}

#[test]
fn test_discovery_of_missing_directory_is_an_error() {
    let result = find_text_files(Path::new("/no/such/directory"));
    assert!(result.is_err());
}

#[test]
fn test_discovered_files_analyse_cleanly() -> Result<()> {
    let dir = setup_test_directory()?;

    for path in find_text_files(dir.path())? {
        let statistics = analyse_file(&path);
        assert!(
            !statistics.filename.is_empty(),
            "{}: a discovered file must be readable",
            path.display()
        );
        assert!(statistics.total_words > 0);
    }
    Ok(())
}
