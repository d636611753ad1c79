// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        dir.path(),
        "fable.txt",
        "The cat sat on the mat. The dog barked loudly!\nBoth animals were tired.\n",
    )?;

    create_test_file(
        dir.path(),
        "letter.txt",
        "Dear Dr. Smith,\n\nThank you for the invitation. We will gladly attend.\n",
    )?;

    create_test_file(dir.path(), "notes.md", "Not a text file, must be skipped.")?;

    create_test_file(dir.path(), ".draft.txt", "Hidden draft")?;

    create_test_file(dir.path(), "archive/old.txt", "An archived sentence.\n")?;

    Ok(dir)
}
