// src/utils.rs
use anyhow::{Context as _, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::models::Statistics;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| {
        // Don't consider temp directories as hidden
        if name.starts_with(".tmp") {
            return false;
        }
        name.starts_with('.')
    })
}

/// Collects every non-hidden `.txt` file under a directory, sorted by
/// path so repeated runs visit files in the same order.
///
/// # Errors
///
/// Returns an error if the directory cannot be accessed or read.
pub fn find_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry =
            entry.with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == "txt") {
            files.push(entry.path().to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Writes the full statistics record as pretty JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the record cannot be
/// written to it.
pub fn export_json(statistics: &Statistics, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    serde_json::to_writer_pretty(file, statistics)
        .with_context(|| format!("Failed to write statistics to {}", path.display()))?;
    Ok(())
}

/// Prints the headline numbers of a record.
pub fn print_summary(statistics: &Statistics) {
    println!("File: {}", statistics.filename);
    println!("Lines: {}", statistics.total_lines);
    println!("Paragraphs: {}", statistics.total_paragraphs);
    println!("Sentences: {}", statistics.total_sentences);
    println!(
        "Words: {} ({} unique, {} appearing once)",
        statistics.total_words, statistics.unique_word_count, statistics.words_appearing_once
    );
    println!(
        "Characters: {} with spaces, {} without",
        statistics.total_characters_with_spaces, statistics.total_characters_without_spaces
    );
    println!(
        "Average words per sentence: {:.2}",
        statistics.average_words_per_sentence
    );
    println!("Average word length: {:.2}", statistics.avg_word_length);

    if let Some(word) = &statistics.longest_word {
        println!("Longest word: {word}");
    }
    if let Some(sentence) = &statistics.longest_sentence {
        println!("Longest sentence: {sentence}");
    }

    for (word, count) in &statistics.ten_most_common_words {
        println!("{count:8} times  {word}");
    }

    println!("LIX score: {:.2}", statistics.lix_score);
}
