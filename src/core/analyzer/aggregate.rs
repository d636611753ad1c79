// src/core/analyzer/aggregate.rs
use anyhow::{Context as _, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::analyzer::classify::{CharClass, classify};
use crate::core::analyzer::frequency::top_n;
use crate::core::analyzer::readability::lix;
use crate::core::analyzer::{sentence, word};
use crate::models::{AnalysisState, Statistics};

/// Entries kept in the most-common-words and most-common-letters lists.
const TOP_COUNT: usize = 10;

/// Analyses a single text file and returns its statistics record.
///
/// A missing or unreadable file is not a crash condition: it is logged and
/// a degenerate all-zero record with an empty filename is returned, so no
/// partial statistics are ever surfaced as valid.
#[must_use]
pub fn analyse_file(path: &Path) -> Statistics {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            warn!("File not found: {} ({err})", path.display());
            return Statistics::empty(String::new());
        }
    };

    match analyse_reader(BufReader::new(file), &filename) {
        Ok(statistics) => {
            info!(
                "Analysis complete! Processed {} lines of \"{}\"",
                statistics.total_lines, statistics.filename
            );
            statistics
        }
        Err(err) => {
            warn!("Could not read {}: {err}", path.display());
            Statistics::empty(String::new())
        }
    }
}

/// Analyses text from a buffered reader, consumed line by line with the
/// line terminator included.
///
/// This is the single pass: every character is classified once and fed to
/// both the word accumulator and the sentence segmenter, then the working
/// state is finalized into the immutable record.
///
/// # Errors
///
/// Returns an error if a line cannot be read from the input (for example
/// invalid UTF-8).
pub fn analyse_reader(mut reader: impl BufRead, filename: &str) -> Result<Statistics> {
    let mut state = AnalysisState::new();
    let mut line = String::new();

    loop {
        line.clear();
        let bytes = reader
            .read_line(&mut line)
            .context("Failed to read line from input")?;
        if bytes == 0 {
            break;
        }
        process_line(&mut state, &line);
    }

    Ok(finalize(state, filename))
}

fn process_line(state: &mut AnalysisState, line: &str) {
    state.total_lines = state.total_lines.saturating_add(1);

    // Coarse heuristic carried over from the first version of this tool:
    // every non-blank line counts as a paragraph unit.
    if !line.trim().is_empty() {
        state.total_paragraphs = state.total_paragraphs.saturating_add(1);
    }

    for ch in line.chars() {
        process_char(state, ch);
    }
}

fn process_char(state: &mut AnalysisState, ch: char) {
    state.total_characters_with_spaces = state.total_characters_with_spaces.saturating_add(1);

    // The sentence check runs before the word accumulator consumes the
    // character, so the word buffer still holds the token preceding a
    // terminator when the abbreviation exceptions are consulted.
    sentence::feed(state, ch);

    match classify(ch) {
        CharClass::Digit => state.total_digits = state.total_digits.saturating_add(1),
        CharClass::Space => state.total_spaces = state.total_spaces.saturating_add(1),
        CharClass::Punctuation => {
            state.total_punctuation = state.total_punctuation.saturating_add(1);
            *state.punctuation_frequency.entry(ch).or_insert(0) += 1;
        }
        CharClass::Letter | CharClass::Other => {}
    }

    word::feed(state, ch);
}

/// Flushes in-progress word and sentence, then folds the working state
/// into the immutable record. Runs for every analysis, including an empty
/// input.
fn finalize(mut state: AnalysisState, filename: &str) -> Statistics {
    word::finalize(&mut state);
    sentence::flush(&mut state);

    let avg_words_per_line = guarded_ratio(state.total_words, state.total_lines);
    let avg_word_length = guarded_ratio(state.total_characters_without_spaces, state.total_words);
    let average_words_per_sentence = guarded_ratio(state.total_words, state.total_sentences);

    let mut word_length_distribution = state.word_lengths.to_vec();
    let kept = word_length_distribution
        .iter()
        .rposition(|&count| count != 0)
        .map_or(0, |index| index + 1);
    word_length_distribution.truncate(kept);

    let unique_word_count = u64::try_from(state.unique_words.len()).unwrap_or(u64::MAX);
    let words_appearing_once = u64::try_from(
        state
            .word_frequency
            .values()
            .filter(|&&count| count == 1)
            .count(),
    )
    .unwrap_or(u64::MAX);

    let lix_score = lix(state.total_words, state.total_sentences, state.long_words);

    let ten_most_common_words = top_n(&state.word_frequency, TOP_COUNT);
    let ten_most_common_letters = top_n(&state.letter_frequency, TOP_COUNT);

    Statistics {
        filename: filename.to_string(),
        total_lines: state.total_lines,
        total_paragraphs: state.total_paragraphs,
        total_sentences: state.total_sentences,
        total_words: state.total_words,
        unique_word_count,
        words_appearing_once,
        total_characters_with_spaces: state.total_characters_with_spaces,
        total_characters_without_spaces: state.total_characters_without_spaces,
        avg_words_per_line,
        avg_word_length,
        shortest_word: state.shortest_word,
        longest_word: state.longest_word,
        word_length_distribution,
        ten_most_common_words,
        average_words_per_sentence,
        shortest_sentence: state.shortest_sentence,
        longest_sentence: state.longest_sentence,
        sentence_length_distribution: state.sentence_lengths,
        total_letters: state.total_letters,
        total_digits: state.total_digits,
        total_spaces: state.total_spaces,
        total_punctuation: state.total_punctuation,
        letter_frequency_distribution: state.letter_frequency.into_iter().collect(),
        punctuation_distribution: state.punctuation_frequency.into_iter().collect(),
        case_distribution: state.case_counts,
        ten_most_common_letters,
        long_words: state.long_words,
        lix_score,
    }
}

fn guarded_ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
