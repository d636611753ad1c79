// src/models/statistics.rs
use serde::Serialize;
use std::collections::BTreeMap;

/// Immutable result of one analysis run.
///
/// This is the only artifact handed to collaborators (summary printing,
/// JSON export); they read a subset of the fields and never mutate the
/// record. The frequency maps are ordered and the top-N lists sorted, so
/// analyzing the same input twice produces an identical record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub filename: String,
    // ==== Basic statistics ====
    pub total_lines: u64,
    pub total_paragraphs: u64,
    pub total_sentences: u64,
    pub total_words: u64,
    pub unique_word_count: u64,
    pub words_appearing_once: u64,
    pub total_characters_with_spaces: u64,
    pub total_characters_without_spaces: u64,
    pub avg_words_per_line: f64,
    // ==== Word analysis ====
    pub avg_word_length: f64,
    /// `None` until at least one word has been finalized.
    pub shortest_word: Option<String>,
    pub longest_word: Option<String>,
    /// Counts per word length, trailing zero buckets trimmed.
    pub word_length_distribution: Vec<u64>,
    pub ten_most_common_words: Vec<(String, u64)>,
    // ==== Sentence analysis ====
    pub average_words_per_sentence: f64,
    /// Shortest sentence with more than 2 words; shorter fragments never
    /// qualify.
    pub shortest_sentence: Option<String>,
    pub longest_sentence: Option<String>,
    /// Counts per sentence length in words.
    pub sentence_length_distribution: Vec<u64>,
    // ==== Character analysis ====
    pub total_letters: u64,
    pub total_digits: u64,
    pub total_spaces: u64,
    pub total_punctuation: u64,
    pub letter_frequency_distribution: BTreeMap<char, u64>,
    pub punctuation_distribution: BTreeMap<char, u64>,
    /// `[lowercase, uppercase]` letter counts.
    pub case_distribution: [u64; 2],
    pub ten_most_common_letters: Vec<(char, u64)>,
    // ==== Readability ====
    /// Words with more than 6 characters.
    pub long_words: u64,
    pub lix_score: f64,
}

impl Statistics {
    /// Degenerate all-zero record, returned for unreadable input instead
    /// of propagating the failure.
    #[must_use]
    pub fn empty(filename: String) -> Self {
        Self {
            filename,
            total_lines: 0,
            total_paragraphs: 0,
            total_sentences: 0,
            total_words: 0,
            unique_word_count: 0,
            words_appearing_once: 0,
            total_characters_with_spaces: 0,
            total_characters_without_spaces: 0,
            avg_words_per_line: 0.0,
            avg_word_length: 0.0,
            shortest_word: None,
            longest_word: None,
            word_length_distribution: Vec::new(),
            ten_most_common_words: Vec::new(),
            average_words_per_sentence: 0.0,
            shortest_sentence: None,
            longest_sentence: None,
            sentence_length_distribution: Vec::new(),
            total_letters: 0,
            total_digits: 0,
            total_spaces: 0,
            total_punctuation: 0,
            letter_frequency_distribution: BTreeMap::new(),
            punctuation_distribution: BTreeMap::new(),
            case_distribution: [0, 0],
            ten_most_common_letters: Vec::new(),
            long_words: 0,
            lix_score: 0.0,
        }
    }
}
