// src/models/analysis_state.rs
use std::collections::{HashMap, HashSet};

/// Number of word-length buckets tracked during a run. Words longer than
/// this clamp into the last bucket instead of growing the array.
pub const WORD_LENGTH_BUCKETS: usize = 45;

/// Mutable working state for a single analysis run.
///
/// One `AnalysisState` is created per invocation, owned by the aggregator
/// for the duration of the pass and consumed when the final
/// [`Statistics`](crate::models::Statistics) record is built. Nothing in
/// here is shared between runs.
///
/// The extremes start out unset and are only replaced by real data: until
/// the first word is finalized, `shortest_word`/`longest_word` stay `None`
/// rather than holding a placeholder that a long enough text could beat.
#[derive(Debug)]
pub struct AnalysisState {
    /// Lowercased run of alphabetic characters, reset on each word boundary.
    pub current_word: String,
    /// Raw sentence text (original case and punctuation), reset on each
    /// sentence boundary.
    pub current_sentence: String,
    pub word_frequency: HashMap<String, u64>,
    pub letter_frequency: HashMap<char, u64>,
    pub punctuation_frequency: HashMap<char, u64>,
    pub unique_words: HashSet<String>,
    /// Indexed by word length - 1, clamped to the last bucket.
    pub word_lengths: [u64; WORD_LENGTH_BUCKETS],
    /// Indexed by sentence word count - 1, grown with zero-fill as needed.
    pub sentence_lengths: Vec<u64>,
    /// Words with more than 6 characters, used for the LIX score.
    pub long_words: u64,
    /// `[lowercase, uppercase]` letter counts.
    pub case_counts: [u64; 2],
    pub shortest_word: Option<String>,
    pub longest_word: Option<String>,
    pub shortest_sentence: Option<String>,
    pub longest_sentence: Option<String>,
    pub total_lines: u64,
    pub total_paragraphs: u64,
    pub total_sentences: u64,
    pub total_words: u64,
    pub total_characters_with_spaces: u64,
    pub total_characters_without_spaces: u64,
    pub total_letters: u64,
    pub total_digits: u64,
    pub total_spaces: u64,
    pub total_punctuation: u64,
}

impl AnalysisState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_word: String::new(),
            current_sentence: String::new(),
            word_frequency: HashMap::new(),
            letter_frequency: HashMap::new(),
            punctuation_frequency: HashMap::new(),
            unique_words: HashSet::new(),
            word_lengths: [0; WORD_LENGTH_BUCKETS],
            sentence_lengths: Vec::new(),
            long_words: 0,
            case_counts: [0, 0],
            shortest_word: None,
            longest_word: None,
            shortest_sentence: None,
            longest_sentence: None,
            total_lines: 0,
            total_paragraphs: 0,
            total_sentences: 0,
            total_words: 0,
            total_characters_with_spaces: 0,
            total_characters_without_spaces: 0,
            total_letters: 0,
            total_digits: 0,
            total_spaces: 0,
            total_punctuation: 0,
        }
    }
}

impl Default for AnalysisState {
    fn default() -> Self {
        Self::new()
    }
}
