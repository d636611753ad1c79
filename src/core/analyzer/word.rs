// src/core/analyzer/word.rs
use crate::models::AnalysisState;
use crate::models::analysis_state::WORD_LENGTH_BUCKETS;

/// Feeds one character to the word accumulator.
///
/// Alphabetic characters extend the current word (lowercased) and bump the
/// per-letter counters; anything else is a word boundary and finalizes the
/// buffered word.
// TODO: contractions like "doesn't" currently split into two words
pub fn feed(state: &mut AnalysisState, ch: char) {
    if ch.is_ascii_alphabetic() {
        state.current_word.push(ch.to_ascii_lowercase());
        state.total_letters = state.total_letters.saturating_add(1);

        if ch.is_ascii_uppercase() {
            state.case_counts[1] += 1;
        } else {
            state.case_counts[0] += 1;
        }

        *state
            .letter_frequency
            .entry(ch.to_ascii_lowercase())
            .or_insert(0) += 1;
    } else {
        finalize(state);
    }
}

/// Finalizes the word currently being accumulated, if any.
///
/// Updates word totals, the frequency map, the length histogram (clamped to
/// the last bucket) and the shortest/longest extremes. Strict comparisons:
/// a tie keeps the word recorded first. Also called once at end-of-stream
/// to flush a trailing word not followed by punctuation.
pub fn finalize(state: &mut AnalysisState) {
    if state.current_word.is_empty() {
        return;
    }

    let word = std::mem::take(&mut state.current_word);
    let length = word.len();

    state.total_words = state.total_words.saturating_add(1);
    state.total_characters_without_spaces = state
        .total_characters_without_spaces
        .saturating_add(length as u64);
    state.word_lengths[(length - 1).min(WORD_LENGTH_BUCKETS - 1)] += 1;

    if length > 6 {
        state.long_words = state.long_words.saturating_add(1);
    }

    if state.shortest_word.as_ref().is_none_or(|w| length < w.len()) {
        state.shortest_word = Some(word.clone());
    }
    if state.longest_word.as_ref().is_none_or(|w| length > w.len()) {
        state.longest_word = Some(word.clone());
    }

    *state.word_frequency.entry(word.clone()).or_insert(0) += 1;
    state.unique_words.insert(word);
}
