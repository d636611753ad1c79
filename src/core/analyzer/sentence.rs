// src/core/analyzer/sentence.rs
use crate::models::AnalysisState;

/// Single-character sentence terminators.
const SENTENCE_ENDERS: [char; 3] = ['.', '!', '?'];

/// Composite terminator, detected as a suffix of the sentence buffer.
const COMPOSITE_ENDER: &str = ":--";

/// Tokens whose trailing period must not be treated as a sentence
/// terminator. Checked against the lowercased word buffer, so the
/// dotted entries ("u.s", "ph.d", ...) are carried for completeness but
/// can only match once the accumulator learns about intra-word dots.
const SENTENCE_EXCEPTIONS: [&str; 19] = [
    "dr", "mr", "st", "mrs", "ms", "inc", "ltd", "co", "corp", "llc", "plc", "u.s", "u.k", "e.u",
    "u.n", "ph.d", "e.g", "i.e", "etc",
];

/// Feeds one character to the sentence segmenter.
///
/// Every character is appended to the raw sentence buffer. On a
/// terminator, the token immediately preceding the mark (the word
/// accumulator's pending buffer) is checked against the abbreviation
/// exceptions; "Dr." and friends do not end the sentence.
pub fn feed(state: &mut AnalysisState, ch: char) {
    state.current_sentence.push(ch);

    let at_terminator =
        SENTENCE_ENDERS.contains(&ch) || state.current_sentence.ends_with(COMPOSITE_ENDER);

    if at_terminator && !SENTENCE_EXCEPTIONS.contains(&state.current_word.as_str()) {
        complete(state);
    }
}

/// Flushes a trailing sentence at end-of-stream.
///
/// Text that does not end in a terminator still counts as one sentence;
/// only the length histogram and the total are updated, there is no
/// following character to re-trigger the abbreviation check. A remainder
/// of pure whitespace (the newline after a final period) is not a
/// sentence.
pub fn flush(state: &mut AnalysisState) {
    if state.current_sentence.trim().is_empty() {
        state.current_sentence.clear();
        return;
    }

    let sentence = std::mem::take(&mut state.current_sentence);
    record_length(state, length_in_words(&sentence));
    state.total_sentences = state.total_sentences.saturating_add(1);
}

/// Records the buffered sentence and resets the buffer.
fn complete(state: &mut AnalysisState) {
    let sentence = std::mem::take(&mut state.current_sentence);
    let words = length_in_words(&sentence);

    record_length(state, words);

    let trimmed = sentence.trim();
    // An unset extreme counts as 0 words, so a wordless sentence can
    // never become the longest.
    if words > state.longest_sentence.as_deref().map_or(0, length_in_words) {
        state.longest_sentence = Some(trimmed.to_string());
    }
    // Fragments of up to 2 words never qualify as the shortest sentence.
    if words > 2
        && state
            .shortest_sentence
            .as_deref()
            .is_none_or(|s| words < length_in_words(s))
    {
        state.shortest_sentence = Some(trimmed.to_string());
    }

    state.total_sentences = state.total_sentences.saturating_add(1);
}

/// A sentence consisting solely of punctuation contributes nothing to the
/// distribution.
fn record_length(state: &mut AnalysisState, words: usize) {
    if words == 0 {
        return;
    }
    if state.sentence_lengths.len() < words {
        state.sentence_lengths.resize(words, 0);
    }
    state.sentence_lengths[words - 1] += 1;
}

/// Word count of an arbitrary string: every character that is neither
/// alphabetic nor whitespace becomes a space, then whitespace-separated
/// tokens are counted.
#[must_use]
pub fn length_in_words(sentence: &str) -> usize {
    let cleaned: String = sentence
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() || ch.is_whitespace() {
                ch
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().count()
}
