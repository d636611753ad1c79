// src/core/analyzer/readability.rs

/// LIX (Läsbarhetsindex) readability score.
///
/// `LIX = words / sentences + long_words * 100 / words`, where long words
/// have more than 6 characters. A text with no words or no sentences has
/// no defined score and yields 0.0, never a division error.
#[must_use]
pub fn lix(total_words: u64, total_sentences: u64, long_words: u64) -> f64 {
    if total_words == 0 || total_sentences == 0 {
        return 0.0;
    }

    let words_per_sentence = total_words as f64 / total_sentences as f64;
    let long_word_percentage = long_words as f64 * 100.0 / total_words as f64;

    words_per_sentence + long_word_percentage
}
