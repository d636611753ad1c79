// tests/integration_tests/analysis_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use txtstat::analyse_file;

#[test]
fn test_full_record_for_known_text() -> Result<()> {
    let dir = setup_test_directory()?;
    let statistics = analyse_file(&dir.path().join("fable.txt"));

    assert_eq!(statistics.filename, "fable.txt");
    assert_eq!(statistics.total_lines, 2);
    assert_eq!(statistics.total_paragraphs, 2);
    assert_eq!(statistics.total_sentences, 3);
    assert_eq!(statistics.total_words, 14);
    assert_eq!(statistics.unique_word_count, 12);
    assert_eq!(statistics.words_appearing_once, 11, "only 'the' repeats");

    assert_eq!(statistics.total_characters_with_spaces, 72);
    assert_eq!(statistics.total_characters_without_spaces, 55);
    assert_eq!(statistics.total_letters, 55);
    assert_eq!(statistics.total_digits, 0);
    assert_eq!(statistics.total_spaces, 14);
    assert_eq!(statistics.total_punctuation, 3);
    assert_eq!(statistics.case_distribution, [52, 3], "The, The, Both");

    assert_eq!(statistics.shortest_word.as_deref(), Some("on"));
    assert_eq!(statistics.longest_word.as_deref(), Some("animals"));
    assert_eq!(statistics.long_words, 1, "only 'animals' exceeds 6 chars");

    assert_eq!(statistics.avg_words_per_line, 7.0);
    let expected_wps = 14.0 / 3.0;
    assert!((statistics.average_words_per_sentence - expected_wps).abs() < 1e-9);

    assert_eq!(
        statistics.sentence_length_distribution,
        vec![0, 0, 0, 2, 0, 1],
        "two 4-word sentences and one 6-word sentence"
    );
    assert_eq!(
        statistics.ten_most_common_words.first(),
        Some(&(String::from("the"), 3))
    );

    let expected_lix = 14.0 / 3.0 + 1.0 * 100.0 / 14.0;
    assert!((statistics.lix_score - expected_lix).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_invariants_hold_for_every_fixture() -> Result<()> {
    let dir = setup_test_directory()?;

    for name in ["fable.txt", "letter.txt", "archive/old.txt"] {
        let statistics = analyse_file(&dir.path().join(name));

        assert_eq!(
            statistics.word_length_distribution.iter().sum::<u64>(),
            statistics.total_words,
            "{name}: word histogram must sum to the word total"
        );
        assert_eq!(
            statistics
                .letter_frequency_distribution
                .values()
                .sum::<u64>(),
            statistics.total_letters,
            "{name}: letter frequencies must sum to the letter total"
        );
        assert!(statistics.unique_word_count <= statistics.total_words);
        assert!(statistics.words_appearing_once <= statistics.unique_word_count);
    }
    Ok(())
}

#[test]
fn test_analysis_of_a_file_is_idempotent() -> Result<()> {
    let dir = setup_test_directory()?;
    let path = dir.path().join("letter.txt");

    assert_eq!(analyse_file(&path), analyse_file(&path));
    Ok(())
}
