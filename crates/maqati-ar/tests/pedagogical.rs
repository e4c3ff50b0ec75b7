//! Pedagogical validation: run the engine over a graded school-word list
//! and compare against the expected syllabifications.
//!
//! The golden file lives at `tests/data/school_words.json`. Vocalized
//! entries carry exact expected syllables and patterns; unvocalized
//! entries are checked against the engine invariants (closed pattern set,
//! dense positions, inference flags).
//!
//! Run: cargo test -p maqati-ar --features handle --test pedagogical

use maqati_ar::handle::MaqatiHandle;
use maqati_core::enums::{ALL_PATTERNS, SyllablePattern};
use maqati_core::syllable::Syllable;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Golden file format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct GoldenFile {
    vocalized: Vec<VocalizedCase>,
    unvocalized_all_inferred: Vec<String>,
    unvocalized_partial: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct VocalizedCase {
    word: String,
    gloss: String,
    syllables: Vec<String>,
    patterns: Vec<String>,
    #[serde(default)]
    inferred_positions: Vec<usize>,
}

fn load_golden() -> GoldenFile {
    let raw = include_str!("data/school_words.json");
    serde_json::from_str(raw).expect("school_words.json must parse")
}

fn handle() -> MaqatiHandle {
    MaqatiHandle::new("ar").expect("Arabic handle")
}

fn check_invariants(word: &str, syllables: &[Syllable]) {
    assert!(!syllables.is_empty(), "{word}: no syllables");
    for (i, s) in syllables.iter().enumerate() {
        assert_eq!(s.position, i, "{word}: positions must be dense");
        assert!(
            ALL_PATTERNS.contains(&s.pattern),
            "{word}: pattern {} outside the closed set",
            s.pattern
        );
        assert_eq!(s.is_inferred, s.suggestion.is_some(), "{word}: flag/suggestion mismatch");
    }
}

// ---------------------------------------------------------------------------
// Vocalized words: exact golden comparison
// ---------------------------------------------------------------------------

#[test]
fn vocalized_words_match_golden() {
    let golden = load_golden();
    let handle = handle();

    for case in &golden.vocalized {
        let result = handle.syllabify(&case.word);
        check_invariants(&case.word, &result);

        let texts: Vec<&str> = result.iter().map(|s| s.text.as_str()).collect();
        let expected: Vec<&str> = case.syllables.iter().map(String::as_str).collect();
        assert_eq!(texts, expected, "{} ({})", case.word, case.gloss);

        let patterns: Vec<SyllablePattern> = result.iter().map(|s| s.pattern).collect();
        let expected_patterns: Vec<SyllablePattern> = case
            .patterns
            .iter()
            .map(|p| p.parse().expect("golden pattern must be legal"))
            .collect();
        assert_eq!(patterns, expected_patterns, "{} ({})", case.word, case.gloss);

        let inferred: Vec<usize> = result
            .iter()
            .filter(|s| s.is_inferred)
            .map(|s| s.position)
            .collect();
        assert_eq!(inferred, case.inferred_positions, "{} ({})", case.word, case.gloss);
    }
}

// ---------------------------------------------------------------------------
// Unvocalized words: invariants and inference flags
// ---------------------------------------------------------------------------

#[test]
fn unvocalized_words_are_fully_inferred() {
    let golden = load_golden();
    let handle = handle();

    for word in &golden.unvocalized_all_inferred {
        let result = handle.syllabify(word);
        check_invariants(word, &result);
        assert!(
            result.iter().all(|s| s.is_inferred),
            "{word}: expected every syllable inferred"
        );
        // text keeps the bare input; the suggestion adds the vowel
        let joined: String = result.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(&joined, word);
    }
}

#[test]
fn partially_inferrable_words_mix_flags() {
    let golden = load_golden();
    let handle = handle();

    for word in &golden.unvocalized_partial {
        let result = handle.syllabify(word);
        check_invariants(word, &result);
        assert!(
            result.iter().any(|s| s.is_inferred),
            "{word}: expected at least one inferred syllable"
        );
        assert!(
            result.iter().any(|s| !s.is_inferred),
            "{word}: expected at least one explicit syllable"
        );
    }
}

// ---------------------------------------------------------------------------
// Cross-checks through the handle
// ---------------------------------------------------------------------------

#[test]
fn vocalized_and_stripped_forms_normalize_identically() {
    let golden = load_golden();
    let handle = handle();

    for case in &golden.vocalized {
        let stripped = handle.strip_harakat(&case.word);
        assert_eq!(handle.normalize(&case.word), handle.normalize(&stripped));
    }
}

#[test]
fn whole_text_syllabification_covers_every_word() {
    let golden = load_golden();
    let handle = handle();

    let text: String = golden
        .vocalized
        .iter()
        .map(|c| c.word.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let per_word = handle.syllabify_text(&text);
    assert_eq!(per_word.len(), golden.vocalized.len());

    for ((word, syllables), case) in per_word.iter().zip(&golden.vocalized) {
        assert_eq!(word, &case.word);
        assert_eq!(syllables.len(), case.syllables.len());
    }
}
