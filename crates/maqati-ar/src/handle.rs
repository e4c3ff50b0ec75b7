// MaqatiHandle: top-level integration point for the Arabic reading
// toolkit.
//
// Owns the syllabifier options and provides a unified API for
// syllabification, word normalization, letter decomposition and text
// tokenization. The delivery surfaces (CLI, wasm, FFI) all go through
// this handle.
//
// The handle holds no mutable state between calls; the engine itself is a
// pure function, so one handle may serve any number of threads.

use maqati_core::syllable::Syllable;
use maqati_core::token::Token;

use crate::normalize;
use crate::syllabifier::{ArabicSyllabifier, Syllabifier, SyllabifierOptions};
use crate::tokenizer;

/// Error type for MaqatiHandle construction failures.
#[derive(Debug, thiserror::Error)]
pub enum MaqatiError {
    /// Unsupported language tag.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Top-level handle for the Arabic reading toolkit.
#[derive(Debug)]
pub struct MaqatiHandle {
    syllabifier_options: SyllabifierOptions,
}

impl MaqatiHandle {
    /// Create a new handle for the given BCP 47 language code.
    ///
    /// Only Arabic (`ar`) is supported.
    pub fn new(language: &str) -> Result<Self, MaqatiError> {
        if language != "ar" {
            return Err(MaqatiError::UnsupportedLanguage(language.to_string()));
        }
        Ok(Self {
            syllabifier_options: SyllabifierOptions::default(),
        })
    }

    // =========================================================================
    // Core methods
    // =========================================================================

    /// Split a single word into syllables.
    pub fn syllabify(&self, word: &str) -> Vec<Syllable> {
        let chars: Vec<char> = word.chars().collect();
        ArabicSyllabifier::new(self.syllabifier_options).syllabify(&chars)
    }

    /// Split every word of a text into syllables.
    ///
    /// Returns one `(word, syllables)` pair per word token, in text order.
    /// Whitespace and punctuation are skipped.
    pub fn syllabify_text(&self, text: &str) -> Vec<(String, Vec<Syllable>)> {
        tokenizer::words(text)
            .into_iter()
            .map(|word| {
                let syllables = self.syllabify(&word);
                (word, syllables)
            })
            .collect()
    }

    /// Normalized form of a word: no definite article, no vocalization.
    pub fn normalize(&self, word: &str) -> String {
        normalize::normalize(word)
    }

    /// The word with vocalization marks removed (article kept).
    pub fn strip_harakat(&self, word: &str) -> String {
        normalize::strip_harakat(word)
    }

    /// Pedagogical letter units of a word (base letter plus its marks).
    pub fn letter_units(&self, word: &str) -> Vec<String> {
        tokenizer::letter_units(word)
    }

    /// Tokenize running text.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        tokenizer::tokens(text)
    }

    // =========================================================================
    // Options
    // =========================================================================

    /// Replace the syllabifier options wholesale.
    pub fn set_syllabifier_options(&mut self, options: SyllabifierOptions) {
        self.syllabifier_options = options;
    }

    /// Current syllabifier options.
    pub fn syllabifier_options(&self) -> &SyllabifierOptions {
        &self.syllabifier_options
    }

    /// Toggle default-vowel inference for unvocalized input.
    pub fn set_infer_missing_vowels(&mut self, value: bool) {
        self.syllabifier_options.infer_missing_vowels = value;
    }

    /// Toggle suggestion strings on inferred syllables.
    pub fn set_include_suggestions(&mut self, value: bool) {
        self.syllabifier_options.include_suggestions = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maqati_core::enums::SyllablePattern;

    #[test]
    fn handle_accepts_arabic() {
        assert!(MaqatiHandle::new("ar").is_ok());
    }

    #[test]
    fn handle_rejects_other_languages() {
        let err = MaqatiHandle::new("fi").unwrap_err();
        assert!(matches!(err, MaqatiError::UnsupportedLanguage(_)));
        assert_eq!(err.to_string(), "unsupported language: fi");
    }

    #[test]
    fn handle_syllabifies() {
        let handle = MaqatiHandle::new("ar").unwrap();
        let result = handle.syllabify("\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}");
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|s| s.pattern == SyllablePattern::Cv));
    }

    #[test]
    fn handle_syllabifies_text_word_by_word() {
        let handle = MaqatiHandle::new("ar").unwrap();
        let result = handle.syllabify_text(
            "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E} \u{0642}\u{0644}\u{0645}\u{061F}",
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].1.len(), 3);
        assert!(result[1].1.iter().all(|s| s.is_inferred));
    }

    #[test]
    fn handle_normalizes() {
        let handle = MaqatiHandle::new("ar").unwrap();
        assert_eq!(
            handle.normalize("\u{0627}\u{0644}\u{0643}\u{0650}\u{062A}\u{064E}\u{0627}\u{0628}"),
            "\u{0643}\u{062A}\u{0627}\u{0628}"
        );
    }

    #[test]
    fn handle_option_toggles() {
        let mut handle = MaqatiHandle::new("ar").unwrap();
        handle.set_infer_missing_vowels(false);
        let result = handle.syllabify("\u{0643}\u{062A}\u{0628}");
        assert_eq!(result.len(), 1);

        handle.set_infer_missing_vowels(true);
        handle.set_include_suggestions(false);
        let result = handle.syllabify("\u{0643}\u{062A}\u{0628}");
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|s| s.suggestion.is_none()));
    }

    #[test]
    fn handle_letter_units() {
        let handle = MaqatiHandle::new("ar").unwrap();
        let units = handle.letter_units("\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}");
        assert_eq!(units.len(), 3);
    }
}
