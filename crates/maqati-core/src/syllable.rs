// Syllable public API type

use crate::enums::SyllablePattern;

/// One syllable of a word, as produced by the syllabifier.
///
/// `text` carries the characters the syllable covers in the input word;
/// vowels supplied by the inference heuristic are not part of `text` but
/// appear in `suggestion` instead, so teachers can review what the engine
/// guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Syllable {
    /// The grapheme sequence for this syllable.
    pub text: String,

    /// 0-based index within the word's syllable sequence.
    pub position: usize,

    /// Consonant/vowel shape of the syllable.
    pub pattern: SyllablePattern,

    /// True if the syllable's vowel was supplied by the default-vowel
    /// heuristic rather than present in the input.
    pub is_inferred: bool,

    /// Fully vocalized rendition of the syllable, present when inference
    /// occurred.
    pub suggestion: Option<String>,
}

impl Syllable {
    /// Create a syllable whose vocalization was explicit in the input.
    pub fn new(text: impl Into<String>, position: usize, pattern: SyllablePattern) -> Self {
        Self {
            text: text.into(),
            position,
            pattern,
            is_inferred: false,
            suggestion: None,
        }
    }

    /// Create a syllable that contains at least one inferred vowel,
    /// with the vocalized form offered as a suggestion.
    pub fn inferred(
        text: impl Into<String>,
        position: usize,
        pattern: SyllablePattern,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            position,
            pattern,
            is_inferred: true,
            suggestion: Some(suggestion.into()),
        }
    }

    /// Length of the syllable text in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_syllable() {
        let s = Syllable::new("\u{0643}\u{064E}", 0, SyllablePattern::Cv);
        assert_eq!(s.text, "\u{0643}\u{064E}");
        assert_eq!(s.position, 0);
        assert_eq!(s.pattern, SyllablePattern::Cv);
        assert!(!s.is_inferred);
        assert!(s.suggestion.is_none());
    }

    #[test]
    fn inferred_syllable() {
        let s = Syllable::inferred("\u{0643}", 2, SyllablePattern::Cv, "\u{0643}\u{064E}");
        assert!(s.is_inferred);
        assert_eq!(s.suggestion.as_deref(), Some("\u{0643}\u{064E}"));
        assert_eq!(s.position, 2);
    }

    #[test]
    fn char_len_counts_chars_not_bytes() {
        // ka with fatha: 2 characters, 4 bytes in UTF-8
        let s = Syllable::new("\u{0643}\u{064E}", 0, SyllablePattern::Cv);
        assert_eq!(s.char_len(), 2);
        assert_eq!(s.text.len(), 4);
    }

    #[test]
    fn syllable_clone_eq() {
        let s = Syllable::new("\u{0628}\u{064F}", 1, SyllablePattern::Cv);
        assert_eq!(s, s.clone());
    }
}
