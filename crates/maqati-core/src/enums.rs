// Shared enums: SyllablePattern, TokenType

use std::fmt;
use std::str::FromStr;

/// Consonant/vowel shape of a syllable.
///
/// This is the closed set of values the storage layer accepts for a
/// syllable type column. The classifier never produces anything outside
/// this set; unusual raw shapes are normalized into it (see the language
/// module).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyllablePattern {
    /// A bare vowel nucleus.
    V,
    /// Vowel followed by a closing consonant.
    Vc,
    /// Open syllable: consonant plus short vowel.
    Cv,
    /// Closed syllable: consonant, vowel, consonant.
    Cvc,
    /// Open syllable with a long vowel.
    Cvv,
    /// Long vowel closed by one consonant.
    Cvvc,
    /// Short vowel closed by a consonant cluster.
    Cvcc,
}

/// All legal pattern values, in the order the storage layer lists them.
pub const ALL_PATTERNS: [SyllablePattern; 7] = [
    SyllablePattern::V,
    SyllablePattern::Vc,
    SyllablePattern::Cv,
    SyllablePattern::Cvc,
    SyllablePattern::Cvv,
    SyllablePattern::Cvvc,
    SyllablePattern::Cvcc,
];

impl SyllablePattern {
    /// The canonical string form ("CV", "CVC", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            SyllablePattern::V => "V",
            SyllablePattern::Vc => "VC",
            SyllablePattern::Cv => "CV",
            SyllablePattern::Cvc => "CVC",
            SyllablePattern::Cvv => "CVV",
            SyllablePattern::Cvvc => "CVVC",
            SyllablePattern::Cvcc => "CVCC",
        }
    }

    /// Whether the syllable ends in its vowel nucleus (open syllable).
    pub fn is_open(self) -> bool {
        matches!(
            self,
            SyllablePattern::V | SyllablePattern::Cv | SyllablePattern::Cvv
        )
    }
}

impl fmt::Display for SyllablePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string that is not one of the seven
/// pattern values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown syllable pattern: {0}")]
pub struct ParsePatternError(pub String);

impl FromStr for SyllablePattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "V" => Ok(SyllablePattern::V),
            "VC" => Ok(SyllablePattern::Vc),
            "CV" => Ok(SyllablePattern::Cv),
            "CVC" => Ok(SyllablePattern::Cvc),
            "CVV" => Ok(SyllablePattern::Cvv),
            "CVVC" => Ok(SyllablePattern::Cvvc),
            "CVCC" => Ok(SyllablePattern::Cvcc),
            other => Err(ParsePatternError(other.to_string())),
        }
    }
}

/// Token types for text tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of text.
    None,
    /// Word token.
    Word,
    /// Punctuation token.
    Punctuation,
    /// Whitespace token.
    Whitespace,
    /// Character not used in any supported script.
    Unknown,
}
