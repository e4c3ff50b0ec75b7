// Syllabification module -- rule-based Arabic syllable segmentation
//
// The engine runs three passes over the character sequence:
// 1. Gemination expansion: a shadda doubles its letter, the first copy
//    closed by a sukun, so the doubled letter can carry its own vowel.
// 2. Vowel inference: a letter with no vocalization after it receives an
//    implicit default short vowel (fatha), flagged so callers can tell
//    teacher-provided vocalization from guessed vocalization.
// 3. Segmentation: a left-to-right scan that closes a syllable at each
//    nucleus (short vowel, tanween, long-vowel letter) or sukun.
// Each resulting span is classified into the closed CV-pattern set.
//
// The whole pipeline is pure: no shared state or I/O, and odd input
// degrades to a best-effort segmentation instead of an error.

use maqati_core::character::{self, ArabicCharClass, char_class};
use maqati_core::enums::SyllablePattern;
use maqati_core::syllable::Syllable;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// The short vowel inserted by the inference pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultVowel {
    /// /a/, by far the most common vocalization; the default.
    Fatha,
    /// /u/.
    Damma,
    /// /i/.
    Kasra,
}

impl DefaultVowel {
    /// The combining mark for this vowel.
    pub fn as_char(self) -> char {
        match self {
            DefaultVowel::Fatha => character::FATHA,
            DefaultVowel::Damma => character::DAMMA,
            DefaultVowel::Kasra => character::KASRA,
        }
    }
}

/// Configuration options for the Arabic syllabifier.
#[derive(Debug, Clone, Copy)]
pub struct SyllabifierOptions {
    /// When true, letters with no vocalization receive an implicit short
    /// vowel, so unvocalized words still segment into readable syllables.
    pub infer_missing_vowels: bool,

    /// The vowel the inference pass inserts.
    pub default_vowel: DefaultVowel,

    /// When true, inferred syllables carry their fully vocalized form in
    /// the `suggestion` field for teacher review.
    pub include_suggestions: bool,
}

impl Default for SyllabifierOptions {
    fn default() -> Self {
        Self {
            infer_missing_vowels: true,
            default_vowel: DefaultVowel::Fatha,
            include_suggestions: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Syllabifier trait
// ---------------------------------------------------------------------------

/// Trait for syllabification backends.
pub trait Syllabifier {
    /// Split a word into an ordered list of syllables.
    ///
    /// Positions in the returned list are dense, starting at 0. The
    /// method never fails: odd input degrades to a best-fit segmentation,
    /// and an empty word yields an empty list.
    fn syllabify(&self, word: &[char]) -> Vec<Syllable>;
}

/// Rule-based Arabic syllabifier.
pub struct ArabicSyllabifier {
    options: SyllabifierOptions,
}

impl ArabicSyllabifier {
    /// Create a syllabifier with the given options.
    pub fn new(options: SyllabifierOptions) -> Self {
        Self { options }
    }

    /// Update syllabifier options.
    pub fn set_options(&mut self, options: SyllabifierOptions) {
        self.options = options;
    }

    /// Return a reference to the current options.
    pub fn options(&self) -> &SyllabifierOptions {
        &self.options
    }
}

impl Default for ArabicSyllabifier {
    fn default() -> Self {
        Self::new(SyllabifierOptions::default())
    }
}

impl Syllabifier for ArabicSyllabifier {
    fn syllabify(&self, word: &[char]) -> Vec<Syllable> {
        let expanded = expand_gemination(word);
        let units = if self.options.infer_missing_vowels {
            infer_missing_vowels(&expanded, self.options.default_vowel.as_char())
        } else {
            expanded.iter().map(|&ch| Unit { ch, inserted: false }).collect()
        };
        let spans = segment(&units);

        let mut syllables = Vec::with_capacity(spans.len());
        for (position, span) in spans.iter().enumerate() {
            let text: String = span.iter().filter(|u| !u.inserted).map(|u| u.ch).collect();
            let pattern = classify_raw_pattern(&raw_pattern(span));
            let inferred = span.iter().any(|u| u.inserted);
            let syllable = if inferred {
                let vocalized: String = span.iter().map(|u| u.ch).collect();
                let mut s = Syllable::inferred(text, position, pattern, vocalized);
                if !self.options.include_suggestions {
                    s.suggestion = None;
                }
                s
            } else {
                Syllable::new(text, position, pattern)
            };
            syllables.push(syllable);
        }
        syllables
    }
}

/// Syllabify a word with default options.
pub fn syllabify(word: &str) -> Vec<Syllable> {
    let chars: Vec<char> = word.chars().collect();
    ArabicSyllabifier::default().syllabify(&chars)
}

// ---------------------------------------------------------------------------
// Phase 1: Gemination expansion
// ---------------------------------------------------------------------------

/// Expand every shadda into a doubled letter: `X + shadda` becomes
/// `X + sukun + X`, the first copy closing the previous syllable, the
/// second free to carry its own vowel.
///
/// A shadda written after the letter's vowel mark (`X + vowel + shadda`)
/// is treated as if it were written `X + shadda + vowel`. A shadda with
/// no preceding letter is dropped.
pub(crate) fn expand_gemination(word: &[char]) -> Vec<char> {
    let mut out: Vec<char> = Vec::with_capacity(word.len() + 4);

    for &c in word {
        if char_class(c) != ArabicCharClass::Shadda {
            out.push(c);
            continue;
        }

        match out.last().map(|&p| char_class(p)) {
            Some(ArabicCharClass::Consonant) | Some(ArabicCharClass::LongVowel) => {
                let letter = *out.last().unwrap();
                out.push(character::SUKUN);
                out.push(letter);
            }
            Some(ArabicCharClass::ShortVowel) | Some(ArabicCharClass::Tanween) => {
                // Mark order reversed in the input: reorder before doubling.
                let vowel = out.pop().unwrap();
                match out.last().map(|&p| char_class(p)) {
                    Some(ArabicCharClass::Consonant) | Some(ArabicCharClass::LongVowel) => {
                        let letter = *out.last().unwrap();
                        out.push(character::SUKUN);
                        out.push(letter);
                        out.push(vowel);
                    }
                    _ => out.push(vowel), // orphan shadda, dropped
                }
            }
            _ => {} // orphan shadda, dropped
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Phase 2: Vowel inference
// ---------------------------------------------------------------------------

/// One character of the working sequence. `inserted` marks vowels supplied
/// by the inference pass rather than present in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unit {
    pub(crate) ch: char,
    pub(crate) inserted: bool,
}

/// Whether the long-vowel letter at `i` functions as a vowel nucleus.
///
/// A long letter is a nucleus unless it is word-initial (hamza seat or
/// onset glide) or carries its own vocalization mark, in which case it
/// reads as a consonant.
fn is_vowel_function(word: &[char], i: usize) -> bool {
    if !character::is_long_vowel_letter(word[i]) {
        return false;
    }
    if i == 0 {
        return false;
    }
    !matches!(
        word.get(i + 1).map(|&c| char_class(c)),
        Some(
            ArabicCharClass::ShortVowel
                | ArabicCharClass::Tanween
                | ArabicCharClass::Shadda
                | ArabicCharClass::Sukun
        )
    )
}

/// Insert the default vowel after every consonant-functioning letter with
/// no vocalization of its own: nothing is inserted when the next character
/// is a short vowel, tanween, sukun or shadda, or when the letter's
/// nucleus is a following long-vowel letter.
pub(crate) fn infer_missing_vowels(word: &[char], default_vowel: char) -> Vec<Unit> {
    let mut out: Vec<Unit> = Vec::with_capacity(word.len() * 2);

    for (i, &c) in word.iter().enumerate() {
        out.push(Unit { ch: c, inserted: false });

        let is_consonant_letter = match char_class(c) {
            ArabicCharClass::Consonant => true,
            ArabicCharClass::LongVowel => !is_vowel_function(word, i),
            _ => false,
        };
        if !is_consonant_letter {
            continue;
        }

        let vocalized = match word.get(i + 1) {
            Some(&next) => match char_class(next) {
                ArabicCharClass::ShortVowel
                | ArabicCharClass::Tanween
                | ArabicCharClass::Sukun
                | ArabicCharClass::Shadda => true,
                ArabicCharClass::LongVowel => is_vowel_function(word, i + 1),
                _ => false,
            },
            None => false,
        };
        if !vocalized {
            out.push(Unit { ch: default_vowel, inserted: true });
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Phase 3: Segmentation
// ---------------------------------------------------------------------------

/// Whether the long-vowel letter at `i` of the unit sequence functions as
/// a vowel nucleus. Same rule as `is_vowel_function`, applied after vowel
/// insertion.
fn unit_is_vowel_nucleus(units: &[Unit], i: usize) -> bool {
    if !character::is_long_vowel_letter(units[i].ch) {
        return false;
    }
    if i == 0 {
        return false;
    }
    !matches!(
        units.get(i + 1).map(|u| char_class(u.ch)),
        Some(
            ArabicCharClass::ShortVowel
                | ArabicCharClass::Tanween
                | ArabicCharClass::Shadda
                | ArabicCharClass::Sukun
        )
    )
}

/// Split the fully vocalized unit sequence into syllable spans.
///
/// A syllable closes after its nucleus -- a short vowel or tanween
/// (absorbing a directly following long-vowel nucleus into the same
/// syllable), or a standalone long-vowel nucleus -- and after a sukun.
/// Characters that trigger no boundary accumulate into the open span;
/// any trailing span is flushed at end of word.
pub(crate) fn segment(units: &[Unit]) -> Vec<Vec<Unit>> {
    let mut spans: Vec<Vec<Unit>> = Vec::new();
    let mut current: Vec<Unit> = Vec::new();

    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        current.push(unit);

        let close = match char_class(unit.ch) {
            ArabicCharClass::ShortVowel | ArabicCharClass::Tanween => {
                // A long-vowel letter right after the vowel mark belongs
                // to the same nucleus.
                if i + 1 < units.len() && unit_is_vowel_nucleus(units, i + 1) {
                    current.push(units[i + 1]);
                    i += 1;
                }
                true
            }
            ArabicCharClass::Sukun => true,
            ArabicCharClass::LongVowel => unit_is_vowel_nucleus(units, i),
            _ => false,
        };

        if close {
            spans.push(std::mem::take(&mut current));
        }
        i += 1;
    }

    if !current.is_empty() {
        spans.push(current);
    }

    spans
}

// ---------------------------------------------------------------------------
// Phase 4: Pattern classification
// ---------------------------------------------------------------------------

/// Derive the raw C/V string of a syllable span.
///
/// Consonants map to `C`; short vowels and tanween map to `V`. A long
/// letter carrying its own vocalization mark counts as a consonant; as a
/// nucleus it lengthens a preceding vowel mark to `VV`, or supplies both
/// morae itself when the word is unvocalized. Sukun, shadda remnants and
/// non-Arabic characters contribute nothing.
pub(crate) fn raw_pattern(span: &[Unit]) -> String {
    let mut pattern = String::with_capacity(span.len());

    for (i, unit) in span.iter().enumerate() {
        match char_class(unit.ch) {
            ArabicCharClass::Consonant => pattern.push('C'),
            ArabicCharClass::ShortVowel | ArabicCharClass::Tanween => pattern.push('V'),
            ArabicCharClass::LongVowel => {
                let consonant_function = matches!(
                    span.get(i + 1).map(|u| char_class(u.ch)),
                    Some(
                        ArabicCharClass::ShortVowel
                            | ArabicCharClass::Tanween
                            | ArabicCharClass::Shadda
                            | ArabicCharClass::Sukun
                    )
                );
                if consonant_function {
                    pattern.push('C');
                } else if i > 0
                    && matches!(
                        char_class(span[i - 1].ch),
                        ArabicCharClass::ShortVowel | ArabicCharClass::Tanween
                    )
                {
                    pattern.push('V');
                } else {
                    pattern.push_str("VV");
                }
            }
            _ => {}
        }
    }

    pattern
}

/// Normalize a raw C/V string into the closed pattern set.
///
/// Exact matches are kept. A consonant cluster before the vowel collapses
/// to `CV`; a vowelless span is read as `CVC` (elided nucleus); a run of
/// two or more vowels is read as `V`; everything else, the empty string
/// included, falls back to `CV`. The function therefore never produces a
/// value outside the seven-value set.
pub fn classify_raw_pattern(raw: &str) -> SyllablePattern {
    if let Ok(pattern) = raw.parse::<SyllablePattern>() {
        return pattern;
    }

    let chars: Vec<char> = raw.chars().collect();
    let leading_c = chars.iter().take_while(|&&c| c == 'C').count();

    if leading_c > 0 && leading_c < chars.len() && chars[leading_c] == 'V' {
        return SyllablePattern::Cv;
    }
    if !chars.is_empty() && leading_c == chars.len() {
        return SyllablePattern::Cvc;
    }
    if chars.len() > 1 && chars.iter().all(|&c| c == 'V') {
        return SyllablePattern::V;
    }
    SyllablePattern::Cv
}

// ===========================================================================
// Tests
// ===========================================================================
