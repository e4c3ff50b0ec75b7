// Tokenizer module -- splitting running text into word, whitespace and
// punctuation tokens, and words into pedagogical letter units.

use maqati_core::character::{ArabicCharClass, CharType, char_class, get_char_type};
use maqati_core::enums::TokenType;
use maqati_core::token::Token;

/// Find the next token starting at character offset `pos`.
///
/// Words are maximal runs of letters and digits (diacritics count as part
/// of the word). Whitespace runs form one token; punctuation and unknown
/// characters form single-character tokens. Returns a `None` token at end
/// of text.
pub fn next_token(text: &[char], pos: usize) -> Token {
    if pos >= text.len() {
        return Token::none();
    }

    let first_type = get_char_type(text[pos]);
    let token_type = match first_type {
        CharType::Letter | CharType::Digit => TokenType::Word,
        CharType::Whitespace => TokenType::Whitespace,
        CharType::Punctuation => TokenType::Punctuation,
        CharType::Unknown => TokenType::Unknown,
    };

    let mut end = pos + 1;
    match token_type {
        TokenType::Word => {
            while end < text.len()
                && matches!(get_char_type(text[end]), CharType::Letter | CharType::Digit)
            {
                end += 1;
            }
        }
        TokenType::Whitespace => {
            while end < text.len() && get_char_type(text[end]) == CharType::Whitespace {
                end += 1;
            }
        }
        // Punctuation and unknown characters stand alone.
        _ => {}
    }

    let content: String = text[pos..end].iter().collect();
    Token::new(token_type, content, pos)
}

/// Tokenize a whole text.
pub fn tokens(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let token = next_token(&chars, pos);
        pos += token.token_len;
        out.push(token);
    }
    out
}

/// Extract just the word tokens of a text, in order.
pub fn words(text: &str) -> Vec<String> {
    tokens(text)
        .into_iter()
        .filter(|t| t.token_type == TokenType::Word)
        .map(|t| t.text)
        .collect()
}

/// Split a word into pedagogical letter units: each base character
/// grouped with the combining marks written on it, so a diacritic is
/// never shown detached from its letter.
pub fn letter_units(word: &str) -> Vec<String> {
    let mut units: Vec<String> = Vec::new();

    for c in word.chars() {
        let attaches = !units.is_empty()
            && matches!(
                char_class(c),
                ArabicCharClass::ShortVowel
                    | ArabicCharClass::Tanween
                    | ArabicCharClass::Shadda
                    | ArabicCharClass::Sukun
                    | ArabicCharClass::Diacritic
            );
        if attaches {
            units.last_mut().unwrap().push(c);
        } else {
            units.push(c.to_string());
        }
    }

    units
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- next_token / tokens --

    #[test]
    fn end_of_text_is_none() {
        assert_eq!(next_token(&chars(""), 0).token_type, TokenType::None);
        assert_eq!(next_token(&chars("\u{0643}"), 5).token_type, TokenType::None);
    }

    #[test]
    fn single_word() {
        let tok = next_token(&chars("\u{0643}\u{062A}\u{0627}\u{0628}"), 0);
        assert_eq!(tok.token_type, TokenType::Word);
        assert_eq!(tok.token_len, 4);
    }

    #[test]
    fn vocalized_word_is_one_token() {
        // قَلَمٌ: diacritics stay inside the word token
        let toks = tokens("\u{0642}\u{064E}\u{0644}\u{064E}\u{0645}\u{064C}");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].token_type, TokenType::Word);
        assert_eq!(toks[0].token_len, 6);
    }

    #[test]
    fn sentence_with_punctuation() {
        // قَرَأَ الوَلَدُ؟
        let text = "\u{0642}\u{064E}\u{0631}\u{064E}\u{0623}\u{064E} \
                    \u{0627}\u{0644}\u{0648}\u{064E}\u{0644}\u{064E}\u{062F}\u{064F}\u{061F}";
        let toks = tokens(text);
        let types: Vec<TokenType> = toks.iter().map(|t| t.token_type).collect();
        assert_eq!(
            types,
            vec![
                TokenType::Word,
                TokenType::Whitespace,
                TokenType::Word,
                TokenType::Punctuation
            ]
        );
    }

    #[test]
    fn token_positions_are_char_offsets() {
        let text = "\u{0643}\u{062A}\u{0628} \u{0642}\u{0644}\u{0645}";
        let toks = tokens(text);
        assert_eq!(toks[0].pos, 0);
        assert_eq!(toks[1].pos, 3);
        assert_eq!(toks[2].pos, 4);
    }

    #[test]
    fn tokens_concatenate_to_input() {
        let text = "\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E} \u{0641}\u{0650}\u{064A} \
                    \u{0627}\u{0644}\u{0628}\u{064A}\u{062A}\u{060C} abc 123!";
        let joined: String = tokens(text).iter().map(|t| t.text.as_str()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn arabic_digits_form_word_tokens() {
        let toks = tokens("\u{0661}\u{0662}\u{0663}");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].token_type, TokenType::Word);
    }

    #[test]
    fn unknown_chars_are_single_tokens() {
        let toks = tokens("@@");
        assert_eq!(toks.len(), 2);
        assert!(toks.iter().all(|t| t.token_type == TokenType::Unknown));
    }

    #[test]
    fn words_extracts_in_order() {
        let text = "\u{0642}\u{064E}\u{0631}\u{064E}\u{0623} \u{0627}\u{0644}\u{0648}\u{0644}\u{062F}\u{061F}";
        let ws = words(text);
        assert_eq!(ws.len(), 2);
        assert_eq!(ws[0], "\u{0642}\u{064E}\u{0631}\u{064E}\u{0623}");
    }

    // -- letter_units --

    #[test]
    fn bare_word_splits_per_letter() {
        let units = letter_units("\u{0643}\u{062A}\u{0628}");
        assert_eq!(units, vec!["\u{0643}", "\u{062A}", "\u{0628}"]);
    }

    #[test]
    fn marks_attach_to_their_letter() {
        // كَتَبَ -> كَ تَ بَ
        let units = letter_units("\u{0643}\u{064E}\u{062A}\u{064E}\u{0628}\u{064E}");
        assert_eq!(
            units,
            vec!["\u{0643}\u{064E}", "\u{062A}\u{064E}", "\u{0628}\u{064E}"]
        );
    }

    #[test]
    fn shadda_and_vowel_attach_together() {
        // رَبِّي -> رَ بِّ ي
        let units = letter_units("\u{0631}\u{064E}\u{0628}\u{0651}\u{0650}\u{064A}");
        assert_eq!(
            units,
            vec!["\u{0631}\u{064E}", "\u{0628}\u{0651}\u{0650}", "\u{064A}"]
        );
    }

    #[test]
    fn long_vowel_letters_are_own_units() {
        // كِتَاب -> كِ تَ ا ب
        let units = letter_units("\u{0643}\u{0650}\u{062A}\u{064E}\u{0627}\u{0628}");
        assert_eq!(
            units,
            vec!["\u{0643}\u{0650}", "\u{062A}\u{064E}", "\u{0627}", "\u{0628}"]
        );
    }

    #[test]
    fn units_concatenate_to_input() {
        for word in [
            "\u{0645}\u{064F}\u{0639}\u{064E}\u{0644}\u{0651}\u{0650}\u{0645}\u{064C}",
            "\u{0627}\u{0644}\u{0652}\u{0643}\u{0650}\u{062A}\u{064E}\u{0627}\u{0628}\u{064F}",
            "abc",
            "",
        ] {
            let joined: String = letter_units(word).concat();
            assert_eq!(joined, word);
        }
    }

    #[test]
    fn leading_mark_is_degenerate_unit() {
        // A stray mark with no base letter stands alone
        let units = letter_units("\u{064E}\u{0643}");
        assert_eq!(units, vec!["\u{064E}", "\u{0643}"]);
    }
}
