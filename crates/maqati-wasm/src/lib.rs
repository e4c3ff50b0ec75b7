// WASM bindings for the maqati Arabic syllabification engine.
//
// Provides a `WasmMaqati` class exported via wasm-bindgen that wraps the
// `MaqatiHandle` from maqati-ar. Syllable and token records are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const maqati = new WasmMaqati();
//   maqati.syllabify("كِتَابٌ");
//     // => [{ text: "كِ", position: 0, pattern: "CV", isInferred: false }, ...]
//   maqati.syllabifyText("كتب الولد");  // => per-word syllable lists
//   maqati.normalize("الْكِتَابُ");        // => "كتاب"
//   maqati.letterUnits("كَتَبَ");         // => ["كَ", "تَ", "بَ"]
//   maqati.tokens("قرأ الولد؟");         // => [{ tokenType: "Word", ... }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use maqati_ar::handle::{MaqatiError, MaqatiHandle};
use maqati_core::enums::TokenType;
use maqati_core::syllable::Syllable;
use maqati_core::token::Token;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a syllable.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSyllable {
    text: String,
    position: usize,
    pattern: String,
    is_inferred: bool,
    suggestion: Option<String>,
}

/// Serializable representation of a word with its syllables.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsWordSyllables {
    word: String,
    syllables: Vec<JsSyllable>,
}

/// Serializable representation of a token.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    token_type: String,
    text: String,
    token_len: usize,
    pos: usize,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn syllable_to_js(s: &Syllable) -> JsSyllable {
    JsSyllable {
        text: s.text.clone(),
        position: s.position,
        pattern: s.pattern.as_str().to_string(),
        is_inferred: s.is_inferred,
        suggestion: s.suggestion.clone(),
    }
}

fn token_type_to_string(tt: TokenType) -> String {
    match tt {
        TokenType::None => "None".to_string(),
        TokenType::Word => "Word".to_string(),
        TokenType::Punctuation => "Punctuation".to_string(),
        TokenType::Whitespace => "Whitespace".to_string(),
        TokenType::Unknown => "Unknown".to_string(),
    }
}

fn token_to_js(t: &Token) -> JsToken {
    JsToken {
        token_type: token_type_to_string(t.token_type),
        text: t.text.clone(),
        token_len: t.token_len,
        pos: t.pos,
    }
}

fn maqati_error_to_js(e: MaqatiError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmMaqati
// ============================================================================

/// Arabic syllabification engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmMaqati {
    handle: MaqatiHandle,
}

#[wasm_bindgen]
impl WasmMaqati {
    /// Create a new WasmMaqati instance.
    ///
    /// `language` defaults to "ar"; any other tag is rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(language: Option<String>) -> Result<WasmMaqati, JsError> {
        let language = language.unwrap_or_else(|| "ar".to_string());
        let handle = MaqatiHandle::new(&language).map_err(maqati_error_to_js)?;
        Ok(WasmMaqati { handle })
    }

    /// Split a word into syllable records.
    pub fn syllabify(&self, word: &str) -> Result<JsValue, JsError> {
        let syllables: Vec<JsSyllable> = self
            .handle
            .syllabify(word)
            .iter()
            .map(syllable_to_js)
            .collect();
        Ok(serde_wasm_bindgen::to_value(&syllables)?)
    }

    /// Split every word of a text into syllable records.
    #[wasm_bindgen(js_name = syllabifyText)]
    pub fn syllabify_text(&self, text: &str) -> Result<JsValue, JsError> {
        let words: Vec<JsWordSyllables> = self
            .handle
            .syllabify_text(text)
            .into_iter()
            .map(|(word, syllables)| JsWordSyllables {
                word,
                syllables: syllables.iter().map(syllable_to_js).collect(),
            })
            .collect();
        Ok(serde_wasm_bindgen::to_value(&words)?)
    }

    /// Normalized form of a word (no article, no vocalization).
    pub fn normalize(&self, word: &str) -> String {
        self.handle.normalize(word)
    }

    /// The word with vocalization marks removed (article kept).
    #[wasm_bindgen(js_name = stripHarakat)]
    pub fn strip_harakat(&self, word: &str) -> String {
        self.handle.strip_harakat(word)
    }

    /// Pedagogical letter units of a word.
    #[wasm_bindgen(js_name = letterUnits)]
    pub fn letter_units(&self, word: &str) -> js_sys::Array {
        self.handle
            .letter_units(word)
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    /// Tokenize running text.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = self.handle.tokens(text).iter().map(token_to_js).collect();
        Ok(serde_wasm_bindgen::to_value(&tokens)?)
    }

    /// Toggle default-vowel inference for unvocalized input.
    #[wasm_bindgen(js_name = setInferMissingVowels)]
    pub fn set_infer_missing_vowels(&mut self, value: bool) {
        self.handle.set_infer_missing_vowels(value);
    }

    /// Toggle suggestion strings on inferred syllables.
    #[wasm_bindgen(js_name = setIncludeSuggestions)]
    pub fn set_include_suggestions(&mut self, value: bool) {
        self.handle.set_include_suggestions(value);
    }
}
