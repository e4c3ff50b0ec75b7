// maqati-ar: Arabic language module for the maqati reading toolkit.
//
// Feature map:
//   syllabify  - the syllabification engine (default)
//   normalize  - word normalization for search and display
//   tokenize   - text tokenization and letter decomposition
//   handle     - the MaqatiHandle facade tying everything together

#[cfg(feature = "handle")]
pub mod handle;

#[cfg(feature = "normalize")]
pub mod normalize;

#[cfg(feature = "syllabify")]
pub mod syllabifier;

#[cfg(feature = "tokenize")]
pub mod tokenizer;
