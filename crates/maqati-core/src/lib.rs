// maqati-core: shared types and Unicode utilities for the maqati Arabic
// reading toolkit.
//
// This crate holds everything the language module and the delivery
// surfaces (CLI, wasm, FFI) need to agree on: Arabic character
// classification, the closed syllable pattern set, and the record types
// produced by syllabification and tokenization. It carries no engine
// logic of its own.

pub mod character;
pub mod enums;
pub mod syllable;
pub mod token;
