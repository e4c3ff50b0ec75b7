// FFI functions are inherently unsafe — callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// maqati-ffi: C-compatible FFI layer for MaqatiHandle.
//
// This crate exposes a stable C ABI so the surrounding CRUD service (or
// any language with C FFI support) can call the syllabifier in-process.
//
// Memory management rules:
// - Opaque `MaqatiHandle` pointer: created by `maqati_new`, freed by `maqati_free`.
// - Returned strings: caller must free with `maqati_free_str`.
// - Returned string arrays: caller must free with `maqati_free_str_array`.
// - Returned syllable arrays: caller must free with `maqati_free_syllables`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use maqati_ar::handle::MaqatiHandle;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new maqati handle for the given language tag (e.g. "ar").
///
/// Returns an opaque pointer on success, NULL on failure. On failure, if
/// `error_out` is non-NULL, it receives a heap-allocated error string that
/// the caller must free with `maqati_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_new(
    language: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut MaqatiHandle {
    let Some(language) = cstr_to_str(language) else {
        set_error(error_out, "language is null or not valid UTF-8");
        return ptr::null_mut();
    };

    match MaqatiHandle::new(language) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a MaqatiHandle created by `maqati_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_free(handle: *mut MaqatiHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

/// Toggle default-vowel inference for unvocalized input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_set_infer_missing_vowels(
    handle: *mut MaqatiHandle,
    value: c_int,
) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_infer_missing_vowels(value != 0);
    }
}

// ── Syllabification ──────────────────────────────────────────────

/// One syllable record returned by FFI.
#[repr(C)]
pub struct MaqatiSyllable {
    /// Syllable text (heap-allocated C string).
    pub text: *mut c_char,
    /// Pattern tag: "V", "VC", "CV", "CVC", "CVV", "CVVC" or "CVCC".
    pub pattern: *mut c_char,
    /// 0-based position within the word.
    pub position: usize,
    /// 1 if the syllable's vowel was inferred, 0 otherwise.
    pub is_inferred: c_int,
    /// Vocalized suggestion for inferred syllables, NULL otherwise.
    pub suggestion: *mut c_char,
}

/// Syllable array returned by `maqati_syllabify`.
#[repr(C)]
pub struct MaqatiSyllableArray {
    pub syllables: *mut MaqatiSyllable,
    pub count: usize,
}

/// Split a word into syllables.
///
/// Returns a `MaqatiSyllableArray`. Caller must free with
/// `maqati_free_syllables`. Returns a struct with count=0 on error or for
/// an empty word.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_syllabify(
    handle: *const MaqatiHandle,
    word: *const c_char,
) -> MaqatiSyllableArray {
    let empty = MaqatiSyllableArray { syllables: ptr::null_mut(), count: 0 };

    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return empty;
    };
    let Some(word) = cstr_to_str(word) else {
        return empty;
    };

    let syllables = handle.syllabify(word);
    let count = syllables.len();
    if count == 0 {
        return empty;
    }

    let mut c_syllables: Vec<MaqatiSyllable> = Vec::with_capacity(count);
    for s in &syllables {
        c_syllables.push(MaqatiSyllable {
            text: str_to_c(&s.text),
            pattern: str_to_c(s.pattern.as_str()),
            position: s.position,
            is_inferred: if s.is_inferred { 1 } else { 0 },
            suggestion: match &s.suggestion {
                Some(text) => str_to_c(text),
                None => ptr::null_mut(),
            },
        });
    }

    let syllables_ptr = c_syllables.as_mut_ptr();
    std::mem::forget(c_syllables);

    MaqatiSyllableArray { syllables: syllables_ptr, count }
}

/// Free a syllable array returned by `maqati_syllabify`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_free_syllables(arr: MaqatiSyllableArray) {
    if arr.syllables.is_null() || arr.count == 0 {
        return;
    }
    let syllables = unsafe { Vec::from_raw_parts(arr.syllables, arr.count, arr.count) };
    for s in syllables {
        free_c_str(s.text);
        free_c_str(s.pattern);
        free_c_str(s.suggestion);
    }
}

// ── Normalization ────────────────────────────────────────────────

/// Normalized form of a word (no article, no vocalization).
///
/// Returns a heap-allocated C string. Caller must free with `maqati_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_normalize(
    handle: *const MaqatiHandle,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.normalize(word))
}

/// The word with vocalization marks removed (article kept).
///
/// Returns a heap-allocated C string. Caller must free with `maqati_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_strip_harakat(
    handle: *const MaqatiHandle,
    word: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    str_to_c(&handle.strip_harakat(word))
}

// ── Letter units ─────────────────────────────────────────────────

/// Split a word into letter units (base letter plus its marks).
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `maqati_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_letter_units(
    handle: *const MaqatiHandle,
    word: *const c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&handle.letter_units(word))
}

// ── Memory management ────────────────────────────────────────────

/// Free a heap-allocated C string returned by maqati functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn maqati_free_str_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // Reconstruct the Vec (capacity = len = i + 1 including terminator)
    drop(unsafe { Vec::from_raw_parts(arr, i + 1, i + 1) });
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    // Exact capacity so the free side can reconstruct the Vec.
    let mut ptrs: Vec<*mut c_char> = Vec::with_capacity(strings.len() + 1);
    for s in strings {
        ptrs.push(str_to_c(s));
    }
    ptrs.push(ptr::null_mut()); // NULL terminator
    let ptr = ptrs.as_mut_ptr();
    std::mem::forget(ptrs);
    ptr
}
