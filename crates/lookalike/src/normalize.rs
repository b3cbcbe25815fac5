// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical decomposition of searched text.
//!
//! Input is converted to NFD before matching so that precomposed letters
//! ("é") and decomposed ones ("e" + U+0301) look the same to a pattern:
//! a base character followed by combining marks.

use std::borrow::Cow;

use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfd_quick};

/// Decompose `text` to NFD, borrowing when it is already decomposed.
pub fn decompose(text: &str) -> Cow<'_, str> {
    match is_nfd_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        IsNormalized::No | IsNormalized::Maybe => Cow::Owned(text.nfd().collect()),
    }
}

/// Whether `c` is in the Combining Diacritical Marks block (U+0300 to U+036F).
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
