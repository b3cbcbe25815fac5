// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search phrase to pattern compilation.
//!
//! The phrase is NFD-decomposed and walked one character at a time:
//! - a run of whitespace becomes a single `\s+`
//! - any other character becomes its equivalence fragment (or itself,
//!   escaped), followed by an allowance for trailing combining marks
//!
//! An empty phrase yields an empty pattern, which matches the empty string
//! at every character boundary.

use unicode_normalization::UnicodeNormalization;

use super::escape::escape_char;
use super::matcher::CompiledPattern;
use crate::error::Result;
use crate::table::EquivalenceTable;

/// Zero or more combining diacritical marks (U+0300 to U+036F).
pub const COMBINING_MARKS: &str = r"[\x{0300}-\x{036F}]*";

/// One or more whitespace characters.
pub const WHITESPACE: &str = r"\s+";

/// Build the regex source for `phrase`.
pub fn build_pattern_source(phrase: &str, table: &EquivalenceTable) -> String {
    let mut source = String::new();
    let mut last_was_space = false;

    for c in phrase.nfd() {
        if c.is_whitespace() {
            if !last_was_space {
                source.push_str(WHITESPACE);
                last_was_space = true;
            }
            continue;
        }
        last_was_space = false;

        match table.fragment(c) {
            Some(fragment) => source.push_str(fragment),
            None => source.push_str(&escape_char(c)),
        }
        source.push_str(COMBINING_MARKS);
    }

    source
}

/// Compile `phrase` into a case-insensitive lookalike pattern.
pub fn compile_phrase(phrase: &str, table: &EquivalenceTable) -> Result<CompiledPattern> {
    let source = build_pattern_source(phrase, table);
    let pattern = CompiledPattern::new(&source)?;
    tracing::debug!(
        "compiled phrase {:?} ({} bytes of pattern source)",
        phrase,
        source.len()
    );
    Ok(pattern)
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
