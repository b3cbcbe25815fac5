// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Escaping of single characters for splicing into a regex.

/// Escape one character so it matches only itself.
///
/// The result is valid both as a top-level regex atom and inside a
/// bracketed character class: every regex meta character (including the
/// class-only `-`, `&` and `~`) is backslash-escaped. `/` is not special
/// in this regex syntax and is left as is.
pub fn escape_char(c: char) -> String {
    let mut buf = [0u8; 4];
    regex::escape(c.encode_utf8(&mut buf))
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
