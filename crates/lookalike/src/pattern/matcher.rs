// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled lookalike patterns.

use regex::{Regex, RegexBuilder};

/// Compiled program size limit, room for phrases of tens of thousands of chars.
pub const SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// Lazy DFA cache limit.
pub const DFA_SIZE_LIMIT: usize = 16 * 1024 * 1024;

/// An immutable compiled search pattern.
///
/// Matching is case-insensitive and reports every non-overlapping match,
/// left to right.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

/// A match found in content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    /// Byte offset where match starts.
    pub start: usize,
    /// Byte offset where match ends.
    pub end: usize,
}

impl PatternMatch {
    /// The matched slice of `content`.
    pub fn text<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }

    /// Whether the match is zero-width.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl CompiledPattern {
    /// Compile regex source produced by the phrase compiler.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .size_limit(SIZE_LIMIT)
            .dfa_size_limit(DFA_SIZE_LIMIT)
            .build()?;
        Ok(Self { regex })
    }

    /// The regex source this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find all matches in content.
    pub fn find_all(&self, content: &str) -> Vec<PatternMatch> {
        self.regex
            .find_iter(content)
            .map(|m| PatternMatch {
                start: m.start(),
                end: m.end(),
            })
            .collect()
    }

    /// Find all matches and copy out the matched text.
    pub fn find_texts(&self, content: &str) -> Vec<String> {
        self.find_all(content)
            .iter()
            .map(|m| m.text(content).to_string())
            .collect()
    }

    /// Whether the pattern matches anywhere in content.
    #[cfg(test)]
    pub(crate) fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
