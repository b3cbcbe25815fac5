// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Homoglyph equivalence table.
//!
//! Maps a canonical character to the glyphs and character sequences that
//! may stand in for it in disguised text, rendered as a regex fragment:
//! - only single glyphs: `[…]`
//! - with sequences: `(?:seq1|seq2|[…])`, longest sequence first
//!
//! Every equivalent is NFD-decomposed on insertion so it lines up with
//! normalized input. A glyph that decomposes into several characters is
//! stored as a sequence.

mod data;

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use unicode_normalization::UnicodeNormalization;

use crate::pattern::escape_char;

static BUILTIN: LazyLock<Arc<EquivalenceTable>> = LazyLock::new(|| {
    let mut table = EquivalenceTable::new();
    for entry in data::EQUIVALENCES {
        let glyphs = entry.glyphs.chars().map(String::from);
        let sequences = entry.sequences.iter().map(|s| s.to_string());
        table.insert(entry.base, glyphs.chain(sequences));
    }
    tracing::debug!("built-in equivalence table ready ({} entries)", table.len());
    Arc::new(table)
});

/// Equivalents of a single canonical character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClass {
    /// Single characters, canonical character first.
    glyphs: Vec<char>,
    /// Multi-character renderings.
    sequences: Vec<String>,
    /// Rendered regex fragment, rebuilt on every change.
    fragment: String,
}

impl EquivalenceClass {
    fn new(base: char) -> Self {
        let mut class = Self {
            glyphs: vec![base],
            sequences: Vec::new(),
            fragment: String::new(),
        };
        class.render();
        class
    }

    /// Single-character equivalents, including the canonical character.
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Multi-character equivalents.
    pub fn sequences(&self) -> &[String] {
        &self.sequences
    }

    /// Regex fragment matching any one equivalent.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Whether `equivalent` (after decomposition) belongs to this class.
    pub fn contains(&self, equivalent: &str) -> bool {
        let decomposed: String = equivalent.nfd().collect();
        let mut chars = decomposed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.glyphs.contains(&c),
            (Some(_), Some(_)) => self.sequences.contains(&decomposed),
            _ => false,
        }
    }

    /// Add one equivalent. Returns false if it was empty or already present.
    fn add(&mut self, equivalent: &str) -> bool {
        let decomposed: String = equivalent.nfd().collect();
        let mut chars = decomposed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => false,
            (Some(c), None) => {
                if self.glyphs.contains(&c) {
                    return false;
                }
                self.glyphs.push(c);
                true
            }
            (Some(_), Some(_)) => {
                if self.sequences.contains(&decomposed) {
                    return false;
                }
                self.sequences.push(decomposed);
                true
            }
        }
    }

    fn render(&mut self) {
        let mut class = String::from("[");
        for &glyph in &self.glyphs {
            class.push_str(&escape_char(glyph));
        }
        class.push(']');

        if self.sequences.is_empty() {
            self.fragment = class;
            return;
        }

        // Longest sequence first.
        let mut sequences: Vec<&String> = self.sequences.iter().collect();
        sequences.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));

        let mut fragment = String::from("(?:");
        for seq in sequences {
            fragment.extend(seq.chars().map(escape_char));
            fragment.push('|');
        }
        fragment.push_str(&class);
        fragment.push(')');
        self.fragment = fragment;
    }
}

/// Canonical table key for `c`: its NFD form, lower-cased.
///
/// None if `c` decomposes into several characters, since such a key can
/// never be reached from a decomposed phrase.
pub fn canonical_base(c: char) -> Option<char> {
    let mut decomposed = std::iter::once(c).nfd();
    let base = match (decomposed.next(), decomposed.next()) {
        (Some(base), None) => base,
        _ => return None,
    };
    let mut lower = base.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => Some(base),
    }
}

/// Read-only mapping from canonical character to its equivalence class.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTable {
    entries: HashMap<char, EquivalenceClass>,
}

impl EquivalenceTable {
    /// Create an empty table. Every character falls back to a literal match.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table, materialized once per process.
    pub fn builtin() -> Arc<EquivalenceTable> {
        Arc::clone(&BUILTIN)
    }

    /// Add equivalents for `base`, creating its class if needed.
    ///
    /// `base` is stored in its canonical form (see [`canonical_base`]).
    /// Empty and duplicate equivalents are ignored.
    pub fn insert<I, S>(&mut self, base: char, equivalents: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let base = canonical_base(base).unwrap_or(base);
        let class = self
            .entries
            .entry(base)
            .or_insert_with(|| EquivalenceClass::new(base));
        let mut changed = false;
        for equivalent in equivalents {
            changed |= class.add(equivalent.as_ref());
        }
        if changed {
            class.render();
        }
    }

    /// Look up the class for `c`, falling back to its lowercase form.
    pub fn class(&self, c: char) -> Option<&EquivalenceClass> {
        self.entries.get(&c).or_else(|| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) if l != c => self.entries.get(&l),
                _ => None,
            }
        })
    }

    /// Regex fragment for `c`, or None if `c` has no registered lookalikes.
    pub fn fragment(&self, c: char) -> Option<&str> {
        self.class(c).map(EquivalenceClass::fragment)
    }

    /// Canonical characters with an entry, in no particular order.
    #[cfg(test)]
    pub(crate) fn bases(&self) -> impl Iterator<Item = char> + '_ {
        self.entries.keys().copied()
    }

    /// Number of canonical characters with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
