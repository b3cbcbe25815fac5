// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search orchestration.
//!
//! A [`Finder`] owns an equivalence table and the pattern cache built from
//! it. Text is NFD-normalized once per call, then each phrase's cached
//! pattern is run over it independently.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::cache::{CacheStats, PatternCache};
use crate::error::{Error, Result};
use crate::normalize::decompose;
use crate::query::{Matches, Query, json_type_name};
use crate::table::EquivalenceTable;

/// Finds disguised occurrences of phrases in text.
pub struct Finder {
    table: Arc<EquivalenceTable>,
    cache: PatternCache,
}

impl Finder {
    /// Create a finder over the built-in equivalence table.
    pub fn new() -> Self {
        Self::with_table(EquivalenceTable::builtin())
    }

    /// Create a finder over a custom table, with a fresh cache.
    pub fn with_table(table: impl Into<Arc<EquivalenceTable>>) -> Self {
        Self {
            table: table.into(),
            cache: PatternCache::new(),
        }
    }

    /// The equivalence table patterns are compiled against.
    pub fn table(&self) -> &EquivalenceTable {
        &self.table
    }

    /// Search `text` for one phrase or a batch of phrases.
    ///
    /// # Example
    /// ```
    /// use lookalike::{Finder, Matches};
    ///
    /// let finder = Finder::new();
    /// let found = finder.find("abcabcabc", "abc").unwrap();
    /// assert_eq!(found, Matches::One(vec!["abc".into(); 3]));
    /// ```
    pub fn find(&self, text: &str, query: impl Into<Query>) -> Result<Matches> {
        match query.into() {
            Query::One(phrase) => self.find_one(text, &phrase).map(Matches::One),
            Query::Many(phrases) => self.find_many(text, &phrases).map(Matches::Many),
        }
    }

    /// All matches of `phrase` in `text`, in text order.
    ///
    /// Matches are slices of the NFD form of `text`, so diacritics and
    /// homoglyphs come back as they appear in the input.
    pub fn find_one(&self, text: &str, phrase: &str) -> Result<Vec<String>> {
        let normalized = decompose(text);
        self.search(&normalized, phrase)
    }

    /// Matches for each phrase, keyed by the phrase as supplied.
    ///
    /// Phrases are searched independently: a phrase without matches maps to
    /// an empty list, and matches of different phrases may overlap.
    pub fn find_many<S: AsRef<str>>(
        &self,
        text: &str,
        phrases: &[S],
    ) -> Result<HashMap<String, Vec<String>>> {
        let normalized = decompose(text);
        let mut results = HashMap::with_capacity(phrases.len());
        for phrase in phrases {
            let phrase = phrase.as_ref();
            let found = self.search(&normalized, phrase)?;
            results.insert(phrase.to_string(), found);
        }
        Ok(results)
    }

    /// Search with dynamically typed arguments.
    ///
    /// `text` must be a JSON string; `query` a string or an array of
    /// strings. Anything else is reported as an invalid argument naming the
    /// type received.
    pub fn find_value(&self, text: &JsonValue, query: &JsonValue) -> Result<Matches> {
        let JsonValue::String(text) = text else {
            return Err(Error::expected_text(json_type_name(text)));
        };
        let query = Query::from_json(query)?;
        self.find(text, query)
    }

    /// Pattern cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    fn search(&self, normalized: &str, phrase: &str) -> Result<Vec<String>> {
        let pattern = self.cache.get_or_compile(phrase, &self.table)?;
        let found = pattern.find_texts(normalized);
        tracing::trace!("{:?}: {} match(es)", phrase, found.len());
        Ok(found)
    }
}

impl Default for Finder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "finder_tests.rs"]
mod tests;
