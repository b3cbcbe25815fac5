// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled pattern cache.
//!
//! Patterns are keyed by the raw search phrase exactly as the caller passed
//! it. Entries are never evicted or replaced: once a phrase is compiled,
//! every later lookup returns the same pattern.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::error::Result;
use crate::pattern::{CompiledPattern, compile_phrase};
use crate::table::EquivalenceTable;

/// Thread-safe, append-only map from phrase to compiled pattern.
pub struct PatternCache {
    /// Concurrent hashmap of compiled patterns.
    inner: DashMap<String, Arc<CompiledPattern>>,
    /// Cache hit count.
    hits: AtomicUsize,
    /// Cache miss count.
    misses: AtomicUsize,
}

/// Cache statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

impl PatternCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Look up the pattern for `phrase` without compiling.
    pub fn get(&self, phrase: &str) -> Option<Arc<CompiledPattern>> {
        self.inner.get(phrase).map(|entry| Arc::clone(entry.value()))
    }

    /// Return the cached pattern for `phrase`, compiling it on first use.
    ///
    /// Compilation runs outside the map's locks. If two threads miss on the
    /// same phrase at once, both compile and the first insert wins; the
    /// loser's pattern is dropped and both callers get the stored one.
    pub fn get_or_compile(
        &self,
        phrase: &str,
        table: &EquivalenceTable,
    ) -> Result<Arc<CompiledPattern>> {
        if let Some(pattern) = self.get(phrase) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!("pattern cache hit for {:?}", phrase);
            return Ok(pattern);
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let compiled = Arc::new(compile_phrase(phrase, table)?);
        let stored = self
            .inner
            .entry(phrase.to_string())
            .or_insert(compiled)
            .value()
            .clone();
        Ok(stored)
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.inner.len(),
        }
    }

    /// Number of cached patterns.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether nothing has been compiled yet.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
