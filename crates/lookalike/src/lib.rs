// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search for text disguised with homoglyphs, diacritics and ASCII
//! lookalikes.
//!
//! ```
//! let found = lookalike::find("what éggplâńt", "eggplant").unwrap();
//! assert_eq!(found.into_one().unwrap(), vec!["e\u{301}ggpla\u{302}n\u{301}t"]);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod finder;
pub mod normalize;
pub mod pattern;
pub mod query;
pub mod table;

use std::sync::LazyLock;

use serde_json::Value as JsonValue;

pub use cache::{CacheStats, PatternCache};
pub use config::TableConfig;
pub use error::{Error, Result};
pub use finder::Finder;
pub use pattern::CompiledPattern;
pub use query::{Matches, Query};
pub use table::{EquivalenceClass, EquivalenceTable};

static DEFAULT_FINDER: LazyLock<Finder> = LazyLock::new(Finder::new);

/// The process-wide finder over the built-in table.
pub fn default_finder() -> &'static Finder {
    &DEFAULT_FINDER
}

/// Search `text` for one phrase or a batch of phrases.
///
/// Uses the process-wide finder, so each distinct phrase is compiled once
/// per process.
pub fn find(text: &str, query: impl Into<Query>) -> Result<Matches> {
    DEFAULT_FINDER.find(text, query)
}

/// Search with dynamically typed arguments, using the process-wide finder.
///
/// See [`Finder::find_value`].
pub fn find_value(text: &JsonValue, query: &JsonValue) -> Result<Matches> {
    DEFAULT_FINDER.find_value(text, query)
}
