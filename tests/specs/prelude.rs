//! Test helpers for behavioral tests.
//!
//! Thin wrappers around the public API so assertions read as data.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use serde_json::{Value, json};
use std::path::{Path, PathBuf};

use lookalike::Query;

/// Matches of a single phrase, via the process-wide finder.
pub fn found(text: &str, phrase: &str) -> Vec<String> {
    lookalike::find(text, phrase).unwrap().into_one().unwrap()
}

/// Results of any query, rendered as JSON.
pub fn found_json(text: &str, query: impl Into<Query>) -> Value {
    lookalike::find(text, query).unwrap().to_json()
}

/// Error message for a dynamically typed call that must fail.
pub fn rejected(text: Value, query: Value) -> String {
    let err = lookalike::find_value(&text, &query).unwrap_err();
    assert!(err.is_invalid_argument(), "unexpected error kind: {err}");
    err.to_string()
}

/// Path to a file under tests/fixtures.
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests/fixtures")
        .join(name)
}
