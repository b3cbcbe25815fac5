// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Search requests and their result shapes.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// What to search for: one phrase, or a batch of independent phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    One(String),
    Many(Vec<String>),
}

/// Search results, shaped after the query.
///
/// Serializes untagged: a JSON array for [`Matches::One`] and a JSON object
/// keyed by phrase for [`Matches::Many`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Matches {
    /// Matched substrings in text order.
    One(Vec<String>),
    /// Matched substrings per phrase, as the phrase was supplied.
    Many(HashMap<String, Vec<String>>),
}

impl Query {
    /// Interpret a dynamically typed phrase argument.
    ///
    /// Accepts a string or an array of strings; anything else, including an
    /// array holding a non-string, is an invalid argument.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(phrase) => Ok(Query::One(phrase.clone())),
            JsonValue::Array(items) => items
                .iter()
                .map(|item| match item {
                    JsonValue::String(phrase) => Ok(phrase.clone()),
                    other => Err(Error::expected_phrases(&format!(
                        "array containing {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Query::Many),
            other => Err(Error::expected_phrases(json_type_name(other))),
        }
    }
}

impl From<&str> for Query {
    fn from(phrase: &str) -> Self {
        Query::One(phrase.to_string())
    }
}

impl From<String> for Query {
    fn from(phrase: String) -> Self {
        Query::One(phrase)
    }
}

impl From<&String> for Query {
    fn from(phrase: &String) -> Self {
        Query::One(phrase.clone())
    }
}

impl From<Vec<String>> for Query {
    fn from(phrases: Vec<String>) -> Self {
        Query::Many(phrases)
    }
}

impl From<Vec<&str>> for Query {
    fn from(phrases: Vec<&str>) -> Self {
        Query::Many(phrases.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Query {
    fn from(phrases: &[&str]) -> Self {
        Query::Many(phrases.iter().map(|p| p.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Query {
    fn from(phrases: [&str; N]) -> Self {
        Query::Many(phrases.iter().map(|p| p.to_string()).collect())
    }
}

impl Matches {
    /// Single-phrase results, if this is a single-phrase result.
    pub fn into_one(self) -> Option<Vec<String>> {
        match self {
            Matches::One(found) => Some(found),
            Matches::Many(_) => None,
        }
    }

    /// Per-phrase results, if this is a batch result.
    pub fn into_many(self) -> Option<HashMap<String, Vec<String>>> {
        match self {
            Matches::Many(found) => Some(found),
            Matches::One(_) => None,
        }
    }

    /// Convert to JSON in the shape of the query.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Matches::One(found) => JsonValue::from(found.clone()),
            Matches::Many(found) => JsonValue::Object(
                found
                    .iter()
                    .map(|(phrase, hits)| (phrase.clone(), JsonValue::from(hits.clone())))
                    .collect(),
            ),
        }
    }
}

/// JSON type name used in argument errors.
pub(crate) fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
