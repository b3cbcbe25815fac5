// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn single_phrase_returns_matches_in_order() {
    let finder = Finder::new();
    assert_eq!(
        finder.find_one("abcabcabc", "abc").unwrap(),
        vec!["abc", "abc", "abc"]
    );
}

#[test]
fn batch_returns_entry_per_phrase() {
    let finder = Finder::new();
    let found = finder.find_many("abcdef", &["abc", "def", "ghi"]).unwrap();
    assert_eq!(found.len(), 3);
    assert_eq!(found["abc"], vec!["abc"]);
    assert_eq!(found["def"], vec!["def"]);
    assert!(found["ghi"].is_empty());
}

#[test]
fn batch_duplicates_collapse_to_one_key() {
    let finder = Finder::new();
    let found = finder.find_many("abc abc", &["abc", "abc"]).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found["abc"], vec!["abc", "abc"]);
}

#[test]
fn batch_matches_may_overlap() {
    let finder = Finder::new();
    let found = finder.find_many("abcdef", &["bcd", "cde"]).unwrap();
    assert_eq!(found["bcd"], vec!["bcd"]);
    assert_eq!(found["cde"], vec!["cde"]);
}

#[test]
fn find_dispatches_on_query_shape() {
    let finder = Finder::new();
    assert!(matches!(finder.find("abc", "abc").unwrap(), Matches::One(_)));
    assert!(matches!(
        finder.find("abc", ["abc"]).unwrap(),
        Matches::Many(_)
    ));
}

#[test]
fn matches_come_from_normalized_text() {
    let finder = Finder::new();
    assert_eq!(finder.find_one("café", "cafe").unwrap(), vec!["cafe\u{0301}"]);
}

#[test]
fn empty_phrase_matches_every_boundary() {
    let finder = Finder::new();
    assert_eq!(finder.find_one("abc", "").unwrap(), vec![""; 4]);
    assert_eq!(finder.find_one("", "").unwrap(), vec![""]);
}

#[test]
fn empty_phrase_counts_decomposed_boundaries() {
    let finder = Finder::new();
    // "é" decomposes to two characters, giving three boundaries.
    assert_eq!(finder.find_one("é", "").unwrap().len(), 3);
}

#[test]
fn cache_is_populated_once_per_phrase() {
    let finder = Finder::new();
    finder.find_one("abc", "abc").unwrap();
    finder.find_one("xyz", "abc").unwrap();
    finder.find_many("abc", &["abc", "def"]).unwrap();

    let stats = finder.cache_stats();
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.misses, 2);
    assert_eq!(stats.hits, 2);
}

#[test]
fn separate_finders_do_not_share_caches() {
    let first = Finder::new();
    let second = Finder::new();
    first.find_one("abc", "abc").unwrap();
    assert_eq!(second.cache_stats().entries, 0);
}

#[test]
fn custom_table_changes_what_matches() {
    let mut table = EquivalenceTable::new();
    table.insert('o', ["0"]);
    let finder = Finder::with_table(table);

    assert_eq!(finder.find_one("f00 b4r", "foo").unwrap(), vec!["f00"]);
    assert!(finder.find_one("f00 b4r", "bar").unwrap().is_empty());
    assert_eq!(finder.table().len(), 1);
}

#[test]
fn find_value_accepts_string_and_array() {
    let finder = Finder::new();
    assert_eq!(
        finder.find_value(&json!("abc"), &json!("abc")).unwrap(),
        Matches::One(vec!["abc".into()])
    );
    assert_eq!(
        finder
            .find_value(&json!(""), &json!(["abc", "def"]))
            .unwrap()
            .to_json(),
        json!({ "abc": [], "def": [] })
    );
}

#[test]
fn find_value_rejects_non_string_text() {
    let finder = Finder::new();
    for (text, type_name) in [
        (json!(1), "number"),
        (json!(true), "boolean"),
        (json!(null), "null"),
        (json!([]), "array"),
        (json!({}), "object"),
    ] {
        let err = finder.find_value(&text, &json!("")).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().ends_with(&format!("Expected a string, found {type_name}")));
    }
}

#[test]
fn find_value_rejects_bad_query_before_searching() {
    let finder = Finder::new();
    let err = finder.find_value(&json!(""), &json!(1)).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(finder.cache_stats().entries, 0);
}

proptest! {
    #[test]
    fn plain_phrase_finds_itself(phrase in "[a-z]{1,8}( [a-z]{1,8})?") {
        let finder = Finder::new();
        let found = finder.find_one(&phrase, &phrase).unwrap();
        prop_assert!(!found.is_empty());
        prop_assert_eq!(&found[0], &phrase);
    }

    #[test]
    fn repeated_search_is_idempotent(text in "[a-zA-Z0-9 ]{0,40}", phrase in "[a-z]{1,4}") {
        let finder = Finder::new();
        let first = finder.find_one(&text, &phrase).unwrap();
        let second = finder.find_one(&text, &phrase).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn batch_equals_independent_singles(
        text in "[a-z ]{0,40}",
        phrases in prop::collection::vec("[a-z]{1,3}", 0..5),
    ) {
        let batch = Finder::new().find_many(&text, &phrases).unwrap();
        let mut keys: Vec<&String> = batch.keys().collect();
        keys.sort();
        let mut expected_keys: Vec<&String> = phrases.iter().collect();
        expected_keys.sort();
        expected_keys.dedup();
        prop_assert_eq!(keys, expected_keys);

        for phrase in &phrases {
            let single = Finder::new().find_one(&text, phrase).unwrap();
            prop_assert_eq!(&batch[phrase], &single);
        }
    }
}
