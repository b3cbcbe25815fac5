//! Homoglyph, diacritic, lookalike and whitespace tolerance.

use crate::prelude::*;

/// > Diacritics on any subset of letters still match, and the match is the
/// > decomposed input text.
#[test]
fn diacritics_match() {
    assert_eq!(
        found("what éggplâńt", "eggplant"),
        vec!["e\u{0301}ggpla\u{0302}n\u{0301}t"]
    );
}

/// > Stacked combining marks from pre-decomposed input match too.
#[test]
fn stacked_combining_marks_match() {
    let text = "e\u{0300}\u{0301}\u{0308}ggplant";
    assert_eq!(found(text, "eggplant"), vec![text]);
}

/// > Letters from mathematical, Cyrillic, Greek and other scripts match.
#[test]
fn homoglyphs_match() {
    let text = "𝜧𝚘𝝄𝕟 \u{104B4}ⅰ𝕧ҽʀ";
    assert_eq!(found(text, "moon river"), vec![text]);
}

/// > Letters from historic alphabets such as Deseret and Osage match.
#[test]
fn historic_script_homoglyphs_match() {
    let text = "𝜧𝚘\u{10404}𝕟 \u{104DC}ⅰ𝕧ҽʀ";
    assert_eq!(found(text, "moon river"), vec![text]);
    assert_eq!(found("𝜧𝚘𝐨𝕟 𝓇ⅰ𝕧ҽʀ", "moon river"), vec!["𝜧𝚘𝐨𝕟 𝓇ⅰ𝕧ҽʀ"]);
}

/// > Every letter and the space may come from a different script.
#[test]
fn multi_script_substitution_matches() {
    // fullwidth Ｍ, Cyrillic о and е, circled ⓝ, roman ⅰ, ideographic space
    let text = "Ｍоoⓝ\u{3000}rⅰvеʀ";
    assert_eq!(found(text, "moon river"), vec![text]);
}

/// > ASCII lookalike sequences match.
#[test]
fn lookalikes_match() {
    assert_eq!(found("|=/-\\|<3", "fake"), vec!["|=/-\\|<3"]);
    assert_eq!(found("h3ll0 w0rld", "hello world"), vec!["h3ll0 w0rld"]);
}

/// > Matching is case-insensitive in both directions.
#[test]
fn matching_ignores_case() {
    assert_eq!(found("Moon RIVER", "moon river"), vec!["Moon RIVER"]);
    assert_eq!(found("moon river", "MOON RIVER"), vec!["moon river"]);
}

/// > A single space in the phrase matches one or more whitespace characters.
#[test]
fn whitespace_runs_match() {
    assert_eq!(found("moon  river", "moon river"), vec!["moon  river"]);
    assert_eq!(found("moon\t\n river", "moon river"), vec!["moon\t\n river"]);
    assert_eq!(
        found("moon\u{00A0}\u{2003}river", "moon river"),
        vec!["moon\u{00A0}\u{2003}river"]
    );
}

/// > The phrase's word boundary is required.
#[test]
fn missing_whitespace_does_not_match() {
    assert!(found("moonriver", "moon river").is_empty());
}

/// > Extra whitespace in the phrase does not demand extra whitespace.
#[test]
fn phrase_whitespace_runs_collapse() {
    assert_eq!(found("moon river", "moon   river"), vec!["moon river"]);
}

/// > Plain phrases always find themselves.
#[test]
fn plain_phrases_find_themselves() {
    for phrase in ["abc", "hello world", "the quick brown fox", "x"] {
        assert_eq!(found(phrase, phrase), vec![phrase], "{phrase}");
    }
}

/// > Phrases with regex metacharacters are matched literally.
#[test]
fn metacharacters_in_phrase_are_literal() {
    assert_eq!(found("cost: $5.00 (approx)", "$5.00"), vec!["$5.00"]);
    assert!(found("cost: 5x00", "5.00").is_empty());
    assert_eq!(found("a+b=c", "a+b"), vec!["a+b"]);
}
