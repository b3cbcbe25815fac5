//! Custom equivalence tables from TOML configuration.

use crate::prelude::*;

use lookalike::{Finder, config};

/// > A config file adds equivalents on top of the built-in table.
#[test]
fn fixture_table_extends_builtin() {
    let table = config::load(&fixture("tables/emoji.toml"))
        .unwrap()
        .into_table();
    let finder = Finder::with_table(table);

    let found = finder.find_one("🅾️🆖 what a g🍩al", "goal").unwrap();
    assert_eq!(found, vec!["g🍩al"]);
    assert_eq!(finder.find_one("𝐠𝐨𝐚𝐥", "goal").unwrap(), vec!["𝐠𝐨𝐚𝐥"]);
}

/// > A table without the built-in data only knows its own equivalents.
#[test]
fn standalone_table_ignores_builtin() {
    let table = config::parse("version = 1\nbuiltin = false\n[equivalents]\no = [\"0\"]\n")
        .unwrap()
        .into_table();
    let finder = Finder::with_table(table);

    assert_eq!(finder.find_one("g00d", "good").unwrap(), vec!["g00d"]);
    assert!(finder.find_one("𝐠𝐨𝐨𝐝", "good").unwrap().is_empty());
}

/// > Keys are matched in canonical form: upper-case keys extend the
/// > lower-case class and compatibility characters use their decomposition.
#[test]
fn keys_are_canonicalized() {
    let table = config::parse("version = 1\n[equivalents]\nA = [\"∆\"]\n\"\u{2126}\" = [\"@@\"]\n")
        .unwrap()
        .into_table();
    let finder = Finder::with_table(table);

    assert_eq!(finder.find_one("c∆t", "cat").unwrap(), vec!["c∆t"]);
    assert_eq!(finder.find_one("c4t", "CAT").unwrap(), vec!["c4t"]);
    assert_eq!(finder.find_one("@@", "\u{2126}").unwrap(), vec!["@@"]);
}

/// > Invalid configuration is reported, not ignored.
#[test]
fn invalid_config_is_rejected() {
    let err = config::parse("version = 1\n[equivalents]\nab = [\"x\"]\n").unwrap_err();
    assert!(matches!(err, lookalike::Error::Config { .. }));
}
