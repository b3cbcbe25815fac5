// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Equivalence table configuration.
//!
//! Extends (or replaces) the built-in table from TOML:
//!
//! ```toml
//! version = 1
//! builtin = true
//!
//! [equivalents]
//! a = ["∆", "/-\\"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::table::{EquivalenceTable, canonical_base};

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default = "default_builtin")]
    builtin: bool,

    #[serde(default)]
    equivalents: BTreeMap<String, Vec<String>>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Equivalence table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Config file version (must be 1).
    pub version: i64,

    /// Start from the built-in table (default: true).
    #[serde(default = "default_builtin")]
    pub builtin: bool,

    /// Extra equivalents per canonical character.
    #[serde(default)]
    pub equivalents: BTreeMap<String, Vec<String>>,
}

fn default_builtin() -> bool {
    true
}

/// Canonical character for an `[equivalents]` key, if it names exactly one.
fn key_base(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => canonical_base(c),
        _ => None,
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            builtin: default_builtin(),
            equivalents: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    /// Build the equivalence table this config describes.
    pub fn into_table(self) -> EquivalenceTable {
        let mut table = if self.builtin {
            (*EquivalenceTable::builtin()).clone()
        } else {
            EquivalenceTable::new()
        };
        for (key, equivalents) in self.equivalents {
            if let Some(base) = key_base(&key) {
                table.insert(base, equivalents);
            }
        }
        table
    }

    fn validate(&self, path: Option<&Path>) -> Result<()> {
        for (key, equivalents) in &self.equivalents {
            if key_base(key).is_none() {
                return Err(config_error(
                    format!(
                        "equivalents key {:?} must be a single character without diacritics",
                        key
                    ),
                    path,
                ));
            }
            if equivalents.iter().any(String::is_empty) {
                return Err(config_error(
                    format!("equivalents for {:?} contain an empty string", key),
                    path,
                ));
            }
        }
        Ok(())
    }
}

/// Load config from a file (strict mode).
pub fn load(path: &Path) -> Result<TableConfig> {
    let content = read(path)?;
    parse_at(&content, Some(path))
}

/// Load config from a file, warning on unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<TableConfig> {
    let content = read(path)?;
    parse_with_warnings_at(&content, Some(path))
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str) -> Result<TableConfig> {
    parse_at(content, None)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str) -> Result<TableConfig> {
    parse_with_warnings_at(content, None)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_at(content: &str, path: Option<&Path>) -> Result<TableConfig> {
    // First check version
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version".to_string(), path))?;
    check_version(version, path)?;

    // Parse full config
    let config: TableConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;
    config.validate(path)?;
    Ok(config)
}

fn parse_with_warnings_at(content: &str, path: Option<&Path>) -> Result<TableConfig> {
    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;
    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        warn_unknown_key(path, key);
    }

    let config = TableConfig {
        version: flexible.version,
        builtin: flexible.builtin,
        equivalents: flexible.equivalents,
    };
    config.validate(path)?;
    Ok(config)
}

fn check_version(version: i64, path: Option<&Path>) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }
    Ok(())
}

fn warn_unknown_key(path: Option<&Path>, key: &str) {
    match path {
        Some(path) => tracing::warn!(
            "{}: unrecognized field `{}` (ignored)",
            path.display(),
            key
        ),
        None => tracing::warn!("unrecognized field `{}` (ignored)", key),
    }
}

fn config_error(message: String, path: Option<&Path>) -> Error {
    Error::Config {
        message,
        path: path.map(Path::to_path_buf),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
