// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// Lookalike error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument had the wrong runtime type.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A phrase expanded into a regex the engine refused to build.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Equivalence table configuration is malformed.
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The text argument was not a string.
    pub fn expected_text(found: &str) -> Self {
        Error::InvalidArgument {
            message: format!("Expected a string, found {}", found),
        }
    }

    /// The phrase argument was neither a string nor an array of strings.
    pub fn expected_phrases(found: &str) -> Self {
        Error::InvalidArgument {
            message: format!(
                "Search strings must either be passed as a string or an array of strings, found {}",
                found
            ),
        }
    }

    /// Whether this error reports a badly typed argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }
}

/// Result type using lookalike Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
