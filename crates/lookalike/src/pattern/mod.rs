// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lookalike-tolerant pattern construction.
//!
//! - escape: single characters to literal regex atoms
//! - compiler: search phrase to regex source, then to a compiled pattern
//! - matcher: the compiled pattern and its matches

pub mod compiler;
pub mod escape;
pub mod matcher;

pub use compiler::{build_pattern_source, compile_phrase};
pub use escape::escape_char;
pub use matcher::{CompiledPattern, PatternMatch};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
