use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::error::PatternError;

/// Matched sub-range within a symbol name (not a file position).
///
/// `start` is the zero-based byte offset of the first match, `end` is
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// A search pattern, compiled once per query.
///
/// Matching is case-insensitive and unanchored: a name matches if the
/// pattern matches anywhere within it.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError {
                pattern: pattern.to_owned(),
                source,
            })?;
        Ok(Self {
            regex,
        })
    }

    /// First match of the pattern within `name`, if any.
    pub fn find(
        &self,
        name: &str,
    ) -> Option<MatchSpan> {
        self.regex.find(name).map(|found| MatchSpan {
            start: found.start(),
            end: found.end(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src/query/pattern_tests.rs"]
mod tests;
