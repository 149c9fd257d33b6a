//! Pattern Table
//!
//! An ordered table of named lexical categories, each described by a regular
//! expression. The table is the only configuration the tokenizer needs, so the
//! same engine lexes any small token-based grammar.
//!
//! ## Priority
//!
//! All patterns are combined into a single alternation, in declaration order:
//!
//! ```text
//! OPEN        \(
//! CLOSE       \)                  =>   (\()|(\))|([a-zA-Z0-9_]+)|([ \t\n\x0B\f\r]+)
//! WORD        [a-zA-Z0-9_]+
//! WHITESPACE  [ \t\n\x0B\f\r]+
//! FAIL        <empty>
//! ```
//!
//! The regex engine uses leftmost-first semantics, so among the patterns that
//! match at a given position the one declared first wins, no matter how many
//! characters a later pattern would have matched.
//!
//! ## The FAIL entry
//!
//! Exactly one entry must have an empty pattern. It is never part of the
//! combined matcher: the tokenizer emits it, with empty text, when nothing else
//! matches.

use regex::Regex;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

use super::token::Token;

/// A lexical category in a pattern table.
///
/// Implemented by the closed `SexprPattern` enum and by [`NamedKind`] for
/// tables loaded at runtime.
pub trait PatternKind: Clone + Eq + fmt::Debug {
    /// Symbolic name, unique within a table (e.g. `"WORD"`)
    fn name(&self) -> &str;
}

/// A kind identified only by its name, for tables built at runtime.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NamedKind(Rc<str>);

impl NamedKind {
    pub fn new(name: &str) -> Self {
        NamedKind(Rc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PatternKind for NamedKind {
    fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NamedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for NamedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for NamedKind {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Errors raised while building a pattern table
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("regular expression ({pattern}) for ({name}) is not valid: {source}")]
    InvalidPattern {
        name: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("regular expression for ({name}) matches the empty string")]
    ZeroWidth { name: String },

    #[error("pattern table has no FAIL entry (an entry with an empty pattern)")]
    MissingFail,

    #[error("pattern table has more than one entry with an empty pattern: ({first}) and ({second})")]
    MultipleFail { first: String, second: String },

    #[error("pattern table declares ({name}) more than once")]
    DuplicateKind { name: String },

    #[error("pattern table has no entries besides FAIL")]
    NoPatterns,

    #[error("combined regular expression is not valid: {0}")]
    Combined(#[source] regex::Error),

    #[error("invalid YAML pattern table: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON pattern table: {0}")]
    Json(#[from] serde_json::Error),
}

/// One declared entry: a kind and its regular expression
#[derive(Debug, Clone)]
pub struct PatternEntry<K> {
    kind: K,
    pattern: String,
}

impl<K> PatternEntry<K> {
    pub fn kind(&self) -> &K {
        &self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_fail(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Why no token could be produced at a scan position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanFailure {
    /// No pattern matches anywhere in the rest of the input
    NoMatch,
    /// The nearest match starts after the current position
    Skipped,
    /// The winning pattern matched zero characters
    ZeroWidth,
}

/// An ordered, compiled pattern table.
#[derive(Debug)]
pub struct PatternTable<K> {
    entries: Vec<PatternEntry<K>>,
    fail: K,
    combined: Regex,
    /// Capture group of each matchable entry in the combined regex, in declaration order
    groups: Vec<(usize, K)>,
}

impl<K: PatternKind> PatternTable<K> {
    /// Build a table from `(kind, pattern)` pairs in priority order.
    ///
    /// Every pattern is compiled on its own first so that an invalid one is
    /// reported by name.
    pub fn new<I, S>(entries: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        let entries: Vec<PatternEntry<K>> = entries
            .into_iter()
            .map(|(kind, pattern)| PatternEntry {
                kind,
                pattern: pattern.into(),
            })
            .collect();

        for (index, entry) in entries.iter().enumerate() {
            let name = entry.kind.name();
            if entries[..index].iter().any(|e| e.kind.name() == name) {
                return Err(PatternError::DuplicateKind {
                    name: name.to_string(),
                });
            }
        }

        let mut fail: Option<&PatternEntry<K>> = None;
        for entry in entries.iter().filter(|e| e.is_fail()) {
            if let Some(first) = fail {
                return Err(PatternError::MultipleFail {
                    first: first.kind.name().to_string(),
                    second: entry.kind.name().to_string(),
                });
            }
            fail = Some(entry);
        }
        let fail = fail.ok_or(PatternError::MissingFail)?.kind.clone();

        let mut alternatives = Vec::new();
        let mut groups = Vec::new();
        let mut next_group = 1;
        for entry in entries.iter().filter(|e| !e.is_fail()) {
            let regex = Regex::new(&entry.pattern).map_err(|source| PatternError::InvalidPattern {
                name: entry.kind.name().to_string(),
                pattern: entry.pattern.clone(),
                source,
            })?;
            if regex.is_match("") {
                return Err(PatternError::ZeroWidth {
                    name: entry.kind.name().to_string(),
                });
            }
            groups.push((next_group, entry.kind.clone()));
            // the wrapping group replaces group 0; inner groups follow it
            next_group += regex.captures_len();
            alternatives.push(format!("({})", entry.pattern));
        }

        if alternatives.is_empty() {
            return Err(PatternError::NoPatterns);
        }

        let combined = Regex::new(&alternatives.join("|")).map_err(PatternError::Combined)?;
        tracing::trace!(
            patterns = groups.len(),
            combined = combined.as_str(),
            "compiled pattern table"
        );

        Ok(PatternTable {
            entries,
            fail,
            combined,
            groups,
        })
    }

    /// All entries, FAIL included, in declaration order
    pub fn entries(&self) -> &[PatternEntry<K>] {
        &self.entries
    }

    /// The kind emitted when nothing matches
    pub fn fail_kind(&self) -> &K {
        &self.fail
    }

    /// Look up a kind by its symbolic name
    pub fn kind(&self, name: &str) -> Option<&K> {
        self.entries
            .iter()
            .map(|e| &e.kind)
            .find(|kind| kind.name() == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Match the earliest-declared pattern that matches exactly at `offset`.
    pub(crate) fn match_at<'a>(
        &self,
        input: &'a str,
        offset: usize,
    ) -> Result<Token<'a, K>, ScanFailure> {
        let captures = self
            .combined
            .captures_at(input, offset)
            .ok_or(ScanFailure::NoMatch)?;
        let whole = captures.get(0).ok_or(ScanFailure::NoMatch)?;

        if whole.start() > offset {
            return Err(ScanFailure::Skipped);
        }
        if whole.as_str().is_empty() {
            return Err(ScanFailure::ZeroWidth);
        }

        self.groups
            .iter()
            .find(|(group, _)| captures.get(*group).is_some())
            .map(|(_, kind)| Token::new(kind.clone(), whole.as_str()))
            .ok_or(ScanFailure::NoMatch)
    }
}
