//! Tokens produced by the tokenizer

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

use super::pattern_table::PatternKind;
use crate::sexpr::list::List;

/// A classified slice of the input.
///
/// `kind` is the pattern table entry that matched, `text` the matched
/// substring. The synthetic failure token carries an empty `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a, K> {
    pub kind: K,
    pub text: &'a str,
}

impl<'a, K> Token<'a, K> {
    pub fn new(kind: K, text: &'a str) -> Self {
        Token { kind, text }
    }
}

/// Ordered, immutable token sequence, read by head/tail decomposition.
pub type TokenStream<'a, K> = List<Token<'a, K>>;

impl<K: PatternKind> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}: {:?})", self.kind.name(), self.text)
    }
}

impl<K: PatternKind> Serialize for Token<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Token", 2)?;
        state.serialize_field("kind", self.kind.name())?;
        state.serialize_field("text", self.text)?;
        state.end()
    }
}
