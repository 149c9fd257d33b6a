//! S-expression values
//!
//! ```text
//! Value ::= Word | Sexpr
//! Sexpr ::= ( Value* )
//! ```
//!
//! Values are immutable. Words hold reference-counted text and s-expressions
//! hold a persistent list of children, so cloning any value is O(1).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;
use thiserror::Error;

use crate::sexpr::lexing::SexprPattern;
use crate::sexpr::list::{Iter, List};

/// Full-string form of the WORD pattern
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^(?:{})$", SexprPattern::Word.pattern())).expect("WORD pattern is valid")
});

/// Rejected value construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("{0:?} is not a word: words are one or more ASCII letters, digits or underscores")]
    InvalidWord(String),
}

/// Which variant a [`Value`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Word,
    Sexpr,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Word => f.write_str("word"),
            ValueKind::Sexpr => f.write_str("sexpr"),
        }
    }
}

/// An s-expression value
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Word(Word),
    Sexpr(Sexpr),
}

/// An atom: the text of one WORD token, never empty
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Rc<str>,
}

/// A parenthesized, ordered, possibly empty list of values
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Sexpr {
    children: List<Value>,
}

impl Word {
    /// A word, if `text` matches the WORD pattern in full
    pub fn new(text: &str) -> Result<Self, ValueError> {
        if WORD_REGEX.is_match(text) {
            Ok(Word::from_token(text))
        } else {
            Err(ValueError::InvalidWord(text.to_string()))
        }
    }

    /// A word from the text of a WORD token, which is valid by construction
    pub(crate) fn from_token(text: &str) -> Self {
        Word {
            text: Rc::from(text),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Sexpr {
    pub fn new<I: IntoIterator<Item = Value>>(children: I) -> Self {
        children.into_iter().collect()
    }

    pub fn children(&self) -> &List<Value> {
        &self.children
    }

    /// The child at `index`, or `None` when out of range
    pub fn nth(&self, index: usize) -> Option<&Value> {
        self.children.nth(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Value> {
        self.children.iter()
    }
}

impl FromIterator<Value> for Sexpr {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sexpr {
            children: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Sexpr {
    type Item = &'a Value;
    type IntoIter = Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Value {
    /// A word value, validated against the WORD pattern
    pub fn word(text: &str) -> Result<Self, ValueError> {
        Word::new(text).map(Value::Word)
    }

    pub fn sexpr<I: IntoIterator<Item = Value>>(children: I) -> Self {
        Value::Sexpr(Sexpr::new(children))
    }

    /// Dispatch on the variant: exactly one of the handlers runs.
    ///
    /// ```ignore
    /// let arity = value.visit(|_word| 0, |sexpr| sexpr.len());
    /// ```
    pub fn visit<R>(
        &self,
        on_word: impl FnOnce(&Word) -> R,
        on_sexpr: impl FnOnce(&Sexpr) -> R,
    ) -> R {
        match self {
            Value::Word(word) => on_word(word),
            Value::Sexpr(sexpr) => on_sexpr(sexpr),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Word(_) => ValueKind::Word,
            Value::Sexpr(_) => ValueKind::Sexpr,
        }
    }

    pub fn as_word(&self) -> Option<&Word> {
        match self {
            Value::Word(word) => Some(word),
            Value::Sexpr(_) => None,
        }
    }

    pub fn as_sexpr(&self) -> Option<&Sexpr> {
        match self {
            Value::Word(_) => None,
            Value::Sexpr(sexpr) => Some(sexpr),
        }
    }

    pub fn is_word(&self) -> bool {
        self.kind() == ValueKind::Word
    }

    pub fn is_sexpr(&self) -> bool {
        self.kind() == ValueKind::Sexpr
    }

    /// Nesting depth: 0 for a word, 1 + the deepest child for an s-expression
    pub fn depth(&self) -> usize {
        match self {
            Value::Word(_) => 0,
            Value::Sexpr(sexpr) => 1 + sexpr.iter().map(Value::depth).max().unwrap_or(0),
        }
    }
}

impl From<Word> for Value {
    fn from(word: Word) -> Self {
        Value::Word(word)
    }
}

impl From<Sexpr> for Value {
    fn from(sexpr: Sexpr) -> Self {
        Value::Sexpr(sexpr)
    }
}

// Canonical rendering. Reparses to an equal tree; original spacing is not kept.

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("( ")?;
        for (index, child) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", child)?;
        }
        f.write_str(" )")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Word(word) => fmt::Display::fmt(word, f),
            Value::Sexpr(sexpr) => fmt::Display::fmt(sexpr, f),
        }
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Word").field(&self.as_str()).finish()
    }
}

impl fmt::Debug for Sexpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Sexpr")?;
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Word(word) => fmt::Debug::fmt(word, f),
            Value::Sexpr(sexpr) => fmt::Debug::fmt(sexpr, f),
        }
    }
}
