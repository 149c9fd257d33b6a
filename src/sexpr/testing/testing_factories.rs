//! Factories for expected values and tokens

use crate::sexpr::ast::Value;
use crate::sexpr::lexing::{PatternKind, SexprPattern, SexprToken, TokenStream};

/// A word value. Panics if `text` is not a valid word.
pub fn word(text: &str) -> Value {
    Value::word(text).unwrap_or_else(|err| panic!("invalid test word: {}", err))
}

pub fn sexpr(children: Vec<Value>) -> Value {
    Value::sexpr(children)
}

pub fn token(kind: SexprPattern, text: &str) -> SexprToken<'_> {
    SexprToken::new(kind, text)
}

/// The kinds of a token stream, in order
pub fn kinds<K: PatternKind>(tokens: &TokenStream<'_, K>) -> Vec<K> {
    tokens.iter().map(|token| token.kind.clone()).collect()
}

/// The texts of a token stream, in order
pub fn texts<'a, K>(tokens: &TokenStream<'a, K>) -> Vec<&'a str> {
    tokens.iter().map(|token| token.text).collect()
}
