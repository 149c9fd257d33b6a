//! Lexing
//!
//! A generic, table-driven tokenizer and the s-expression table built on it.
//!
//! The engine knows nothing about s-expressions: [`PatternTable`] takes any
//! ordered set of `(kind, regex)` pairs, and [`tokenize`](tokenizer::tokenize)
//! turns text into a [`TokenStream`] with it. The s-expression grammar is one
//! such table ([`SexprPattern`]); [`scan`] is the parser's entry point.
//!
//! [`logos_lexer`] lexes the same grammar with a compile-time lexer. Both
//! designs are kept side by side and compared in tests.

pub mod loader;
pub mod logos_lexer;
pub mod pattern_table;
pub mod sexpr_patterns;
pub mod token;
pub mod tokenizer;

pub use loader::{load_table, LoadError, PatternSpec, PatternTableSpec};
pub use pattern_table::{NamedKind, PatternEntry, PatternError, PatternKind, PatternTable};
pub use sexpr_patterns::{scan, SexprPattern, SexprToken, SexprTokens};
pub use token::{Token, TokenStream};
pub use tokenizer::{tokenize, Tokens};
