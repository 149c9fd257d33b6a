//! # sexpr
//!
//! A table-driven tokenizer and a parser for s-expressions.
//!
//! ```rust,ignore
//! let value = sexpr::parse_sexpr("(add (multiply 3 4) 5)").unwrap();
//! assert_eq!(value.to_string(), "( add ( multiply 3 4 ) 5 )");
//! ```
//!
//! The tokenizer is generic: any ordered table of `(kind, regex)` pairs plus a
//! failure sentinel drives it (see [`sexpr::lexing`]). The s-expression grammar
//! is one such table.
//!
//! ## Testing
//!
//! For testing helpers and the fluent assertion API, see the
//! [testing module](sexpr::testing).

pub mod sexpr;

pub use sexpr::ast::{Sexpr, Value, ValueError, Word};
pub use sexpr::lexing::{scan, PatternTable, SexprPattern, Token, TokenStream};
pub use sexpr::parsing::{
    parse_sexpr, parse_top_level, try_parse, ParseError, ParseOptions, Parser,
};
