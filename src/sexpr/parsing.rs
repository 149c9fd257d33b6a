//! Parsing module for s-expressions
//!
//! Turns the whitespace-free token stream from [`scan`] into a single
//! [`Value`].
//!
//! ## Independent Parser Implementations
//!
//! - **Descent**: hand-written recursive descent over the persistent token
//!   list (descent/). Each production either declines, succeeds with the
//!   remaining tokens, or fails.
//! - **Combinator**: the same grammar written with chumsky (combinator/).
//!
//! Both accept exactly the same token streams and build equal trees. The
//! descent parser is the default and the one whose failure causes are
//! documented in [`ParseError`].
//!
//! ## Failure
//!
//! [`parse_sexpr`] and [`parse_top_level`] report failure as `None`; the
//! cause is logged at debug level. The `try_*` variants return it.

pub mod combinator;
pub mod descent;

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::sexpr::ast::Value;
use crate::sexpr::lexing::{scan, SexprPattern, SexprTokens};

/// Why a token stream is not exactly one value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no tokens to parse")]
    EmptyInput,
    #[error("the scanner failed: the input contains text no pattern matches")]
    LexFailure,
    #[error("unexpected {kind} token {text:?}")]
    UnexpectedToken { kind: SexprPattern, text: String },
    #[error("unterminated s-expression: tokens ran out before the closing parenthesis")]
    Unterminated,
    #[error("{remaining} token(s) left after the end of the value")]
    TrailingTokens { remaining: usize },
    #[error("s-expressions nest deeper than {max_depth}")]
    TooDeep { max_depth: usize },
}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest s-expression nesting accepted; `None` is unbounded
    pub max_depth: Option<usize>,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Which parser implementation to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Parser {
    #[default]
    Descent,
    Combinator,
}

impl Parser {
    pub const ALL: [Parser; 2] = [Parser::Descent, Parser::Combinator];

    pub fn name(self) -> &'static str {
        match self {
            Parser::Descent => "descent",
            Parser::Combinator => "combinator",
        }
    }

    /// Parse source text with default options
    pub fn parse(self, input: &str) -> Option<Value> {
        logged(self.try_parse(input, &ParseOptions::default()))
    }

    pub fn try_parse(self, input: &str, options: &ParseOptions) -> Result<Value, ParseError> {
        self.try_parse_tokens(&scan(input), options)
    }

    /// Parse an already scanned (whitespace-free) token stream
    pub fn try_parse_tokens(
        self,
        tokens: &SexprTokens<'_>,
        options: &ParseOptions,
    ) -> Result<Value, ParseError> {
        match self {
            Parser::Descent => descent::parse_tokens(tokens, options),
            Parser::Combinator => combinator::parse_tokens(tokens, options),
        }
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parser {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parser::ALL
            .into_iter()
            .find(|parser| parser.name() == s)
            .ok_or_else(|| format!("Unknown parser '{}'. Expected: descent, combinator", s))
    }
}

/// Scan and parse source text: `Some` only if it is exactly one value
pub fn parse_sexpr(input: &str) -> Option<Value> {
    Parser::default().parse(input)
}

/// Parse a scanned token stream: `Some` only if it is exactly one value
pub fn parse_top_level(tokens: &SexprTokens<'_>) -> Option<Value> {
    logged(try_parse_tokens(tokens, &ParseOptions::default()))
}

/// Scan and parse source text, reporting why it failed
pub fn try_parse(input: &str) -> Result<Value, ParseError> {
    Parser::default().try_parse(input, &ParseOptions::default())
}

pub fn try_parse_tokens(
    tokens: &SexprTokens<'_>,
    options: &ParseOptions,
) -> Result<Value, ParseError> {
    Parser::default().try_parse_tokens(tokens, options)
}

fn logged(result: Result<Value, ParseError>) -> Option<Value> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "parser failure");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexpr::testing::{sexpr, word};

    #[test]
    fn test_parse_sexpr_example() {
        let value = parse_sexpr("(add (multiply 3 4) 5)").unwrap();
        assert_eq!(
            value,
            sexpr(vec![
                word("add"),
                sexpr(vec![word("multiply"), word("3"), word("4")]),
                word("5"),
            ])
        );
    }

    #[test]
    fn test_absent_on_failure() {
        assert_eq!(parse_sexpr(""), None);
        assert_eq!(parse_sexpr("a b"), None);
        assert_eq!(parse_top_level(&scan("(")), None);
    }

    #[test]
    fn test_try_parse_reports_cause() {
        assert_eq!(try_parse("   "), Err(ParseError::EmptyInput));
        assert_eq!(try_parse("(a b"), Err(ParseError::Unterminated));
        assert_eq!(try_parse("a b c"), Err(ParseError::TrailingTokens { remaining: 2 }));
        assert_eq!(try_parse("(a - b)"), Err(ParseError::LexFailure));
    }

    #[test]
    fn test_parser_names() {
        assert_eq!("descent".parse::<Parser>(), Ok(Parser::Descent));
        assert_eq!("combinator".parse::<Parser>(), Ok(Parser::Combinator));
        assert!("linebased".parse::<Parser>().is_err());
        assert_eq!(Parser::default(), Parser::Descent);
    }

    #[test]
    fn test_max_depth_option() {
        let options = ParseOptions::new().with_max_depth(2);
        for parser in Parser::ALL {
            assert!(parser.try_parse("((a))", &options).is_ok());
            assert_eq!(
                parser.try_parse("(((a)))", &options),
                Err(ParseError::TooDeep { max_depth: 2 })
            );
        }
    }
}
