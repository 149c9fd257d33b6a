//! Recursive descent parser
//!
//! ```text
//! Value ::= Sexpr | Word
//! Sexpr ::= OPEN Value* CLOSE
//! ```
//!
//! Each production looks at the head of a token list and either declines
//! (`Ok(None)`), or consumes a prefix and returns the value together with the
//! remaining tokens. The token list is persistent, so "the remaining tokens"
//! is a shared tail and nothing is copied.
//!
//! Productions are tried in order. Their leading tokens are disjoint (OPEN
//! for an s-expression, WORD for a word), so at most one applies at any
//! position and the order never changes the result.
//!
//! Children of one s-expression are read in a loop; only nesting recurses.

use crate::sexpr::ast::{Value, Word};
use crate::sexpr::lexing::{SexprPattern, SexprTokens};

use super::{ParseError, ParseOptions};

/// A production's result and the tokens it did not consume
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a, T> {
    pub production: T,
    pub tokens: SexprTokens<'a>,
}

type ProductionResult<'a> = Result<Option<Parsed<'a, Value>>, ParseError>;

type Production = for<'a> fn(&SexprTokens<'a>, Depth) -> ProductionResult<'a>;

const PRODUCTIONS: [Production; 2] = [make_sexpr, make_word];

/// Current nesting level against the configured limit
#[derive(Debug, Clone, Copy)]
struct Depth {
    level: usize,
    max: Option<usize>,
}

impl Depth {
    fn top(options: &ParseOptions) -> Self {
        Depth {
            level: 0,
            max: options.max_depth,
        }
    }

    fn enter(self) -> Result<Depth, ParseError> {
        let level = self.level + 1;
        match self.max {
            Some(max_depth) if level > max_depth => Err(ParseError::TooDeep { max_depth }),
            _ => Ok(Depth { level, ..self }),
        }
    }
}

/// Parse a whole token stream as exactly one value
pub fn parse_tokens(
    tokens: &SexprTokens<'_>,
    options: &ParseOptions,
) -> Result<Value, ParseError> {
    let parsed = parse_prefix(tokens, options)?;
    if parsed.tokens.is_empty() {
        return Ok(parsed.production);
    }
    if parsed.tokens.iter().any(|token| token.kind == SexprPattern::Fail) {
        return Err(ParseError::LexFailure);
    }
    let remaining = parsed.tokens.len();
    tracing::debug!(remaining, "tokens remain after the end of the value");
    Err(ParseError::TrailingTokens { remaining })
}

/// Parse one value from the front of `tokens`
pub fn parse_prefix<'a>(
    tokens: &SexprTokens<'a>,
    options: &ParseOptions,
) -> Result<Parsed<'a, Value>, ParseError> {
    parse_value(tokens, Depth::top(options))
}

fn parse_value<'a>(tokens: &SexprTokens<'a>, depth: Depth) -> Result<Parsed<'a, Value>, ParseError> {
    for production in PRODUCTIONS {
        if let Some(parsed) = production(tokens, depth)? {
            return Ok(parsed);
        }
    }
    Err(no_production(tokens))
}

/// The failure when no production applies at the head of `tokens`
fn no_production(tokens: &SexprTokens<'_>) -> ParseError {
    match tokens.head() {
        None => ParseError::EmptyInput,
        Some(token) if token.kind == SexprPattern::Fail => ParseError::LexFailure,
        Some(token) => ParseError::UnexpectedToken {
            kind: token.kind,
            text: token.text.to_string(),
        },
    }
}

fn make_sexpr<'a>(tokens: &SexprTokens<'a>, depth: Depth) -> ProductionResult<'a> {
    let rest = match tokens.uncons() {
        Some((token, rest)) if token.kind == SexprPattern::Open => rest,
        _ => return Ok(None),
    };
    let depth = depth.enter()?;

    let mut children = Vec::new();
    let mut rest = rest.clone();
    loop {
        let (token, after) = rest.uncons().ok_or(ParseError::Unterminated)?;
        if token.kind == SexprPattern::Close {
            return Ok(Some(Parsed {
                production: Value::sexpr(children),
                tokens: after.clone(),
            }));
        }
        let child = parse_value(&rest, depth)?;
        children.push(child.production);
        rest = child.tokens;
    }
}

fn make_word<'a>(tokens: &SexprTokens<'a>, _depth: Depth) -> ProductionResult<'a> {
    Ok(match tokens.uncons() {
        Some((token, rest)) if token.kind == SexprPattern::Word => Some(Parsed {
            production: Value::Word(Word::from_token(token.text)),
            tokens: rest.clone(),
        }),
        _ => None,
    })
}
