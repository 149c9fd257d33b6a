//! Combinator parser
//!
//! The s-expression grammar written with chumsky. It consumes the same
//! scanned tokens as the descent parser and accepts exactly the same streams.
//!
//! chumsky reports a set of errors with token indices; [`parse_tokens`] maps
//! the first one onto [`ParseError`]. The depth limit is enforced before
//! chumsky runs, so the grammar never recurses past it.

use chumsky::prelude::*;

use crate::sexpr::ast::{Value, Word};
use crate::sexpr::lexing::{SexprPattern, SexprToken, SexprTokens};

use super::{ParseError, ParseOptions};

/// Type alias for parser error
type ParserError<'a> = Simple<SexprToken<'a>>;

/// Match one token of the given kind
fn kind<'a>(
    expected: SexprPattern,
) -> impl Parser<SexprToken<'a>, SexprToken<'a>, Error = ParserError<'a>> + Clone {
    filter(move |token: &SexprToken<'a>| token.kind == expected)
}

/// Parse a single value
pub fn value<'a>() -> impl Parser<SexprToken<'a>, Value, Error = ParserError<'a>> + Clone {
    recursive(|value| {
        let word = kind(SexprPattern::Word)
            .map(|token: SexprToken<'a>| Value::Word(Word::from_token(token.text)));

        let sexpr = value
            .repeated()
            .delimited_by(kind(SexprPattern::Open), kind(SexprPattern::Close))
            .map(Value::sexpr);

        sexpr.or(word)
    })
}

/// Parse a single value that spans the whole input
pub fn top_level<'a>() -> impl Parser<SexprToken<'a>, Value, Error = ParserError<'a>> + Clone {
    value().then_ignore(end())
}

/// Parse a whole token stream as exactly one value
pub fn parse_tokens(
    tokens: &SexprTokens<'_>,
    options: &ParseOptions,
) -> Result<Value, ParseError> {
    let input: Vec<SexprToken<'_>> = tokens.iter().copied().collect();
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    if let Some(max_depth) = options.max_depth {
        check_depth(&input, max_depth)?;
    }
    let total = input.len();

    top_level().parse(input).map_err(|errors| {
        tracing::debug!(count = errors.len(), "combinator parser errors");
        errors
            .into_iter()
            .next()
            .map(|error| classify(&error, total))
            .unwrap_or(ParseError::Unterminated)
    })
}

/// Walk the tokens of the first value and fail once its nesting passes `max_depth`.
///
/// Stops where the first value ends (or cannot continue), so it reports
/// `TooDeep` for exactly the inputs the descent parser does.
fn check_depth(tokens: &[SexprToken<'_>], max_depth: usize) -> Result<(), ParseError> {
    let mut depth = 0usize;
    for token in tokens {
        match token.kind {
            SexprPattern::Open => {
                depth += 1;
                if depth > max_depth {
                    return Err(ParseError::TooDeep { max_depth });
                }
            }
            SexprPattern::Close if depth > 1 => depth -= 1,
            SexprPattern::Word if depth > 0 => {}
            _ => break,
        }
    }
    Ok(())
}

fn classify(error: &ParserError<'_>, total: usize) -> ParseError {
    match error.found() {
        None => ParseError::Unterminated,
        Some(token) if token.kind == SexprPattern::Fail => ParseError::LexFailure,
        // only `end()` expects the end of input
        Some(_) if error.expected().any(|expected| expected.is_none()) => {
            ParseError::TrailingTokens {
                remaining: total.saturating_sub(error.span().start),
            }
        }
        Some(token) => ParseError::UnexpectedToken {
            kind: token.kind,
            text: token.text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexpr::lexing::scan;
    use crate::sexpr::testing::{sexpr, word};

    fn top(input: &str) -> Result<Value, ParseError> {
        parse_tokens(&scan(input), &ParseOptions::default())
    }

    #[test]
    fn test_value_parser_on_tokens() {
        let tokens: Vec<SexprToken<'_>> = scan("(a (b) ())").iter().copied().collect();
        let result = value().parse(tokens).unwrap();
        assert_eq!(
            result,
            sexpr(vec![word("a"), sexpr(vec![word("b")]), sexpr(vec![])])
        );
    }

    #[test]
    fn test_top_level_word() {
        assert_eq!(top("hello"), Ok(word("hello")));
    }

    #[test]
    fn test_rejections() {
        assert_eq!(top(""), Err(ParseError::EmptyInput));
        assert_eq!(top("(a"), Err(ParseError::Unterminated));
        assert_eq!(top("(a %)"), Err(ParseError::LexFailure));
        assert!(top(")").is_err());
        assert!(top("a b").is_err());
        assert!(top("(a))").is_err());
    }

    #[test]
    fn test_depth_check_stops_at_end_of_first_value() {
        let tokens: Vec<SexprToken<'_>> = scan("(a) ((((b))))").iter().copied().collect();
        assert_eq!(check_depth(&tokens, 1), Ok(()));
        let tokens: Vec<SexprToken<'_>> = scan("(a ((b)))").iter().copied().collect();
        assert_eq!(check_depth(&tokens, 2), Err(ParseError::TooDeep { max_depth: 2 }));
    }

    #[test]
    fn test_depth_limit() {
        let options = ParseOptions::new().with_max_depth(1);
        assert!(parse_tokens(&scan("(a)"), &options).is_ok());
        assert_eq!(
            parse_tokens(&scan("((a))"), &options),
            Err(ParseError::TooDeep { max_depth: 1 })
        );
    }
}
