//! Compile-time s-expression lexer
//!
//! The same four categories as the s-expression pattern table, generated by
//! logos instead of interpreted from the table. logos resolves overlaps by
//! longest match rather than declaration order; the s-expression patterns are
//! disjoint so both lexers produce identical streams, which the tests check.

use logos::Logos;

use super::sexpr_patterns::{SexprPattern, SexprTokens};
use super::token::Token;

/// Raw tokens recognised by logos
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken {
    #[token("(")]
    Open,

    #[token(")")]
    Close,

    #[regex(r"[a-zA-Z0-9_]+")]
    Word,

    #[regex(r"[ \t\n\x0B\f\r]+")]
    Whitespace,
}

impl RawToken {
    pub fn kind(self) -> SexprPattern {
        match self {
            RawToken::Open => SexprPattern::Open,
            RawToken::Close => SexprPattern::Close,
            RawToken::Word => SexprPattern::Word,
            RawToken::Whitespace => SexprPattern::Whitespace,
        }
    }
}

/// Tokenize with logos, keeping whitespace. Ends with a FAIL token on error.
pub fn tokenize(input: &str) -> SexprTokens<'_> {
    let mut lexer = RawToken::lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(raw) => tokens.push(Token::new(raw.kind(), lexer.slice())),
            Err(()) => {
                tracing::debug!(
                    offset = lexer.span().start,
                    context = lexer.slice(),
                    "logos lexer found no matching token"
                );
                tokens.push(Token::new(SexprPattern::Fail, ""));
                break;
            }
        }
    }

    tokens.into_iter().collect()
}

/// Tokenize with logos and drop whitespace
pub fn scan(input: &str) -> SexprTokens<'_> {
    tokenize(input).filter(|token| token.kind != SexprPattern::Whitespace)
}
