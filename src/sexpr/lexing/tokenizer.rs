//! Table-driven tokenizer
//!
//! Scans the input left to right. At each position the pattern table's
//! combined matcher picks the earliest-declared pattern that matches there and
//! the tokenizer emits a token with the matched text. When nothing matches,
//! exactly one token of the table's FAIL kind (with empty text) is emitted and
//! scanning stops; the stream then does not cover the rest of the input.
//!
//! The tokenizer never drops a matched category. Callers filter what they do
//! not care about (the s-expression scanner drops `WHITESPACE`).

use super::pattern_table::{PatternKind, PatternTable, ScanFailure};
use super::token::{Token, TokenStream};

/// Characters of input shown in scanner failure logs
const CONTEXT_CHARS: usize = 10;

/// Tokenize `input` with `table`, collecting into a [`TokenStream`]
pub fn tokenize<'a, K: PatternKind>(table: &PatternTable<K>, input: &'a str) -> TokenStream<'a, K> {
    table.tokens(input).collect()
}

impl<K: PatternKind> PatternTable<K> {
    /// Tokenize `input`, see [`tokenize`]
    pub fn tokenize<'a>(&self, input: &'a str) -> TokenStream<'a, K> {
        tokenize(self, input)
    }

    /// Lazily tokenize `input`, one token per `next()`
    pub fn tokens<'t, 'a>(&'t self, input: &'a str) -> Tokens<'t, 'a, K> {
        Tokens {
            table: self,
            input,
            offset: 0,
            failed: false,
        }
    }
}

/// Lazy token iterator returned by [`PatternTable::tokens`]
pub struct Tokens<'t, 'a, K> {
    table: &'t PatternTable<K>,
    input: &'a str,
    offset: usize,
    failed: bool,
}

impl<'t, 'a, K> Tokens<'t, 'a, K> {
    /// Byte offset of the next token
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl<'t, 'a, K: PatternKind> Iterator for Tokens<'t, 'a, K> {
    type Item = Token<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.input.len() {
            return None;
        }

        match self.table.match_at(self.input, self.offset) {
            Ok(token) => {
                self.offset += token.text.len();
                Some(token)
            }
            Err(failure) => {
                let context = context_at(self.input, self.offset);
                match failure {
                    ScanFailure::ZeroWidth => tracing::debug!(
                        offset = self.offset,
                        context,
                        "matcher found a zero-length string, scanner failed"
                    ),
                    ScanFailure::Skipped => tracing::debug!(
                        offset = self.offset,
                        context,
                        "matcher skipped some characters, scanner failed"
                    ),
                    ScanFailure::NoMatch => tracing::debug!(
                        offset = self.offset,
                        context,
                        "no matching token found, scanner failed"
                    ),
                }
                self.failed = true;
                Some(Token::new(self.table.fail_kind().clone(), ""))
            }
        }
    }
}

/// Up to `CONTEXT_CHARS` characters of `input` starting at byte `offset`
fn context_at(input: &str, offset: usize) -> &str {
    let rest = input.get(offset..).unwrap_or("");
    match rest.char_indices().nth(CONTEXT_CHARS) {
        Some((end, _)) => &rest[..end],
        None => rest,
    }
}
