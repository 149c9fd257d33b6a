//! The s-expression pattern table
//!
//! Declaration order is the match priority. The four real patterns are
//! disjoint, so for this table the order never decides between two matches;
//! it matters for the tokenizer contract, not for this grammar.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use super::pattern_table::{PatternKind, PatternTable};
use super::token::{Token, TokenStream};

/// Lexical categories of the s-expression grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SexprPattern {
    Open,
    Close,
    /// One or more ASCII letters, digits or underscores
    Word,
    /// Space, tab, newline, vertical tab, form feed or carriage return
    Whitespace,
    /// Emitted when the scanner fails
    Fail,
}

/// Token of the s-expression grammar
pub type SexprToken<'a> = Token<'a, SexprPattern>;

/// Token stream of the s-expression grammar
pub type SexprTokens<'a> = TokenStream<'a, SexprPattern>;

static SEXPR_TABLE: Lazy<PatternTable<SexprPattern>> = Lazy::new(|| {
    PatternTable::new(SexprPattern::ALL.iter().map(|kind| (*kind, kind.pattern())))
        .expect("s-expression pattern table is valid")
});

impl SexprPattern {
    /// Every kind, in declaration (priority) order
    pub const ALL: [SexprPattern; 5] = [
        SexprPattern::Open,
        SexprPattern::Close,
        SexprPattern::Word,
        SexprPattern::Whitespace,
        SexprPattern::Fail,
    ];

    pub fn pattern(self) -> &'static str {
        match self {
            SexprPattern::Open => r"\(",
            SexprPattern::Close => r"\)",
            SexprPattern::Word => r"[a-zA-Z0-9_]+",
            SexprPattern::Whitespace => r"[ \t\n\x0B\f\r]+",
            SexprPattern::Fail => "",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SexprPattern::Open => "OPEN",
            SexprPattern::Close => "CLOSE",
            SexprPattern::Word => "WORD",
            SexprPattern::Whitespace => "WHITESPACE",
            SexprPattern::Fail => "FAIL",
        }
    }

    /// The compiled table, built on first use
    pub fn table() -> &'static PatternTable<SexprPattern> {
        &SEXPR_TABLE
    }
}

impl PatternKind for SexprPattern {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SexprPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tokenize s-expression source, keeping whitespace tokens
pub fn tokenize(input: &str) -> SexprTokens<'_> {
    SexprPattern::table().tokenize(input)
}

/// Tokenize s-expression source and drop whitespace tokens.
///
/// This is the parser's input.
pub fn scan(input: &str) -> SexprTokens<'_> {
    tokenize(input).filter(|token| token.kind != SexprPattern::Whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn anchored(kind: SexprPattern) -> Regex {
        Regex::new(&format!("^(?:{})$", kind.pattern())).unwrap()
    }

    #[test]
    fn test_basic_patterns() {
        let open = anchored(SexprPattern::Open);
        let close = anchored(SexprPattern::Close);
        let word = anchored(SexprPattern::Word);

        assert!(!open.is_match("["));
        assert!(!open.is_match(")"));
        assert!(open.is_match("("));

        assert!(!close.is_match("]"));
        assert!(!close.is_match("("));
        assert!(close.is_match(")"));

        assert!(word.is_match("hello"));
        assert!(word.is_match("27"));
        assert!(word.is_match("snake_case"));
        assert!(!word.is_match("kebab-case"));
        assert!(!word.is_match("h\u{e9}llo"));
        assert!(!word.is_match("\u{661}"));
        assert!(!close.is_match("27"));

        let whitespace = anchored(SexprPattern::Whitespace);
        assert!(whitespace.is_match(" \t\n\x0B\x0C\r"));
        assert!(!whitespace.is_match("\u{a0}"));
        assert!(!whitespace.is_match("\u{2003}"));
    }

    #[test]
    fn test_table_order_matches_declaration() {
        let kinds: Vec<SexprPattern> = SexprPattern::table()
            .entries()
            .iter()
            .map(|entry| *entry.kind())
            .collect();
        assert_eq!(kinds, SexprPattern::ALL.to_vec());
        assert_eq!(SexprPattern::table().fail_kind(), &SexprPattern::Fail);
    }

    #[test]
    fn test_tokenize_keeps_whitespace_and_scan_drops_it() {
        assert_eq!(tokenize("( a )").len(), 5);
        let kinds: Vec<SexprPattern> = scan("( a )").iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![SexprPattern::Open, SexprPattern::Word, SexprPattern::Close]
        );
    }

    #[test]
    fn test_scan_stops_at_unknown_character() {
        let tokens: Vec<SexprToken<'_>> = scan("(a - b)").iter().copied().collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(SexprPattern::Open, "("),
                Token::new(SexprPattern::Word, "a"),
                Token::new(SexprPattern::Fail, ""),
            ]
        );
    }

    #[test]
    fn test_scan_rejects_non_ascii() {
        let kinds: Vec<SexprPattern> = scan("a\u{a0}b").iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![SexprPattern::Word, SexprPattern::Fail]);

        let tokens: Vec<SexprToken<'_>> = scan("h\u{e9}llo").iter().copied().collect();
        assert_eq!(
            tokens,
            vec![
                Token::new(SexprPattern::Word, "h"),
                Token::new(SexprPattern::Fail, ""),
            ]
        );
    }

    #[test]
    fn test_kind_names() {
        let names: Vec<&str> = SexprPattern::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names, vec!["OPEN", "CLOSE", "WORD", "WHITESPACE", "FAIL"]);
        assert_eq!(serde_json::to_string(&SexprPattern::Whitespace).unwrap(), r#""WHITESPACE""#);
    }
}
