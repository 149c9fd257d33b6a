//! Tokenization tests for the pattern-table tokenizer
//!
//! Covers the s-expression table, a user-defined table built from an enum,
//! a table loaded from YAML, and agreement with the logos lexer.

use sexpr::sexpr::formats::tokens_to_simple;
use sexpr::sexpr::lexing::{
    load_table, logos_lexer, scan, tokenize, NamedKind, PatternKind, PatternTable, SexprPattern,
    Token,
};
use sexpr::sexpr::testing::factories::{kinds, texts};
use sexpr::sexpr::testing::token;

// ===== S-expression Table =====

#[test]
fn test_canonical_example_tokens() {
    let tokens: Vec<_> = scan("(add (multiply 3 4) 5)").iter().copied().collect();
    assert_eq!(
        tokens,
        vec![
            token(SexprPattern::Open, "("),
            token(SexprPattern::Word, "add"),
            token(SexprPattern::Open, "("),
            token(SexprPattern::Word, "multiply"),
            token(SexprPattern::Word, "3"),
            token(SexprPattern::Word, "4"),
            token(SexprPattern::Close, ")"),
            token(SexprPattern::Word, "5"),
            token(SexprPattern::Close, ")"),
        ]
    );
}

#[test]
fn test_empty_list_then_word() {
    let tokens = scan("(() hello)");
    assert_eq!(
        kinds(&tokens),
        vec![
            SexprPattern::Open,
            SexprPattern::Open,
            SexprPattern::Close,
            SexprPattern::Word,
            SexprPattern::Close,
        ]
    );
    assert_eq!(texts(&tokens), vec!["(", "(", ")", "hello", ")"]);
}

#[test]
fn test_tokens_cover_the_input() {
    let input = "  (a\n\t( b_2 ))  ";
    let joined: String = SexprPattern::table()
        .tokenize(input)
        .iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(joined, input);
}

#[test]
fn test_simple_rendering_with_whitespace() {
    insta::assert_snapshot!(tokens_to_simple(&SexprPattern::table().tokenize("(a 1)")), @r#"
    (OPEN: "(")
    (WORD: "a")
    (WHITESPACE: " ")
    (WORD: "1")
    (CLOSE: ")")
    "#);
}

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(scan("").is_empty());
    assert!(scan(" \n ").is_empty());
}

#[test]
fn test_failure_truncates_the_stream() {
    let tokens = scan("(a [b] c)");
    assert_eq!(texts(&tokens), vec!["(", "a", ""]);
    assert_eq!(tokens.iter().last().map(|t| t.kind), Some(SexprPattern::Fail));
}

// ===== User-defined Table =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Curly {
    OpenCurly,
    CloseCurly,
    Whitespace,
    Equals,
    Semicolon,
    Word,
    Fail,
}

impl PatternKind for Curly {
    fn name(&self) -> &str {
        match self {
            Curly::OpenCurly => "OPENCURLY",
            Curly::CloseCurly => "CLOSECURLY",
            Curly::Whitespace => "WHITESPACE",
            Curly::Equals => "EQUALS",
            Curly::Semicolon => "SEMICOLON",
            Curly::Word => "WORD",
            Curly::Fail => "FAIL",
        }
    }
}

fn curly_table() -> PatternTable<Curly> {
    PatternTable::new([
        (Curly::OpenCurly, r"\{"),
        (Curly::CloseCurly, r"\}"),
        (Curly::Whitespace, r"\s+"),
        (Curly::Equals, "="),
        (Curly::Semicolon, ";"),
        (Curly::Word, "[[:alnum:]]+"),
        (Curly::Fail, ""),
    ])
    .unwrap()
}

fn curly_tokens(input: &str) -> Vec<Token<'_, Curly>> {
    tokenize(&curly_table(), input)
        .filter(|t| t.kind != Curly::Whitespace)
        .iter()
        .copied()
        .collect()
}

#[test]
fn test_curly_table() {
    assert_eq!(
        curly_tokens("{ hello = fun; world=aw3some; }"),
        vec![
            Token::new(Curly::OpenCurly, "{"),
            Token::new(Curly::Word, "hello"),
            Token::new(Curly::Equals, "="),
            Token::new(Curly::Word, "fun"),
            Token::new(Curly::Semicolon, ";"),
            Token::new(Curly::Word, "world"),
            Token::new(Curly::Equals, "="),
            Token::new(Curly::Word, "aw3some"),
            Token::new(Curly::Semicolon, ";"),
            Token::new(Curly::CloseCurly, "}"),
        ]
    );
}

#[test]
fn test_curly_table_with_fail() {
    assert_eq!(
        curly_tokens("{ hello = fun; !!! world=aw3some; }"),
        vec![
            Token::new(Curly::OpenCurly, "{"),
            Token::new(Curly::Word, "hello"),
            Token::new(Curly::Equals, "="),
            Token::new(Curly::Word, "fun"),
            Token::new(Curly::Semicolon, ";"),
            Token::new(Curly::Fail, ""),
        ]
    );
}

// ===== Priority =====

#[test]
fn test_earlier_pattern_wins_even_when_shorter() {
    let table = PatternTable::new([
        (NamedKind::new("KEYWORD"), "if"),
        (NamedKind::new("IDENT"), "[a-z]+"),
        (NamedKind::new("FAIL"), ""),
    ])
    .unwrap();
    let tokens = table.tokenize("iffy");
    let names: Vec<String> = tokens.iter().map(|t| t.kind.to_string()).collect();
    assert_eq!(names, vec!["KEYWORD", "IDENT"]);
    assert_eq!(texts(&tokens), vec!["if", "fy"]);
}

#[test]
fn test_later_declaration_loses_the_prefix() {
    let table = PatternTable::new([
        (NamedKind::new("IDENT"), "[a-z]+"),
        (NamedKind::new("KEYWORD"), "if"),
        (NamedKind::new("FAIL"), ""),
    ])
    .unwrap();
    let tokens = table.tokenize("iffy");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.head().map(|t| t.kind.as_str()), Some("IDENT"));
}

// ===== Loaded Table =====

#[test]
fn test_loaded_yaml_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assign.yaml");
    std::fs::write(
        &path,
        "patterns:\n  - name: NAME\n    pattern: '[a-z]+'\n  - name: EQ\n    pattern: '='\n  - name: SPACE\n    pattern: ' +'\n  - name: FAIL\n",
    )
    .unwrap();

    let table = load_table(&path).unwrap();
    let tokens = table.tokenize("x = y").filter(|t| t.kind != "SPACE");
    let rendered: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, vec![r#"(NAME: "x")"#, r#"(EQ: "=")"#, r#"(NAME: "y")"#]);
}

// ===== Lexer Agreement =====

#[test]
fn test_logos_lexer_agrees_on_samples() {
    for input in [
        "(add (multiply 3 4) 5)",
        "(() hello)",
        "  word_1  ",
        "(a - b)",
        "",
        "((((deep))))",
        "caf\u{e9}",
        "a\u{a0}b",
    ] {
        assert_eq!(logos_lexer::tokenize(input), SexprPattern::table().tokenize(input), "{input:?}");
    }
}
