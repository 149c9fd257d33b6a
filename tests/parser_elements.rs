//! Parser tests, run against both parser implementations
//!
//! Every test is parametrized over `Parser::Descent` and `Parser::Combinator`;
//! the two must accept the same inputs and build the same trees.

use rstest::rstest;
use sexpr::sexpr::lexing::{scan, SexprPattern};
use sexpr::sexpr::parsing::{parse_sexpr, parse_top_level, try_parse, ParseError, ParseOptions, Parser};
use sexpr::sexpr::testing::{assert_value, sexpr, word};

#[rstest(parser => [Parser::Descent, Parser::Combinator])]
fn test_canonical_example(parser: Parser) {
    let value = parser.parse("(add (multiply 3 4) 5)").unwrap();

    assert_value(&value)
        .depth(2)
        .assert_sexpr()
        .child_count(3)
        .word_at(0, "add")
        .child(1, |child| {
            child.assert_sexpr().words(&["multiply", "3", "4"]);
        })
        .word_at(2, "5");

    let second = value.as_sexpr().and_then(|s| s.nth(1));
    assert_eq!(
        second,
        Some(&sexpr(vec![word("multiply"), word("3"), word("4")]))
    );
}

#[rstest(parser => [Parser::Descent, Parser::Combinator])]
fn test_single_word(parser: Parser) {
    assert_eq!(parser.parse("hello"), Some(word("hello")));
}

#[rstest(parser => [Parser::Descent, Parser::Combinator])]
fn test_empty_list_then_word(parser: Parser) {
    let value = parser.parse("(() hello)").unwrap();
    assert_value(&value)
        .assert_sexpr()
        .child_count(2)
        .child(0, |child| {
            child.assert_sexpr().empty();
        })
        .word_at(1, "hello");
}

#[rstest]
#[case("()", "(  )")]
#[case("  ( a\n\t(b) )  ", "( a ( b ) )")]
#[case("((()))", "( ( (  ) ) )")]
#[case("(x_1 42 (y))", "( x_1 42 ( y ) )")]
fn test_accepted(
    #[values(Parser::Descent, Parser::Combinator)] parser: Parser,
    #[case] input: &str,
    #[case] canonical: &str,
) {
    let value = parser.parse(input).unwrap();
    assert_value(&value).canonical(canonical);
}

#[rstest]
#[case::unterminated("(add 1 2")]
#[case::trailing_word("(add 1 2) extra")]
#[case::empty("")]
#[case::whitespace_only("  \n")]
#[case::leading_close(")")]
#[case::stray_close("(a))")]
#[case::two_words("a b")]
#[case::unknown_character("(a - b)")]
#[case::non_ascii_letter("h\u{e9}llo")]
#[case::non_breaking_space("(a\u{a0}b)")]
fn test_rejected(#[values(Parser::Descent, Parser::Combinator)] parser: Parser, #[case] input: &str) {
    assert_eq!(parser.parse(input), None);
}

#[rstest]
#[case("", ParseError::EmptyInput)]
#[case("(a - b)", ParseError::LexFailure)]
#[case("(add 1 2", ParseError::Unterminated)]
#[case("(add 1 2) extra", ParseError::TrailingTokens { remaining: 1 })]
#[case(") a", ParseError::UnexpectedToken { kind: SexprPattern::Close, text: ")".to_string() })]
fn test_descent_failure_causes(#[case] input: &str, #[case] expected: ParseError) {
    assert_eq!(try_parse(input), Err(expected));
}

#[rstest(parser => [Parser::Descent, Parser::Combinator])]
fn test_depth_limit(parser: Parser) {
    let options = ParseOptions::new().with_max_depth(3);
    assert!(parser.try_parse("(a (b (c)))", &options).is_ok());
    assert_eq!(
        parser.try_parse("(a (b (c (d))))", &options),
        Err(ParseError::TooDeep { max_depth: 3 })
    );
}

#[rstest(parser => [Parser::Descent, Parser::Combinator])]
fn test_depth_limit_stops_unbounded_nesting(parser: Parser) {
    let input = "(".repeat(200_000);
    let options = ParseOptions::new().with_max_depth(10);
    assert_eq!(
        parser.try_parse(&input, &options),
        Err(ParseError::TooDeep { max_depth: 10 })
    );
}

#[rstest]
#[case("a %")]
#[case("(a b) %")]
#[case("h\u{e9}llo")]
fn test_scanner_failure_after_value(
    #[values(Parser::Descent, Parser::Combinator)] parser: Parser,
    #[case] input: &str,
) {
    assert_eq!(
        parser.try_parse(input, &ParseOptions::default()),
        Err(ParseError::LexFailure)
    );
}

#[test]
fn test_top_level_on_scanned_tokens() {
    let tokens = scan("(a b)");
    assert_eq!(parse_top_level(&tokens), Some(sexpr(vec![word("a"), word("b")])));
    assert_eq!(parse_top_level(&tokens.tail().cloned().unwrap_or_default()), None);
}

#[test]
fn test_parse_sexpr_uses_descent() {
    let input = "(define (square x) (multiply x x))";
    assert_eq!(parse_sexpr(input), Parser::Descent.parse(input));
}
