use super::*;
use crate::token::{Keyword, TokenKind, TokenValue};

use std::error::Error as _;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source)
        .unwrap()
        .iter()
        .map(|token| token.kind())
        .collect()
}

fn groups(source: &str) -> Vec<Group> {
    let mut parser = Parser::from_str(source);
    let mut groups = Vec::new();
    while let Some(group) = parser.next_group().unwrap() {
        groups.push(group);
    }
    groups
}

fn group_error(source: &str) -> Error {
    let mut parser = Parser::from_str(source);
    loop {
        match parser.next_group() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("{:?} grouped without error", source),
            Err(e) => return e,
        }
    }
}

#[test]
fn test_scan_kinds() {
    assert_eq!(
        kinds("(define [x] 'y) ; trailing comment\n#t #false \"a\\nb\" ,@z . 1/2 `(,w)"),
        [
            TokenKind::LeftParen,
            TokenKind::Keyword(Keyword::Define),
            TokenKind::LeftBracket,
            TokenKind::Identifier,
            TokenKind::RightBracket,
            TokenKind::Apostrophe,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Boolean,
            TokenKind::Boolean,
            TokenKind::String,
            TokenKind::CommaAt,
            TokenKind::Identifier,
            TokenKind::Dot,
            TokenKind::Number,
            TokenKind::Backtick,
            TokenKind::LeftParen,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Eof,
        ]
    );
    assert_eq!(kinds(""), [TokenKind::Eof]);
    assert_eq!(kinds("   ; only a comment"), [TokenKind::Eof]);
}

#[test]
fn test_scan_values() {
    let tokens = scan("#f 42 \"tab\\there\" set! vector ...").unwrap();
    assert_eq!(tokens[0].value(), Some(&TokenValue::Boolean(false)));
    assert_eq!(
        tokens[1].value(),
        Some(&TokenValue::Number(crate::Number::from(42)))
    );
    assert_eq!(
        tokens[2].value(),
        Some(&TokenValue::String("tab\there".into()))
    );
    assert_eq!(tokens[2].lexeme(), "\"tab\\there\"");
    assert_eq!(tokens[3].keyword(), Some(Keyword::Set));
    assert_eq!(tokens[4].kind(), TokenKind::Identifier);
    assert_eq!(tokens[5].kind(), TokenKind::Identifier);
}

#[test]
fn test_token_positions() {
    let tokens = scan("(a\n  bc)").unwrap();
    let bc = &tokens[2];
    assert_eq!(bc.lexeme(), "bc");
    assert_eq!((bc.line(), bc.column()), (2, 2));
    assert_eq!((bc.start_offset(), bc.end_offset()), (5, 7));
    assert_eq!(bc.span().end(), Position::new(2, 4));
    let close = &tokens[3];
    assert_eq!((close.line(), close.column(), close.start_offset()), (2, 4, 7));

    // Columns count characters, offsets count bytes.
    let tokens = scan("λ x").unwrap();
    assert_eq!((tokens[0].start_offset(), tokens[0].end_offset()), (0, 2));
    assert_eq!(tokens[1].column(), 2);
    assert_eq!(tokens[1].start_offset(), 3);
}

#[test]
fn test_lexical_failures() {
    for &(source, column) in &[
        ("{a}", 0),
        ("x @y", 2),
        ("|x|", 0),
        ("#x", 0),
        ("\"abc", 0),
        ("a \"\\q\"", 3),
        ("#| unterminated #| nested |#", 0),
    ] {
        let err = scan(source).unwrap_err();
        assert!(err.is_lexical(), "{:?} gave {:?}", source, err);
        assert_eq!(err.location().column(), column, "column for {:?}", source);
    }
}

#[test]
fn test_comments() {
    assert_eq!(
        kinds("#| a #| nested |# b |# x"),
        [TokenKind::Identifier, TokenKind::Eof]
    );
    let forms = groups("#;(ignored (form)) y (a #;b c)");
    assert_eq!(forms.len(), 2);
    assert_eq!(forms[0].as_identifier().map(|t| t.lexeme()), Some("y"));
    assert_eq!(forms[1].as_list().map(List::len), Some(2));
}

#[test]
fn test_groups() {
    let forms = groups("(a [b c] 'd)");
    assert_eq!(forms.len(), 1);
    let list = forms[0].as_list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.elements()[1].as_list().map(List::len), Some(2));

    let quoted = &list.elements()[2];
    assert_eq!(quoted.head_keyword(), Some(Keyword::Quote));
    assert_eq!(quoted.span().start(), Position::new(1, 9));
    assert_eq!(quoted.span().end(), Position::new(1, 11));
    assert_eq!((quoted.start_offset(), quoted.end_offset()), (9, 11));

    let forms = groups("#(1 2)");
    assert_eq!(forms[0].head_keyword(), Some(Keyword::Vector));
    let elements = forms[0].as_list().unwrap().elements();
    assert_eq!(elements[1].as_list().map(List::len), Some(2));
}

#[test]
fn test_group_failures() {
    let err = group_error("(a b");
    assert!(err.is_structural());
    assert!(err.is_eof());
    assert_eq!((err.location().line(), err.location().column()), (1, 0));

    let err = group_error("(a]");
    assert!(err.is_structural());
    assert!(!err.is_eof());
    assert_eq!(err.location().column(), 2);
    assert_eq!(
        err.to_string(),
        "mismatched parenthesis, expected `)` at line 1 column 2"
    );

    let err = group_error("(a)\n  )");
    assert!(err.is_structural());
    assert_eq!(err.token(), Some(")"));
    assert_eq!(
        (err.location().line(), err.location().column(), err.location().offset()),
        (2, 2, 6)
    );

    assert!(group_error("'").is_eof());
    assert_eq!(group_error("(a ')").location().column(), 4);
    assert!(group_error("#;").is_eof());
}

#[test]
fn test_recursion_limit() {
    let options = Options::new().with_max_depth(3);
    assert!(parse_custom("((a))", options.clone()).is_ok());
    let err = parse_custom("(((a)))", options.clone()).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(err.location().column(), 2);
    assert!(parse_custom("'''a", options.clone()).is_err());

    let program = parse_custom("#;#;a b 1", options.clone()).unwrap();
    assert_eq!(program.body.len(), 1);
    let err = parse_custom("#;#;#;a b c 1", options).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(err.location().column(), 4);

    let source = "#;".repeat(100_000) + &"x ".repeat(100_000) + "1";
    let err = parse(&source).unwrap_err();
    assert!(err.is_structural());
    assert_eq!(err.location().column(), 254);
}

#[test]
fn test_error_source_line() {
    let err = parse("(define x 1)\n(foo ]").unwrap_err();
    assert_eq!((err.location().line(), err.location().column()), (2, 5));
    assert_eq!(err.source_line(), Some("(foo ]"));
    assert_eq!(
        format!("{:?}", err),
        "Error(\"mismatched parenthesis, expected `)`\", line: 2, column: 5)"
    );
}

#[test]
fn test_numeric_failure() {
    let err = parse("(f 1/0)").unwrap_err();
    assert!(err.is_numeric());
    assert_eq!(err.location().column(), 3);
    assert!(err.source().is_some());
}

#[test]
fn test_options() {
    assert_eq!(Options::default().chapter(), MAX_CHAPTER);
    assert_eq!(Options::default().max_depth(), 128);
    assert_eq!(Options::new().with_chapter(0).chapter(), 1);
    assert_eq!(Options::new().with_chapter(9).chapter(), 4);
}

#[test]
fn test_chapters() {
    let chapter = |n| Options::new().with_chapter(n);
    for source in &["(quote a)", "'a", "`(a ,b)", "'#(1)"] {
        let err = parse_custom(source, chapter(1)).unwrap_err();
        assert!(err.is_syntax(), "{:?} gave {:?}", source, err);
        assert_eq!(err.chapters().map(|c| c.0), Some(2));
        assert!(parse_custom(source, chapter(2)).is_ok());
    }
    let err = parse_custom("(define (f) (delay 1))", chapter(2)).unwrap_err();
    assert_eq!(err.chapters(), Some((3, 2)));
    assert_eq!(err.token(), Some("delay"));
    assert_eq!(err.location().column(), 13);
    assert!(parse_custom("(set! x 1)", chapter(3)).is_ok());
    assert!(parse_custom("(define x (lambda (y) (if y 1 2)))", chapter(1)).is_ok());
}

#[test]
fn test_statements_iterator() {
    let parser = Parser::from_str("1 \"two\" (three)");
    let statements = parser.collect::<Result<Vec<_>>>().unwrap();
    assert_eq!(statements.len(), 3);

    let mut parser = Parser::from_str("(ok) (broken");
    assert!(parser.next_statement().unwrap().is_some());
    assert!(parser.next_statement().is_err());
}

#[test]
fn test_program_loc() {
    let program = parse("(a)\n(b c)").unwrap();
    assert_eq!(program.body.len(), 2);
    assert_eq!(program.loc.start(), Position::new(1, 0));
    assert_eq!(program.loc.end(), Position::new(2, 5));
    assert_eq!(program.body[1].loc().start(), Position::new(2, 1));
    assert_eq!(parse("").unwrap().body.len(), 0);
}
