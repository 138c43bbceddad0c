use scmjs::estree::{Expression, Statement};
use scmjs::parse::{Options, Parser};
use scmjs::{parse, parse_custom, Position};

const PROGRAM: &str = r#"
(import "list" (map filter))

; Sum of the squares of the odd elements.
(define (sum-odd-squares xs)
  (define (square x) (* x x))
  (let ([odds (filter odd? xs)])
    (apply + (map square odds))))

#| The answer,
   hopefully. |#
(define answer (sum-odd-squares '(1 2 3 4 5)))

(export (define (describe n)
  (cond [(> n 100) "big"]
        [(> n 10) "medium"]
        [else "small"])))

(display (describe answer))
"#;

#[test]
fn whole_program() {
    let program = parse(PROGRAM).unwrap();
    let kinds: Vec<_> = program
        .body
        .iter()
        .map(|statement| match statement {
            Statement::Import(_) => "import",
            Statement::Declaration(_) => "declaration",
            Statement::Export(_) => "export",
            Statement::Expression(_) => "expression",
            Statement::Return(_) => "return",
        })
        .collect();
    assert_eq!(
        kinds,
        ["import", "declaration", "declaration", "export", "expression"]
    );

    let function = match &program.body[1] {
        Statement::Declaration(declaration) => match &declaration.declarations[0].init {
            Expression::ArrowFunction(function) => function,
            other => panic!("unexpected {:?}", other),
        },
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(function.params.len(), 1);
    assert_eq!(function.body.body.len(), 2);
    assert_eq!(function.loc.start(), Position::new(5, 0));
    assert_eq!(program.body[4].loc().start(), Position::new(19, 1));
}

#[test]
fn statements_one_at_a_time() {
    let mut parser = Parser::from_str("(define x 1) (set! x 2) x");
    let mut count = 0;
    while let Some(statement) = parser.next_statement().unwrap() {
        count += 1;
        if count == 2 {
            assert!(matches!(
                statement,
                Statement::Expression(ref s) if matches!(s.expression, Expression::Assignment(_))
            ));
        }
    }
    assert_eq!(count, 3);
}

#[test]
fn chapter_restrictions() {
    let source = "(define (f x) (set! x 1) x)";
    let err = parse_custom(source, Options::new().with_chapter(1)).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.chapters(), Some((3, 1)));
    assert_eq!(err.source_line(), Some(source));
    assert!(parse_custom(source, Options::new().with_chapter(3)).is_ok());
}

#[test]
fn errors_carry_positions() {
    let err = parse("(define (f x)\n  (g x]\n").unwrap_err();
    assert!(err.is_structural());
    assert_eq!((err.location().line(), err.location().column()), (2, 6));
    assert_eq!(err.location().offset(), 20);
    assert_eq!(err.source_line(), Some("  (g x]"));

    let err = parse("(display \"unterminated)").unwrap_err();
    assert!(err.is_lexical());
    assert_eq!(err.location().column(), 9);
}
