use crate::estree::*;
use crate::number::Number;
use crate::parse::{parse, parse_custom, Options};

fn statements(source: &str) -> Vec<Statement> {
    parse(source).unwrap().body
}

fn expression(source: &str) -> Expression {
    match statements(source).pop() {
        Some(Statement::Expression(statement)) => statement.expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn syntax_error(source: &str) -> crate::parse::Error {
    let err = parse(source).unwrap_err();
    assert!(err.is_syntax(), "{:?} gave {:?}", source, err);
    err
}

fn name(expr: &Expression) -> &str {
    match expr {
        Expression::Identifier(id) => id.name.as_str(),
        other => panic!("expected an identifier, got {:?}", other),
    }
}

fn call(expr: &Expression) -> (&str, &[Expression]) {
    match expr {
        Expression::Call(call) => (name(&call.callee), call.arguments.as_slice()),
        other => panic!("expected a call, got {:?}", other),
    }
}

fn number(expr: &Expression) -> &Number {
    match expr {
        Expression::Literal(Literal {
            value: LiteralValue::Number(n),
            ..
        }) => n,
        other => panic!("expected a number, got {:?}", other),
    }
}

/// The symbol name in a `string->symbol("name")` call.
fn symbol(expr: &Expression) -> &str {
    match call(expr) {
        ("string->symbol", [Expression::Literal(Literal {
            value: LiteralValue::String(name),
            ..
        })]) => name.as_str(),
        other => panic!("expected a symbol, got {:?}", other),
    }
}

#[test]
fn test_define_function() {
    let body = statements("(define (square x) (* x x))");
    assert_eq!(body.len(), 1);
    let declaration = match &body[0] {
        Statement::Declaration(declaration) => declaration,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(declaration.kind, DeclarationKind::Const);
    assert_eq!(declaration.declarations.len(), 1);
    let declarator = &declaration.declarations[0];
    assert_eq!(declarator.id.name, "square");
    let function = match &declarator.init {
        Expression::ArrowFunction(function) => function,
        other => panic!("unexpected {:?}", other),
    };
    let params: Vec<_> = function.params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, ["x"]);
    match function.body.body.as_slice() {
        [Statement::Return(ret)] => {
            let (callee, arguments) = call(&ret.argument);
            assert_eq!(callee, "*");
            assert_eq!(arguments.len(), 2);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_define_variable() {
    match statements("(define answer 42)").as_slice() {
        [Statement::Declaration(declaration)] => {
            let declarator = &declaration.declarations[0];
            assert_eq!(declarator.id.name, "answer");
            assert_eq!(number(&declarator.init), &Number::from(42));
        }
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(define)");
    syntax_error("(define x)");
    syntax_error("(define x 1 2)");
    syntax_error("(define 1 2)");
    syntax_error("(define (1 x) x)");
    syntax_error("(define (f x))");
}

#[test]
fn test_if() {
    let conditional = match expression("(if #t 1 2)") {
        Expression::Conditional(conditional) => conditional,
        other => panic!("unexpected {:?}", other),
    };
    let (helper, arguments) = call(&conditional.test);
    assert_eq!(helper, "truthy");
    match arguments {
        [Expression::Literal(literal)] => {
            assert_eq!(literal.value, LiteralValue::Boolean(true));
            assert_eq!(literal.raw, "#t");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(number(&conditional.consequent), &Number::from(1));
    assert_eq!(number(&conditional.alternate), &Number::from(2));

    match expression("(if x y)") {
        Expression::Conditional(conditional) => {
            assert_eq!(name(&conditional.alternate), "undefined")
        }
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(if x)");
    syntax_error("(if a b c d)");

    let err = syntax_error("(if (lambda) 1 (lambda))");
    assert_eq!(err.location().column(), 4);
}

#[test]
fn test_application() {
    let expr = expression("(f 1 \"two\")");
    let (callee, arguments) = call(&expr);
    assert_eq!(callee, "f");
    assert_eq!(arguments.len(), 2);
    assert_eq!(expr.loc().start().column(), 1);
    assert_eq!(expr.loc().end().column(), 10);

    let expr = expression("(g)");
    let (callee, arguments) = call(&expr);
    assert_eq!((callee, arguments.len()), ("g", 0));
    syntax_error("()");
}

#[test]
fn test_definitions_prefix() {
    let err = syntax_error("(lambda () (define a 1) (+ a 1) (define b 2))");
    assert_eq!(err.location().column(), 32);

    let function = match expression("(lambda () (define a 1) (define b 2) (+ a b))") {
        Expression::ArrowFunction(function) => function,
        other => panic!("unexpected {:?}", other),
    };
    let body = &function.body.body;
    assert_eq!(body.len(), 3);
    assert!(matches!(body[0], Statement::Declaration(_)));
    assert!(matches!(body[1], Statement::Declaration(_)));
    assert!(matches!(body[2], Statement::Return(_)));

    syntax_error("(lambda () (define a 1))");
    syntax_error("(lambda (x))");
    syntax_error("(lambda (1) 1)");
    syntax_error("(lambda x x)");
}

#[test]
fn test_let() {
    let (params, arguments) = match expression("(let ((x 1) (y 2)) (+ x y))") {
        Expression::Call(CallExpression {
            callee, arguments, ..
        }) => match *callee {
            Expression::ArrowFunction(function) => (function.params, arguments),
            other => panic!("unexpected {:?}", other),
        },
        other => panic!("unexpected {:?}", other),
    };
    let params: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(params, ["x", "y"]);
    assert_eq!(number(&arguments[1]), &Number::from(2));

    syntax_error("(let ((x)) x)");
    syntax_error("(let (x 1) x)");
    syntax_error("(let ((x 1)))");
}

#[test]
fn test_cond() {
    let conditional = match expression("(cond ((> x 1) 'big) (else 'small))") {
        Expression::Conditional(conditional) => conditional,
        other => panic!("unexpected {:?}", other),
    };
    assert_eq!(call(&conditional.test).0, "truthy");
    assert_eq!(symbol(&conditional.consequent), "big");
    assert_eq!(symbol(&conditional.alternate), "small");
    assert_eq!(conditional.loc.start().column(), 0);

    match expression("(cond (a 1) (b 2))") {
        Expression::Conditional(outer) => match *outer.alternate {
            Expression::Conditional(inner) => assert_eq!(name(&inner.alternate), "undefined"),
            other => panic!("unexpected {:?}", other),
        },
        other => panic!("unexpected {:?}", other),
    }

    // A clause body with several forms is sequenced.
    match expression("(cond (else (display 1) 2))") {
        Expression::Call(call) => assert!(matches!(*call.callee, Expression::ArrowFunction(_))),
        other => panic!("unexpected {:?}", other),
    }

    syntax_error("(cond)");
    syntax_error("(cond (else 1) (a 2))");
    syntax_error("(cond (a))");
    syntax_error("(cond a)");

    let err = syntax_error("(cond ((lambda) 1) ((lambda) 2))");
    assert_eq!(err.location().column(), 7);
}

#[test]
fn test_begin() {
    let expr = expression("(begin 1)");
    assert_eq!(number(&expr), &Number::from(1));
    assert_eq!(expr.loc().start().column(), 0);
    assert_eq!(expr.loc().end().column(), 9);

    match expression("(begin (define a 1) a)") {
        Expression::Call(call) => {
            assert!(call.arguments.is_empty());
            assert!(matches!(*call.callee, Expression::ArrowFunction(_)));
        }
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(begin)");
}

#[test]
fn test_delay_and_set() {
    match expression("(delay (f))") {
        Expression::ArrowFunction(function) => {
            assert!(function.params.is_empty());
            match function.body.body.as_slice() {
                [Statement::Return(ret)] => assert_eq!(call(&ret.argument).0, "f"),
                other => panic!("unexpected {:?}", other),
            }
        }
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(delay)");
    syntax_error("(delay a b)");

    match expression("(set! x 1)") {
        Expression::Assignment(assignment) => {
            assert_eq!(assignment.left.name, "x");
            assert_eq!(number(&assignment.right), &Number::from(1));
        }
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(set! 1 2)");
    syntax_error("(set! x)");
}

#[test]
fn test_import_export() {
    match statements("(import \"lib\" (a b))").as_slice() {
        [Statement::Import(import)] => {
            assert_eq!(import.source.value, LiteralValue::String("lib".into()));
            let names: Vec<_> = import
                .specifiers
                .iter()
                .map(|s| (s.imported.name.as_str(), s.local.name.as_str()))
                .collect();
            assert_eq!(names, [("a", "a"), ("b", "b")]);
        }
        other => panic!("unexpected {:?}", other),
    }
    match statements("(export (define (f) 1))").as_slice() {
        [Statement::Export(export)] => {
            assert_eq!(export.declaration.declarations[0].id.name, "f")
        }
        other => panic!("unexpected {:?}", other),
    }

    let err = syntax_error("(define (f) (import \"m\" (a)) 1)");
    assert_eq!(err.token(), Some("import"));
    syntax_error("(import lib (a))");
    syntax_error("(export x)");
    syntax_error("(f (define x 1))");
    syntax_error("(else 1)");
}

#[test]
fn test_quote() {
    assert_eq!(symbol(&expression("'a")), "a");
    assert_eq!(number(&expression("'5")), &Number::from(5));
    assert_eq!(call(&expression("'()")), ("list", &[][..]));

    let expr = expression("'(a 1 (b))");
    let (helper, items) = call(&expr);
    assert_eq!(helper, "list");
    assert_eq!(symbol(&items[0]), "a");
    assert_eq!(number(&items[1]), &Number::from(1));
    assert_eq!(symbol(&call(&items[2]).1[0]), "b");

    // Keywords inside quoted data are plain symbols.
    assert_eq!(symbol(&call(&expression("'(if)")).1[0]), "if");

    match &expression("'a") {
        Expression::Call(call) => match call.arguments.as_slice() {
            [Expression::Literal(literal)] => assert_eq!(literal.raw, "\"a\""),
            other => panic!("unexpected {:?}", other),
        },
        other => panic!("unexpected {:?}", other),
    }
    syntax_error("(quote)");
    syntax_error("(quote a b)");
}

#[test]
fn test_dotted_lists() {
    let expr = expression("'(a b . c)");
    let (helper, arguments) = call(&expr);
    assert_eq!(helper, "cons");
    assert_eq!(symbol(&arguments[0]), "a");
    let (helper, rest) = call(&arguments[1]);
    assert_eq!(helper, "cons");
    assert_eq!(symbol(&rest[0]), "b");
    assert_eq!(symbol(&rest[1]), "c");

    syntax_error("'(a . b c)");
    syntax_error("'(. a)");
    syntax_error("'(a .)");
    syntax_error("'(a . . b)");
    let err = parse("'.").unwrap_err();
    assert_eq!(err.token(), Some("."));
}

#[test]
fn test_vectors() {
    let expr = expression("'#(1 a)");
    let (helper, items) = call(&expr);
    assert_eq!(helper, "vector");
    assert_eq!(number(&items[0]), &Number::from(1));
    assert_eq!(symbol(&items[1]), "a");

    let err = syntax_error("#(1 2)");
    assert_eq!(err.token(), Some("vector"));
}

#[test]
fn test_quasiquote() {
    let expr = expression("`(a ,b)");
    let (helper, items) = call(&expr);
    assert_eq!(helper, "list");
    assert_eq!(symbol(&items[0]), "a");
    assert_eq!(name(&items[1]), "b");

    let expr = expression("`(1 ,@xs 2 3)");
    let (helper, segments) = call(&expr);
    assert_eq!(helper, "append");
    assert_eq!(segments.len(), 3);
    assert_eq!(call(&segments[0]).1.len(), 1);
    assert_eq!(name(&segments[1]), "xs");
    assert_eq!(call(&segments[2]).1.len(), 2);

    let expr = expression("`(,@xs . t)");
    let (helper, segments) = call(&expr);
    assert_eq!(helper, "append");
    assert_eq!(name(&segments[0]), "xs");
    assert_eq!(symbol(&segments[1]), "t");

    // Outside a quasiquote, unquote is treated as data.
    let expr = expression("'(a ,b)");
    let (_, items) = call(&expr);
    assert_eq!(symbol(&call(&items[1]).1[0]), "unquote");

    let err = syntax_error("`,@xs");
    assert_eq!(err.token(), Some("unquote-splicing"));
    syntax_error(",x");
    syntax_error(",@x");
}

#[test]
fn test_quote_shorthand_matches_long_form() {
    for datum in &["a", "(a 1 \"s\")", "(a . b)", "#(1 (2))", "()"] {
        let long = parse(&format!("(quote {})", datum)).unwrap();
        let short = parse(&format!("      '{}", datum)).unwrap();
        assert_eq!(long.body, short.body, "quoting {:?}", datum);
    }
}

#[test]
fn test_chapter_gating_ignores_quoted_data() {
    let options = Options::new().with_chapter(2);
    assert!(parse_custom("'(set! delay)", options.clone()).is_ok());
    assert!(parse_custom("(set! x 1)", options).is_err());
}
