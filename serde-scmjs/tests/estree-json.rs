//! Test serialization of `scmjs` syntax trees to ESTree JSON

use serde_json::{json, Value};

use serde_scmjs::{error::Category, from_source, from_source_custom, to_string, to_value};

fn loc(start: (usize, usize), end: (usize, usize)) -> Value {
    json!({
        "start": { "line": start.0, "column": start.1 },
        "end": { "line": end.0, "column": end.1 },
    })
}

#[test]
fn test_call_with_rational() {
    let expected = json!({
        "type": "Program",
        "sourceType": "module",
        "body": [{
            "type": "ExpressionStatement",
            "expression": {
                "type": "CallExpression",
                "callee": { "type": "Identifier", "name": "f", "loc": loc((1, 1), (1, 2)) },
                "arguments": [{
                    "type": "Literal",
                    "value": "1/2",
                    "numberType": "rational",
                    "raw": "1/2",
                    "loc": loc((1, 3), (1, 6)),
                }],
                "optional": false,
                "loc": loc((1, 1), (1, 6)),
            },
            "loc": loc((1, 1), (1, 6)),
        }],
        "loc": loc((1, 0), (1, 7)),
    });
    assert_eq!(from_source("(f 1/2)").unwrap(), expected);
}

#[test]
fn test_literals() {
    let json = from_source("#t \"hi\\n\" 6/3 0.5 1+2i").unwrap();
    let literal = |i: usize| json["body"][i]["expression"].clone();
    assert_eq!(literal(0)["value"], json!(true));
    assert_eq!(literal(0)["raw"], "#t");
    assert_eq!(literal(1)["value"], "hi\n");
    assert_eq!(literal(1)["raw"], "\"hi\\n\"");
    assert_eq!(literal(2)["value"], "2");
    assert_eq!(literal(2)["numberType"], "integer");
    assert_eq!(literal(3)["value"], "0.5");
    assert_eq!(literal(3)["numberType"], "real");
    assert_eq!(literal(4)["numberType"], "complex");
    assert!(literal(0).get("numberType").is_none());
}

#[test]
fn test_declarations() {
    let json = from_source("(define (id x) x)").unwrap();
    let declaration = &json["body"][0];
    assert_eq!(declaration["type"], "VariableDeclaration");
    assert_eq!(declaration["kind"], "const");
    let declarator = &declaration["declarations"][0];
    assert_eq!(declarator["type"], "VariableDeclarator");
    assert_eq!(declarator["id"]["name"], "id");
    let function = &declarator["init"];
    assert_eq!(function["type"], "ArrowFunctionExpression");
    assert_eq!(function["params"], json!([{ "type": "Identifier", "name": "x", "loc": loc((1, 12), (1, 13)) }]));
    assert_eq!(function["body"]["type"], "BlockStatement");
    assert_eq!(function["body"]["body"][0]["type"], "ReturnStatement");
    assert_eq!(function["body"]["body"][0]["argument"]["name"], "x");
}

#[test]
fn test_modules() {
    let json = from_source("(import \"m\" (a)) (export (define b a))").unwrap();
    let import = &json["body"][0];
    assert_eq!(import["type"], "ImportDeclaration");
    assert_eq!(import["source"]["value"], "m");
    assert_eq!(import["specifiers"][0]["type"], "ImportSpecifier");
    assert_eq!(import["specifiers"][0]["imported"]["name"], "a");
    assert_eq!(import["specifiers"][0]["local"]["name"], "a");

    let export = &json["body"][1];
    assert_eq!(export["type"], "ExportNamedDeclaration");
    assert_eq!(export["declaration"]["type"], "VariableDeclaration");
    assert_eq!(export["specifiers"], json!([]));
    assert_eq!(export["source"], Value::Null);
}

#[test]
fn test_expressions() {
    let json = from_source("(if x (set! y 1))").unwrap();
    let conditional = &json["body"][0]["expression"];
    assert_eq!(conditional["type"], "ConditionalExpression");
    assert_eq!(conditional["test"]["callee"]["name"], "truthy");
    assert_eq!(conditional["consequent"]["type"], "AssignmentExpression");
    assert_eq!(conditional["consequent"]["operator"], "=");
    assert_eq!(conditional["consequent"]["left"]["name"], "y");
    assert_eq!(conditional["alternate"]["name"], "undefined");
}

#[test]
fn test_node_serialization() {
    let program = scmjs::parse("'(a . b)").unwrap();
    let json = to_value(&program.body[0]).unwrap();
    assert_eq!(json["expression"]["callee"]["name"], "cons");
    let text = to_string(&program).unwrap();
    assert!(text.starts_with("{\"type\":\"Program\""));
}

#[test]
fn test_errors() {
    let err = from_source("(f").unwrap_err();
    assert_eq!(err.classify(), Category::Syntax);
    let location = err.location().unwrap();
    assert_eq!((location.line(), location.column()), (1, 0));
    assert!(err.as_parse_error().map_or(false, |e| e.is_eof()));

    let options = scmjs::parse::Options::new().with_chapter(1);
    let err = from_source_custom("'a", options).unwrap_err();
    assert_eq!(err.classify(), Category::Syntax);
}

#[test]
fn test_nested_nodes() {
    let program = scmjs::parse("(define (f xs) (g (h xs) 'ys)) (import \"m\" (a b))").unwrap();
    let body = to_value(&program.body).unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    let function = &body[0]["declarations"][0]["init"];
    let call = &function["body"]["body"][0]["argument"];
    assert_eq!(call["arguments"][0]["callee"]["name"], "h");
    assert_eq!(call["arguments"][1]["callee"]["name"], "string->symbol");
    assert_eq!(body[1]["specifiers"][1]["local"]["name"], "b");

    let mut buffer = Vec::new();
    serde_scmjs::to_writer(&mut buffer, &program).unwrap();
    let text = serde_scmjs::to_string_pretty(&program).unwrap();
    assert_eq!(
        serde_json::from_slice::<Value>(&buffer).unwrap(),
        serde_json::from_str::<Value>(&text).unwrap()
    );
}
