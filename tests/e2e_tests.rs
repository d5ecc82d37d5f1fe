/// End-to-end tests for the reader
/// Demonstrates: Lexer → Parser → tree rendering working together
use arrlisp::lexer::Lexer;
use arrlisp::parser::{format_tree, Parser};
use arrlisp::Expression;

#[test]
fn test_e2e_program() {
    let source = r#"
        (define square (lambda (x) (* x x)))
        (define pi 3.14159)
        (print "area:" (* pi (square -2)))
    "#;

    // Lex + parse
    let lexer = Lexer::new(source);
    let parser = Parser::from_lexer(lexer);
    let program = parser.parse_top_level().unwrap();

    let forms = program.as_array().unwrap();
    assert_eq!(forms.len(), 4);
    assert_eq!(forms[0].as_symbol(), Some("begin"));
    assert_eq!(
        program.to_string(),
        "(begin (define square (lambda (x) (* x x))) (define pi 3.14159) \
         (print \"area:\" (* pi (square -2))))"
    );
}

#[test]
fn test_e2e_tree_rendering() {
    let program = arrlisp::parse("(define square (lambda (x) (* x x)))").unwrap();

    let want = "\
(Symbol:define
 Symbol:square
 (Symbol:lambda
  (Symbol:x)
  (Symbol:*
   Symbol:x
   Symbol:x)))";
    assert_eq!(format_tree(&program), want);
}

#[test]
fn test_e2e_display_reparses() {
    let source = "(let (a 1) (b -2.5) (c \"x y\") (d ()) (e 7.))";
    let program = arrlisp::parse(source).unwrap();
    let reparsed = arrlisp::parse(&program.to_string()).unwrap();
    assert_eq!(reparsed, program);
}

#[test]
fn test_e2e_json_shape() {
    let program = arrlisp::parse("(define x 4)").unwrap();
    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Array": [
                { "Symbol": "define" },
                { "Symbol": "x" },
                { "Integer": 4 }
            ]
        })
    );
    let back: Expression = serde_json::from_value(json).unwrap();
    assert_eq!(back, program);
}

#[test]
fn test_e2e_tokens_serialize() {
    let tokens = arrlisp::tokenize("(a)").unwrap();
    let json = serde_json::to_value(tokens[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "kind": "PlainToken", "text": "a", "offset": 1 })
    );
}

#[test]
fn test_version() {
    assert!(!arrlisp::VERSION.is_empty());
}
