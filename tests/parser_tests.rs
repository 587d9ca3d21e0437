//! Parser-level integration tests: rendering, statement trees, error
//! surfacing, and serde round-tripping of the AST

use lexa::{Error, Expr, Parser, Scanner, Stmt};

fn parse_expression(source: &str) -> lexa::Result<Expr> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    assert!(errors.is_empty(), "lexical errors: {:?}", errors);
    Parser::new(tokens).parse_expression()
}

fn parse_program(source: &str) -> lexa::Result<Vec<Stmt>> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    assert!(errors.is_empty(), "lexical errors: {:?}", errors);
    Parser::new(tokens).parse()
}

#[test]
fn test_parenthesized_rendering() {
    let expr = parse_expression("(1 + 2) * 3").unwrap();
    assert_eq!(expr.to_string(), "(* (group (+ 1.0 2.0)) 3.0)");

    let expr = parse_expression("1 == 2").unwrap();
    assert_eq!(expr.to_string(), "(== 1.0 2.0)");

    let expr = parse_expression("!(\"hi\" != nil)").unwrap();
    assert_eq!(expr.to_string(), "(! (group (!= hi nil)))");
}

#[test]
fn test_rendered_form_reparses_structurally_equal() {
    // Grouping nodes already make the tree fully parenthesized, so its
    // prefix rendering is canonical: equal trees render identically.
    let first = parse_expression("1 + 2 * 3 == 7").unwrap();
    let second = parse_expression("1 + (2 * 3) == 7").unwrap();
    assert_ne!(first, second); // the explicit group is a real node
    let regrouped = parse_expression("(1 + (2 * 3)) == 7").unwrap();
    assert_eq!(
        regrouped.to_string(),
        "(== (group (+ 1.0 (group (* 2.0 3.0)))) 7.0)"
    );
}

#[test]
fn test_program_aborts_on_first_syntax_error() {
    let err = parse_program("print 1; var ; print 2;").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            line: 1,
            lexeme: ";".to_string(),
            message: "Expect variable name.".to_string(),
        }
    );
}

#[test]
fn test_reserved_keywords_are_not_expressions() {
    // `if` and friends are scanned as keywords but the grammar has no rule
    // for them, so they fail at the primary-expression level.
    let err = parse_program("if;").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax {
            line: 1,
            lexeme: "if".to_string(),
            message: "Expect expression.".to_string(),
        }
    );
}

#[test]
fn test_assignment_target_must_be_variable() {
    let err = parse_program("(a) = 1;").unwrap_err();
    assert!(err.to_string().contains("Invalid assignment target."));
}

#[test]
fn test_ast_serde_round_trip() {
    let stmts = parse_program("var a = 1; { print a + 2.5; a = \"done\"; }").unwrap();

    let json = serde_json::to_string(&stmts).expect("AST should serialize");
    let back: Vec<Stmt> = serde_json::from_str(&json).expect("AST should deserialize");

    assert_eq!(stmts, back);
}

#[test]
fn test_expression_serde_round_trip() {
    let expr = parse_expression("!(1 + 2) == nil").unwrap();

    let json = serde_json::to_string(&expr).expect("AST should serialize");
    let back: Expr = serde_json::from_str(&json).expect("AST should deserialize");

    assert_eq!(expr, back);
}
