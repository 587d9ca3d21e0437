//! End-to-end integration tests: Scanner → Parser → Interpreter
//! with captured `print` output

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use lexa::{Error, Interpreter, Parser, Scanner, Stmt};

/// In-memory `print` destination that stays readable after the
/// interpreter takes ownership of its writer
#[derive(Clone, Default)]
struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

fn parse_program(source: &str) -> Vec<Stmt> {
    let (tokens, errors) = Scanner::new(source).scan_tokens();
    assert!(errors.is_empty(), "lexical errors: {:?}", errors);
    Parser::new(tokens).parse().expect("program should parse")
}

/// Runs a program and returns the execution result plus captured output
fn run_program(source: &str) -> (lexa::Result<()>, String) {
    let buf = SharedBuf::default();
    let mut interp = Interpreter::with_output(Box::new(buf.clone()));
    let result = interp.run(&parse_program(source));
    (result, buf.contents())
}

#[test]
fn test_print_expression_result() {
    let (result, output) = run_program("print (1 + 2) * 3;");
    assert!(result.is_ok());
    assert_eq!(output, "9\n");
}

#[test]
fn test_declare_then_assign_then_print() {
    let (result, output) = run_program("var x; x = 5; print x;");
    assert!(result.is_ok());
    assert_eq!(output, "5\n");
}

#[test]
fn test_var_without_initializer_is_nil() {
    let (result, output) = run_program("var a; print a;");
    assert!(result.is_ok());
    assert_eq!(output, "nil\n");
}

#[test]
fn test_redeclaration_rebinds() {
    let (result, output) = run_program("var a = 1; var a = 2; print a;");
    assert!(result.is_ok());
    assert_eq!(output, "2\n");
}

#[test]
fn test_assignment_yields_assigned_value() {
    let (result, output) = run_program("var a = 1; print a = 2;");
    assert!(result.is_ok());
    assert_eq!(output, "2\n");
}

#[test]
fn test_assignment_cannot_declare() {
    let (result, output) = run_program("b = 1;");
    assert_eq!(
        result,
        Err(Error::UndefinedVariable {
            name: "b".to_string()
        })
    );
    assert_eq!(output, "");
}

#[test]
fn test_block_shadows_then_restores_outer_binding() {
    let (result, output) = run_program("var a = 1; { var a = 2; print a; } print a;");
    assert!(result.is_ok());
    assert_eq!(output, "2\n1\n");
}

#[test]
fn test_inner_assignment_reaches_outer_scope() {
    let (result, output) = run_program("var a = 1; { a = 2; { a = a + 1; } } print a;");
    assert!(result.is_ok());
    assert_eq!(output, "3\n");
}

#[test]
fn test_block_scope_restored_after_runtime_error() {
    let buf = SharedBuf::default();
    let mut interp = Interpreter::with_output(Box::new(buf.clone()));

    // The block fails partway through; the statement after the error must
    // not run, and the shadowing binding must be gone afterwards.
    let failing = parse_program("var a = 1; { var a = 2; print a; 1 + \"x\"; print 99; }");
    assert!(interp.run(&failing).is_err());

    let followup = parse_program("print a;");
    interp.run(&followup).expect("outer binding should survive");

    assert_eq!(buf.contents(), "2\n1\n");
}

#[test]
fn test_execution_stops_at_first_runtime_error() {
    let (result, output) = run_program("print 1; print missing; print 2;");
    assert_eq!(
        result,
        Err(Error::UndefinedVariable {
            name: "missing".to_string()
        })
    );
    // Prior statements' effects stay
    assert_eq!(output, "1\n");
}

#[test]
fn test_string_concatenation() {
    let (result, output) = run_program("print \"foo\" + \"bar\";");
    assert!(result.is_ok());
    assert_eq!(output, "foobar\n");
}

#[test]
fn test_division_by_zero_prints_infinity() {
    let (result, output) = run_program("print 1 / 0;");
    assert!(result.is_ok());
    assert_eq!(output, "inf\n");
}

#[test]
fn test_tag_strict_equality_output() {
    let (result, output) = run_program("print 1 == \"1\"; print 1 != \"1\"; print 1 == 2;");
    assert!(result.is_ok());
    assert_eq!(output, "false\ntrue\nfalse\n");
}

#[test]
fn test_truthiness_of_zero_and_empty_string() {
    let (result, output) = run_program("print !0; print !\"\"; print !nil; print !false;");
    assert!(result.is_ok());
    assert_eq!(output, "false\nfalse\ntrue\ntrue\n");
}

#[test]
fn test_number_rendering_in_output() {
    let (result, output) = run_program("print 9; print 3.15; print 2 / 4;");
    assert!(result.is_ok());
    assert_eq!(output, "9\n3.15\n0.5\n");
}

#[test]
fn test_expression_statement_discards_value() {
    let (result, output) = run_program("1 + 2; print 3;");
    assert!(result.is_ok());
    assert_eq!(output, "3\n");
}

#[test]
fn test_chained_assignment() {
    let (result, output) = run_program("var a; var b; a = b = 7; print a; print b;");
    assert!(result.is_ok());
    assert_eq!(output, "7\n7\n");
}
