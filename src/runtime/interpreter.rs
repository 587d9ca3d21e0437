use std::io::{self, Write};

use crate::error::{Error, Result};
use crate::parser::{BinaryOp, Expr, Stmt, UnaryOp};
use crate::runtime::{Environment, Value};

/// Tree-walking interpreter for Lexa programs
///
/// Owns the variable environment for the duration of a run. Statements are
/// executed for their side effects; expressions evaluate strictly, left
/// operand before right. `print` output goes to the configured writer
/// (stdout by default), diagnostics are the caller's concern.
pub struct Interpreter {
    /// Variable environment
    env: Environment,
    /// Destination for `print` statements
    out: Box<dyn Write>,
}

impl Interpreter {
    /// Creates a new interpreter printing to stdout
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            out: Box::new(io::stdout()),
        }
    }

    /// Creates a new interpreter with a custom `print` destination
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Interpreter {
            env: Environment::new(),
            out,
        }
    }

    /// Returns the current environment
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Executes a statement sequence in order, stopping at the first error.
    /// Effects of already-executed statements are not rolled back.
    pub fn run(&mut self, statements: &[Stmt]) -> Result<()> {
        tracing::debug!(statements = statements.len(), "executing program");
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Executes a single statement against the current environment
    pub fn execute(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                writeln!(self.out, "{}", value)
                    .map_err(|e| Error::runtime(format!("failed to write output: {}", e)))
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name.clone(), value);
                Ok(())
            }
            Stmt::Block(statements) => {
                self.env.enter_scope();
                let result = statements.iter().try_for_each(|s| self.execute(s));
                // The scope is popped on the error path too, so an enclosing
                // binding shadowed inside the block is always restored.
                self.env.exit_scope();
                result
            }
        }
    }

    /// Evaluates an expression to a value against the current environment
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::String(s) => Ok(Value::String(s.clone())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Nil => Ok(Value::Nil),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { op, operand } => {
                let value = self.evaluate(operand)?;
                apply_unary(*op, value)
            }
            Expr::Binary { op, left, right } => {
                let lhs = self.evaluate(left)?;
                let rhs = self.evaluate(right)?;
                apply_binary(*op, lhs, rhs)
            }
            Expr::Variable(name) => self.env.get(name),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                self.env.assign(name, value.clone())?;
                Ok(value)
            }
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_unary(op: UnaryOp, value: Value) -> Result<Value> {
    match op {
        UnaryOp::Neg => match value {
            Value::Number(n) => Ok(Value::Number(-n)),
            other => Err(Error::TypeError {
                expected: "number".to_string(),
                got: other.type_name().to_string(),
            }),
        },
        UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
    }
}

/// Applies a binary operator to already-evaluated operands. Each operator
/// accepts a fixed set of operand-type pairs, tried number-first; any other
/// combination is a type error. Division by zero follows IEEE f64 semantics.
fn apply_binary(op: BinaryOp, lhs: Value, rhs: Value) -> Result<Value> {
    match op {
        BinaryOp::Add => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::Sub => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::Mul => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::Div => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::Lt => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a < b)),
            (Value::String(a), Value::String(b)) => Ok(Value::Bool(a < b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::LtEq => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a <= b)),
            (Value::String(a), Value::String(b)) => Ok(Value::Bool(a <= b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::Gt => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a > b)),
            (Value::String(a), Value::String(b)) => Ok(Value::Bool(a > b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        BinaryOp::GtEq => match (lhs, rhs) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Bool(a >= b)),
            (Value::String(a), Value::String(b)) => Ok(Value::Bool(a >= b)),
            (l, r) => Err(invalid_operands(op, &l, &r)),
        },
        // Tag-strict: mismatched tags compare unequal without a type error
        BinaryOp::Eq => Ok(Value::Bool(lhs == rhs)),
        BinaryOp::NotEq => Ok(Value::Bool(lhs != rhs)),
    }
}

fn invalid_operands(op: BinaryOp, left: &Value, right: &Value) -> Error {
    Error::InvalidOperands {
        op: op.symbol().to_string(),
        left_type: left.type_name().to_string(),
        right_type: right.type_name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;
    use crate::parser::Parser;

    fn eval(source: &str) -> Result<Value> {
        let (tokens, errors) = Scanner::new(source).scan_tokens();
        assert!(errors.is_empty(), "lexical errors: {:?}", errors);
        let expr = Parser::new(tokens).parse_expression()?;
        Interpreter::new().evaluate(&expr)
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("1 + 2 * 3").unwrap(), Value::Number(7.0));
        assert_eq!(eval("(1 + 2) * 3").unwrap(), Value::Number(9.0));
        assert_eq!(eval("10 - 4 - 3").unwrap(), Value::Number(3.0));
        assert_eq!(eval("7 / 2").unwrap(), Value::Number(3.5));
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!(eval("1 / 0").unwrap(), Value::Number(f64::INFINITY));
        assert_eq!(eval("-1 / 0").unwrap(), Value::Number(f64::NEG_INFINITY));
        assert!(matches!(eval("0 / 0").unwrap(), Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_string_concatenation() {
        assert_eq!(
            eval("\"a\" + \"b\"").unwrap(),
            Value::String("ab".to_string())
        );
    }

    #[test]
    fn test_mixed_addition_is_type_error() {
        let err = eval("1 + \"b\"").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidOperands {
                op: "+".to_string(),
                left_type: "number".to_string(),
                right_type: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(eval("1 < 2").unwrap(), Value::Bool(true));
        assert_eq!(eval("2 <= 2").unwrap(), Value::Bool(true));
        assert_eq!(eval("1 > 2").unwrap(), Value::Bool(false));
        assert_eq!(eval("\"abc\" < \"abd\"").unwrap(), Value::Bool(true));
        assert_eq!(eval("\"b\" >= \"a\"").unwrap(), Value::Bool(true));
        assert!(eval("1 < \"2\"").is_err());
    }

    #[test]
    fn test_equality_is_tag_strict() {
        assert_eq!(eval("1 == \"1\"").unwrap(), Value::Bool(false));
        assert_eq!(eval("1 != \"1\"").unwrap(), Value::Bool(true));
        assert_eq!(eval("1 == 2").unwrap(), Value::Bool(false));
        assert_eq!(eval("2 == 2").unwrap(), Value::Bool(true));
        assert_eq!(eval("nil == nil").unwrap(), Value::Bool(true));
        assert_eq!(eval("nil == false").unwrap(), Value::Bool(false));
    }

    #[test]
    fn test_unary_negation() {
        assert_eq!(eval("-3").unwrap(), Value::Number(-3.0));
        let err = eval("-\"abc\"").unwrap_err();
        assert_eq!(
            err,
            Error::TypeError {
                expected: "number".to_string(),
                got: "string".to_string(),
            }
        );
    }

    #[test]
    fn test_logical_not_uses_truthiness() {
        assert_eq!(eval("!nil").unwrap(), Value::Bool(true));
        assert_eq!(eval("!false").unwrap(), Value::Bool(true));
        assert_eq!(eval("!0").unwrap(), Value::Bool(false));
        assert_eq!(eval("!\"\"").unwrap(), Value::Bool(false));
        assert_eq!(eval("!!true").unwrap(), Value::Bool(true));
    }

    #[test]
    fn test_undefined_variable() {
        let err = eval("ghost").unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_left_operand_evaluated_first() {
        // The left operand's error surfaces even when the right one would
        // also fail
        let err = eval("missing + other").unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedVariable {
                name: "missing".to_string()
            }
        );
    }
}
