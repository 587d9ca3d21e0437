use serde::{Deserialize, Serialize};
use std::fmt;

use crate::lexer::render_number_literal;

/// Expressions
///
/// The tree is built once by the parser and read-only afterwards. Nodes own
/// their children; there are no back-references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Number literal expression
    Number(f64),
    /// String literal expression (quotes already stripped)
    String(String),
    /// Boolean literal expression
    Bool(bool),
    /// Nil literal expression
    Nil,

    /// Parenthesized expression
    Grouping(Box<Expr>),

    /// Unary operation expression
    Unary {
        /// Unary operator to apply
        op: UnaryOp,
        /// Operand expression
        operand: Box<Expr>,
    },

    /// Binary operation expression
    Binary {
        /// Binary operator to apply
        op: BinaryOp,
        /// Left operand expression
        left: Box<Expr>,
        /// Right operand expression
        right: Box<Expr>,
    },

    /// Variable reference expression
    Variable(String),

    /// Assignment to an already-declared variable
    Assign {
        /// Name of the variable to assign to
        name: String,
        /// Expression producing the new value
        value: Box<Expr>,
    },
}

/// Statements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Expression evaluated for its side effects, result discarded
    Expression(Expr),

    /// `print expr;`
    Print(Expr),

    /// `var name;` or `var name = expr;`
    Var {
        /// Name of the variable being declared
        name: String,
        /// Optional initializer (absence binds nil)
        initializer: Option<Expr>,
    },

    /// `{ ... }` block introducing a nested scope
    Block(Vec<Stmt>),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition / string concatenation (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Mul,
    /// Division (/)
    Div,
    /// Equality (==)
    Eq,
    /// Inequality (!=)
    NotEq,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    LtEq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    GtEq,
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// Arithmetic negation (-)
    Neg,
    /// Logical negation (!)
    Not,
}

impl BinaryOp {
    /// Operator symbol as written in source
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

impl UnaryOp {
    /// Operator symbol as written in source
    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Expr {
    /// Fully parenthesized prefix rendering, e.g.
    /// `(* (group (+ 1.0 2.0)) 3.0)`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Number(n) => f.write_str(&render_number_literal(*n)),
            Expr::String(s) => f.write_str(s),
            Expr::Bool(b) => write!(f, "{}", b),
            Expr::Nil => f.write_str("nil"),
            Expr::Grouping(inner) => write!(f, "(group {})", inner),
            Expr::Unary { op, operand } => write!(f, "({} {})", op, operand),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", op, left, right),
            Expr::Variable(name) => write!(f, "(var {})", name),
            Expr::Assign { name, value } => write!(f, "(= {} {})", name, value),
        }
    }
}
