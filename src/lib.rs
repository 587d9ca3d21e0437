//! # Lexa
//!
//! A tree-walking interpreter for a small, dynamically-typed scripting
//! language in the Lox family: a lexical scanner, a recursive-descent
//! parser, and a direct evaluator over the resulting tree. No bytecode,
//! no separate compilation stage.
//!
//! ## Quick start
//!
//! ```rust
//! use lexa::{Interpreter, Parser, Scanner, Value};
//!
//! # fn main() -> lexa::Result<()> {
//! let source = "(1 + 2) * 3";
//!
//! // Tokenize
//! let (tokens, errors) = Scanner::new(source).scan_tokens();
//! assert!(errors.is_empty());
//!
//! // Parse a single expression
//! let expr = Parser::new(tokens).parse_expression()?;
//!
//! // Evaluate
//! let value = Interpreter::new().evaluate(&expr)?;
//! assert_eq!(value, Value::Number(9.0));
//! # Ok(())
//! # }
//! ```
//!
//! Whole programs go through [`Parser::parse`] and [`Interpreter::run`]:
//!
//! ```rust
//! use lexa::{Interpreter, Parser, Scanner};
//!
//! # fn main() -> lexa::Result<()> {
//! let source = r#"
//!     var greeting = "hello";
//!     { var greeting = "shadowed"; }
//!     print greeting;
//! "#;
//!
//! let (tokens, errors) = Scanner::new(source).scan_tokens();
//! assert!(errors.is_empty());
//! let statements = Parser::new(tokens).parse()?;
//! Interpreter::new().run(&statements)?; // prints "hello"
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → Parser → AST → Interpreter → Output
//! ```
//!
//! - [`Scanner`] tokenizes source text, accumulating lexical errors
//! - [`Parser`] builds the statement/expression tree with one-token lookahead
//! - [`Interpreter`] walks the tree against a scope-chained [`Environment`]
//! - [`Value`] is the closed runtime value union
//! - [`Error`] covers all three failure classes (lexical, syntax, runtime)
//!
//! The language is deliberately small: expressions, `print`, `var`
//! declarations, assignment, and block scoping. Keywords for the larger
//! Lox language (`if`, `while`, `fun`, `class`, ...) are reserved by the
//! scanner but rejected by the parser.

/// Version of the Lexa interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

// Re-export main types
pub use error::{Error, ErrorClass, Result};
pub use lexer::{Scanner, Token, TokenKind};
pub use parser::{BinaryOp, Expr, Parser, Stmt, UnaryOp};
pub use runtime::{Environment, Interpreter, Value};
