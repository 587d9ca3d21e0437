//! Syntax analysis: token sequence to statement/expression tree

mod ast;
mod descent;

pub use ast::{BinaryOp, Expr, Stmt, UnaryOp};
pub use descent::Parser;
