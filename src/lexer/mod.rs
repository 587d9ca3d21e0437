//! Lexical analysis: source text to token sequence

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{render_number_literal, Token, TokenKind};
