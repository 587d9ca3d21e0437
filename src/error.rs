//! Error types for the Lexa interpreter

use thiserror::Error;

/// Lexa interpreter errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Character the scanner has no rule for
    ///
    /// **Triggered by:** source characters outside the language alphabet
    /// **Example:** `var a = 1 # 2;` (`#` is not a Lexa character)
    #[error("[line {line}] Error: Unexpected character: {ch}")]
    UnexpectedCharacter {
        /// Line number where the character appears
        line: usize,
        /// The offending character
        ch: char,
    },

    /// String literal with no closing quote before end of input
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// Line number where the scan gave up
        line: usize,
    },

    // Syntax errors
    /// A grammar expectation violated during parsing
    ///
    /// **Triggered by:** missing `;`, unmatched `(`, missing identifier
    /// after `var`, assignment to a non-variable target
    #[error("[line {line}] Error at '{lexeme}': {message}")]
    Syntax {
        /// Line of the token that violated the expectation
        line: usize,
        /// Lexeme of the offending token
        lexeme: String,
        /// What the parser expected
        message: String,
    },

    // Runtime errors
    /// Reference to a variable that was never declared
    ///
    /// **Triggered by:** reading or assigning a name with no `var` binding
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable {
        /// Variable name
        name: String,
    },

    /// Operand of the wrong type for a unary operator
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// No accepted operand-type combination for a binary operator
    #[error("Invalid operands for '{op}': {left_type} and {right_type}")]
    InvalidOperands {
        /// Operator symbol
        op: String,
        /// Left operand type
        left_type: String,
        /// Right operand type
        right_type: String,
    },

    /// General runtime error
    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Error classification, used by the front end to pick an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Scanner-level error (unexpected character, unterminated string)
    Lexical,
    /// Parser-level error (grammar expectation violated)
    Syntax,
    /// Evaluation-level error (undefined variable, operand type mismatch)
    Runtime,
}

impl ErrorClass {
    /// Conventional process exit code for this error class
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorClass::Lexical | ErrorClass::Syntax => 65,
            ErrorClass::Runtime => 70,
        }
    }
}

impl Error {
    /// Create a runtime error with a message
    pub fn runtime(msg: impl Into<String>) -> Self {
        Error::RuntimeError(msg.into())
    }

    /// Classify the error for exit-code mapping
    pub fn classify(&self) -> ErrorClass {
        match self {
            Error::UnexpectedCharacter { .. } | Error::UnterminatedString { .. } => {
                ErrorClass::Lexical
            }
            Error::Syntax { .. } => ErrorClass::Syntax,
            Error::UndefinedVariable { .. }
            | Error::TypeError { .. }
            | Error::InvalidOperands { .. }
            | Error::RuntimeError(_) => ErrorClass::Runtime,
        }
    }
}

/// Result type for Lexa operations
pub type Result<T> = std::result::Result<T, Error>;
