//! Error types for the lispfront lexer and parser

use crate::lexer::TokenKind;
use thiserror::Error;

/// Front-end errors
///
/// Every error is fatal: the lexer and parser stop at the first one and no
/// partial result is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Lexical errors
    /// Character that cannot start any token
    ///
    /// **Triggered by:** Characters outside the token alphabet
    /// **Example:** `(+ 1 #)`, or a single `;` (comments need `;;`)
    #[error("Lexical error at line {line}, column {col}: unexpected character '{ch}'")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Line number of the character
        line: usize,
        /// Column number of the character
        col: usize,
    },

    /// String literal without a closing quote
    ///
    /// **Triggered by:** End of input inside a string literal
    /// **Example:** `(print "abc` (position reported is the opening quote)
    #[error("Lexical error at line {line}, column {col}: unterminated string, expected '\"' before end of input")]
    UnterminatedString {
        /// Line of the opening quote
        line: usize,
        /// Column of the opening quote
        col: usize,
    },

    // Syntax errors
    /// Lookahead token does not fit the grammar rule being applied
    ///
    /// **Triggered by:** Wrong token at an `expect` or no applicable alternative
    /// **Example:** `(+ 1 2` (expected `)`, found end of input)
    #[error("Syntax error at line {line}, column {col}: expected {expected}, found {found}('{lexeme}')")]
    SyntaxError {
        /// Description of what the grammar expected
        expected: String,
        /// Kind of the token actually found
        found: TokenKind,
        /// Lexeme of the token actually found
        lexeme: String,
        /// Line of the token actually found
        line: usize,
        /// Column of the token actually found
        col: usize,
    },

    // Lowering errors
    /// Parse tree that violates the node shape rules
    ///
    /// Only raised when lowering a hand-built or modified [`crate::parser::Node`]
    /// into the typed AST; trees produced by the parser always lower cleanly
    /// unless an integer literal overflows `i64`.
    #[error("Malformed {kind} node: {reason}")]
    MalformedTree {
        /// Tag of the offending node
        kind: String,
        /// What is wrong with it
        reason: String,
    },
}

impl Error {
    /// Create a malformed-tree error for the given node kind
    pub fn malformed(kind: impl ToString, reason: impl Into<String>) -> Self {
        Error::MalformedTree {
            kind: kind.to_string(),
            reason: reason.into(),
        }
    }

    /// Source position (line, column) the error refers to, if any
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnexpectedChar { line, col, .. }
            | Error::UnterminatedString { line, col }
            | Error::SyntaxError { line, col, .. } => Some((*line, *col)),
            Error::MalformedTree { .. } => None,
        }
    }

    /// True for errors raised by the lexer
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedChar { .. } | Error::UnterminatedString { .. }
        )
    }

    /// True for errors raised by the parser
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::SyntaxError { .. })
    }
}

/// Result type for lispfront operations
pub type Result<T> = std::result::Result<T, Error>;
