//! Lexical analysis
//!
//! Converts source text into a stream of tokens, one token per request.

mod scanner;
mod source;
mod token;

pub use scanner::Lexer;
pub use source::{TokenBuffer, TokenSource};
pub use token::{Token, TokenKind, EOF_LEXEME};
