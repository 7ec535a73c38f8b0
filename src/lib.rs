//! # lispfront
//!
//! Lexer and recursive-descent parser for a small S-expression language with
//! five special forms (`if`, `do`, `def`, `defn`, `let`), arithmetic and
//! comparison operators, a few builtins (`print str list nth head tail`) and
//! user-defined function calls.
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → Node tree → (optional) typed AST
//! ```
//!
//! - [`Lexer`] - Produces one [`Token`] per request, with 1-based line/column
//! - [`Parser`] - LL(1) recursive descent holding a single lookahead token
//! - [`Node`] - Generic parse tree node (kind tag, optional value, children)
//! - [`ast::Program`] - Strictly typed tree for evaluators
//!
//! ## Usage
//!
//! ```rust
//! use lispfront::{NodeKind, Parser};
//!
//! # fn main() -> lispfront::Result<()> {
//! let mut parser = Parser::from_source("(defn f () 1)")?;
//! let program = parser.parse()?;
//!
//! let defn = &program.children[0].children[0];
//! assert_eq!(defn.kind, NodeKind::DefnExpr);
//! assert_eq!(defn.value(), Some("f"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Both stages fail fast: the first lexical or syntax error aborts and is
//! returned with its source position.
//!
//! ```rust
//! let err = lispfront::parse("(+ 1 2").unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Syntax error at line 1, column 7: expected `)`, found EOF('<EOF>')"
//! );
//! ```

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{Lexer, Token, TokenBuffer, TokenKind, TokenSource};
pub use parser::{ast, Node, NodeKind, Parser, MAX_NESTING_DEPTH};

/// Tokenizes `source`, returning every token including the final `EndOfInput`
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(source).tokenize()
}

/// Parses `source` into a `Program` node
pub fn parse(source: &str) -> Result<Node> {
    Parser::from_source(source)?.parse()
}

/// Parses `source` and lowers it to the typed AST
pub fn parse_program(source: &str) -> Result<ast::Program> {
    ast::Program::from_node(&parse(source)?)
}
