//! Parser Module
//!
//! Recursive-descent parsing of the token stream into a parse tree, plus
//! lowering of that tree into a typed AST.

pub mod ast;
mod node;
mod sexpr_parser;

pub use node::{Node, NodeKind};
pub use sexpr_parser::{Parser, MAX_NESTING_DEPTH};
