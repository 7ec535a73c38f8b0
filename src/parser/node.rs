use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag of a parse tree node, one per grammar production
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root: every top-level expression
    Program,
    /// Integer literal, value is the digit text
    IntLiteral,
    /// String literal, value is the text between the quotes
    StringLiteral,
    /// `true` or `false`
    BoolLiteral,
    /// Variable reference, value is the name
    Identifier,
    /// Parenthesized form, exactly one child
    ListExpr,
    /// `(if cond then [else])`
    IfExpr,
    /// `(do expr+)`
    DoExpr,
    /// `(def name value)`, value is the name
    DefExpr,
    /// `(defn name (params) body)`, value is the name
    DefnExpr,
    /// `(let (name expr ...) body)`
    LetExpr,
    /// Parameters of a `defn`
    ParamList,
    /// One parameter, value is its name
    Param,
    /// Bindings of a `let`
    LetBindings,
    /// One binding, value is the bound name, one child
    LetBinding,
    /// Operator or function application, value is the operator lexeme
    AppExpr,
}

impl NodeKind {
    /// Tag name as it appears in dumps and serialized trees
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::IntLiteral => "IntLiteral",
            NodeKind::StringLiteral => "StringLiteral",
            NodeKind::BoolLiteral => "BoolLiteral",
            NodeKind::Identifier => "Identifier",
            NodeKind::ListExpr => "ListExpr",
            NodeKind::IfExpr => "IfExpr",
            NodeKind::DoExpr => "DoExpr",
            NodeKind::DefExpr => "DefExpr",
            NodeKind::DefnExpr => "DefnExpr",
            NodeKind::LetExpr => "LetExpr",
            NodeKind::ParamList => "ParamList",
            NodeKind::Param => "Param",
            NodeKind::LetBindings => "LetBindings",
            NodeKind::LetBinding => "LetBinding",
            NodeKind::AppExpr => "AppExpr",
        }
    }

    /// Whether nodes of this kind carry a `value` payload
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            NodeKind::IntLiteral
                | NodeKind::StringLiteral
                | NodeKind::BoolLiteral
                | NodeKind::Identifier
                | NodeKind::DefExpr
                | NodeKind::DefnExpr
                | NodeKind::Param
                | NodeKind::LetBinding
                | NodeKind::AppExpr
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse tree node
///
/// A tagged record rather than one type per production: `kind` says which
/// production built it, `value` holds the literal text or name for kinds
/// that have one, and `children` are in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Production that built the node
    pub kind: NodeKind,
    /// Literal text, identifier, operator or bound name
    pub value: Option<String>,
    /// Sub-nodes in left-to-right order
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a node from its parts
    pub fn new(kind: NodeKind, value: Option<String>, children: Vec<Node>) -> Self {
        Node {
            kind,
            value,
            children,
        }
    }

    /// Node with a payload and no children
    pub fn leaf(kind: NodeKind, value: impl Into<String>) -> Self {
        Node::new(kind, Some(value.into()), Vec::new())
    }

    /// Structural node without a payload
    pub fn branch(kind: NodeKind, children: Vec<Node>) -> Self {
        Node::new(kind, None, children)
    }

    /// Node with both a payload and children
    pub fn named(kind: NodeKind, value: impl Into<String>, children: Vec<Node>) -> Self {
        Node::new(kind, Some(value.into()), children)
    }

    /// Payload as a string slice
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Child at `index`
    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    /// Number of nodes in this subtree, this one included
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    fn write_indented(&self, f: &mut fmt::Formatter, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.kind, indent = depth * 2)?;
        if let Some(value) = &self.value {
            write!(f, " {:?}", value)?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Indented tree dump, one node per line
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
