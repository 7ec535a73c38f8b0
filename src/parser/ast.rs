//! Typed AST
//!
//! Lowers the generic [`Node`] tree into a closed sum type an evaluator can
//! match exhaustively. `ListExpr` wrappers disappear, integer literals become
//! `i64`, and every shape rule of the parse tree is checked on the way.

use super::node::{Node, NodeKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Top-level expressions in source order
    pub body: Vec<Expr>,
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal
    Int(i64),
    /// String literal
    Str(String),
    /// Boolean literal
    Bool(bool),
    /// Variable reference
    Var(String),

    /// Global definition: (def name value)
    Def {
        /// Bound name
        name: String,
        /// Bound value
        value: Box<Expr>,
    },

    /// Function definition: (defn name (params...) body)
    Defn {
        /// Function name
        name: String,
        /// Parameter names in order
        params: Vec<String>,
        /// Function body
        body: Box<Expr>,
    },

    /// Conditional: (if cond then [else])
    If {
        /// Condition
        cond: Box<Expr>,
        /// Evaluated when the condition holds
        then_branch: Box<Expr>,
        /// Evaluated otherwise, if present
        else_branch: Option<Box<Expr>>,
    },

    /// Local bindings: (let (name value ...) body)
    Let {
        /// Bindings in source order
        bindings: Vec<LetBinding>,
        /// Body evaluated with the bindings in scope
        body: Box<Expr>,
    },

    /// Sequence: (do expr+)
    Do(Vec<Expr>),

    /// Operator or function call: (f args...)
    Call {
        /// Operator lexeme or function name
        func: String,
        /// Arguments in order
        args: Vec<Expr>,
    },
}

/// One `name value` pair of a `let`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetBinding {
    /// Bound name
    pub name: String,
    /// Bound value
    pub value: Expr,
}

impl Program {
    /// Lowers a parse tree.
    ///
    /// A root that is not a `Program` node is treated as a program consisting
    /// of that single expression.
    pub fn from_node(root: &Node) -> Result<Self> {
        if root.kind != NodeKind::Program {
            return Ok(Program {
                body: vec![Expr::from_node(root)?],
            });
        }

        let body = root
            .children
            .iter()
            .map(Expr::from_node)
            .collect::<Result<Vec<_>>>()?;
        Ok(Program { body })
    }
}

impl TryFrom<&Node> for Program {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        Program::from_node(node)
    }
}

impl Expr {
    /// Lowers a single expression node
    pub fn from_node(node: &Node) -> Result<Self> {
        match node.kind {
            NodeKind::IntLiteral => {
                let text = payload(node)?;
                let n = text.parse::<i64>().map_err(|_| {
                    Error::malformed(node.kind, format!("integer literal {} out of range", text))
                })?;
                Ok(Expr::Int(n))
            }
            NodeKind::StringLiteral => Ok(Expr::Str(payload(node)?.to_string())),
            NodeKind::BoolLiteral => match payload(node)? {
                "true" => Ok(Expr::Bool(true)),
                "false" => Ok(Expr::Bool(false)),
                other => Err(Error::malformed(
                    node.kind,
                    format!("`{}` is not a boolean", other),
                )),
            },
            NodeKind::Identifier => Ok(Expr::Var(payload(node)?.to_string())),

            NodeKind::ListExpr => {
                arity(node, 1)?;
                Expr::from_node(&node.children[0])
            }

            NodeKind::DefExpr => {
                arity(node, 1)?;
                Ok(Expr::Def {
                    name: payload(node)?.to_string(),
                    value: Box::new(Expr::from_node(&node.children[0])?),
                })
            }

            NodeKind::DefnExpr => {
                arity(node, 2)?;
                let param_list = expect_kind(&node.children[0], NodeKind::ParamList)?;
                let params = param_list
                    .children
                    .iter()
                    .map(|p| -> Result<String> {
                        expect_kind(p, NodeKind::Param)?;
                        Ok(payload(p)?.to_string())
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Expr::Defn {
                    name: payload(node)?.to_string(),
                    params,
                    body: Box::new(Expr::from_node(&node.children[1])?),
                })
            }

            NodeKind::IfExpr => {
                let (cond, then_branch, else_branch) = match node.children.as_slice() {
                    [c, t] => (c, t, None),
                    [c, t, e] => (c, t, Some(e)),
                    other => {
                        return Err(Error::malformed(
                            node.kind,
                            format!("expected 2 or 3 children, got {}", other.len()),
                        ))
                    }
                };

                Ok(Expr::If {
                    cond: Box::new(Expr::from_node(cond)?),
                    then_branch: Box::new(Expr::from_node(then_branch)?),
                    else_branch: else_branch
                        .map(|e| Expr::from_node(e).map(Box::new))
                        .transpose()?,
                })
            }

            NodeKind::DoExpr => {
                if node.children.is_empty() {
                    return Err(Error::malformed(node.kind, "empty body"));
                }
                Ok(Expr::Do(lower_all(&node.children)?))
            }

            NodeKind::LetExpr => {
                arity(node, 2)?;
                let bindings_node = expect_kind(&node.children[0], NodeKind::LetBindings)?;
                let bindings = bindings_node
                    .children
                    .iter()
                    .map(|b| -> Result<LetBinding> {
                        expect_kind(b, NodeKind::LetBinding)?;
                        arity(b, 1)?;
                        Ok(LetBinding {
                            name: payload(b)?.to_string(),
                            value: Expr::from_node(&b.children[0])?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;

                Ok(Expr::Let {
                    bindings,
                    body: Box::new(Expr::from_node(&node.children[1])?),
                })
            }

            NodeKind::AppExpr => Ok(Expr::Call {
                func: payload(node)?.to_string(),
                args: lower_all(&node.children)?,
            }),

            NodeKind::Program
            | NodeKind::ParamList
            | NodeKind::Param
            | NodeKind::LetBindings
            | NodeKind::LetBinding => Err(Error::malformed(
                node.kind,
                "not allowed in expression position",
            )),
        }
    }
}

impl TryFrom<&Node> for Expr {
    type Error = Error;

    fn try_from(node: &Node) -> Result<Self> {
        Expr::from_node(node)
    }
}

fn lower_all(nodes: &[Node]) -> Result<Vec<Expr>> {
    nodes.iter().map(Expr::from_node).collect()
}

fn payload(node: &Node) -> Result<&str> {
    node.value()
        .ok_or_else(|| Error::malformed(node.kind, "missing value"))
}

fn arity(node: &Node, expected: usize) -> Result<()> {
    if node.children.len() == expected {
        Ok(())
    } else {
        Err(Error::malformed(
            node.kind,
            format!(
                "expected {} children, got {}",
                expected,
                node.children.len()
            ),
        ))
    }
}

fn expect_kind(node: &Node, kind: NodeKind) -> Result<&Node> {
    if node.kind == kind {
        Ok(node)
    } else {
        Err(Error::malformed(
            node.kind,
            format!("found where {} was expected", kind),
        ))
    }
}

/// Writes `[a, b, c]`
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter, items: &[T]) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "]")
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Program")?;
        write_list(f, &self.body)
    }
}

impl fmt::Display for LetBinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "Int({})", n),
            Expr::Str(s) => write!(f, "String(\"{}\")", s),
            Expr::Bool(b) => write!(f, "Bool({})", b),
            Expr::Var(name) => write!(f, "Var({})", name),
            Expr::Def { name, value } => write!(f, "Def({}, {})", name, value),
            Expr::Defn { name, params, body } => {
                write!(f, "Defn({}, params=[{}], body={})", name, params.join(", "), body)
            }
            Expr::If {
                cond,
                then_branch,
                else_branch,
            } => {
                write!(f, "If({}, {}, ", cond, then_branch)?;
                match else_branch {
                    Some(e) => write!(f, "{})", e),
                    None => write!(f, "None)"),
                }
            }
            Expr::Let { bindings, body } => {
                write!(f, "Let(")?;
                write_list(f, bindings)?;
                write!(f, ", body={})", body)
            }
            Expr::Do(exprs) => {
                write!(f, "Do")?;
                write_list(f, exprs)
            }
            Expr::Call { func, args } => {
                write!(f, "Call({}, args=", func)?;
                write_list(f, args)?;
                write!(f, ")")
            }
        }
    }
}
