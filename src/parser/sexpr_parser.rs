use super::node::{Node, NodeKind};
use crate::error::{Error, Result};
use crate::lexer::{Lexer, Token, TokenBuffer, TokenKind, TokenSource};
use tracing::{debug, trace};

/// Deepest `(` nesting accepted before parsing fails with a syntax error
pub const MAX_NESTING_DEPTH: usize = 256;

/// Recursive-descent parser with a single token of lookahead
///
/// Pulls tokens lazily from its [`TokenSource`] and keeps exactly one of
/// them buffered. Parsing stops at the first error. List nesting is bounded
/// by [`MAX_NESTING_DEPTH`] so that hostile input fails instead of
/// overflowing the stack.
#[derive(Debug)]
pub struct Parser<S: TokenSource> {
    source: S,
    lookahead: Token,
    /// Number of currently open list expressions
    depth: usize,
}

impl<'a> Parser<Lexer<'a>> {
    /// Creates a parser that lexes `source` on demand
    pub fn from_source(source: &'a str) -> Result<Self> {
        Parser::new(Lexer::new(source))
    }
}

impl Parser<TokenBuffer> {
    /// Creates a parser over already scanned tokens
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Self> {
        Parser::new(TokenBuffer::new(tokens))
    }
}

impl<S: TokenSource> Parser<S> {
    /// Creates a parser, pulling the first lookahead token immediately
    pub fn new(mut source: S) -> Result<Self> {
        let lookahead = source.next_token()?;
        Ok(Parser {
            source,
            lookahead,
            depth: 0,
        })
    }

    /// The current lookahead token
    pub fn peek(&self) -> &Token {
        &self.lookahead
    }

    /// Parses the whole input into a `Program` node
    ///
    /// ```text
    /// program : expr* EOF
    /// ```
    pub fn parse(&mut self) -> Result<Node> {
        let mut exprs = Vec::new();

        while !self.check(TokenKind::EndOfInput) {
            exprs.push(self.parse_expr()?);
        }

        debug!(expressions = exprs.len(), "parsed program");
        Ok(Node::branch(NodeKind::Program, exprs))
    }

    /// ```text
    /// expr : atom | listExpr
    /// ```
    fn parse_expr(&mut self) -> Result<Node> {
        let kind = self.lookahead.kind;

        if kind.is_atom() {
            return self.parse_atom();
        }
        if kind == TokenKind::LeftParen {
            return self.parse_list_expr();
        }

        Err(self.expected_error("expression"))
    }

    /// ```text
    /// atom : INT | STRING | BOOL | IDENT
    /// ```
    fn parse_atom(&mut self) -> Result<Node> {
        let kind = match self.lookahead.kind {
            TokenKind::Int => NodeKind::IntLiteral,
            TokenKind::String => NodeKind::StringLiteral,
            TokenKind::Bool => NodeKind::BoolLiteral,
            TokenKind::Identifier => NodeKind::Identifier,
            _ => return Err(self.expected_error("atom")),
        };

        let token = self.advance()?;
        Ok(Node::leaf(kind, token.lexeme))
    }

    /// ```text
    /// listExpr : '(' form ')'
    /// ```
    fn parse_list_expr(&mut self) -> Result<Node> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.expected_error("shallower nesting"));
        }

        self.expect(TokenKind::LeftParen)?;
        self.depth += 1;
        let inside = self.parse_form()?;
        self.expect(TokenKind::RightParen)?;
        self.depth -= 1;
        Ok(Node::branch(NodeKind::ListExpr, vec![inside]))
    }

    /// ```text
    /// form : ifExpr | doExpr | defExpr | defnExpr | letExpr | appExpr
    /// ```
    fn parse_form(&mut self) -> Result<Node> {
        let kind = self.lookahead.kind;
        if kind.is_special_form() {
            trace!(form = %kind, line = self.lookahead.line, "special form");
        }

        match kind {
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Do => self.parse_do_expr(),
            TokenKind::Def => self.parse_def_expr(),
            TokenKind::Defn => self.parse_defn_expr(),
            TokenKind::Let => self.parse_let_expr(),
            // Anything else is an operator or function call
            _ => self.parse_app_expr(),
        }
    }

    /// ```text
    /// ifExpr : 'if' expr expr expr?
    /// ```
    fn parse_if_expr(&mut self) -> Result<Node> {
        self.expect(TokenKind::If)?;
        let condition = self.parse_expr()?;
        let then_branch = self.parse_expr()?;

        let mut children = vec![condition, then_branch];
        if !self.check(TokenKind::RightParen) {
            children.push(self.parse_expr()?);
        }

        Ok(Node::branch(NodeKind::IfExpr, children))
    }

    /// ```text
    /// doExpr : 'do' expr+
    /// ```
    fn parse_do_expr(&mut self) -> Result<Node> {
        self.expect(TokenKind::Do)?;

        if self.check(TokenKind::RightParen) {
            return Err(self.expected_error("at least one expression"));
        }

        let exprs = self.parse_exprs_until_close()?;
        Ok(Node::branch(NodeKind::DoExpr, exprs))
    }

    /// ```text
    /// defExpr : 'def' IDENT expr
    /// ```
    fn parse_def_expr(&mut self) -> Result<Node> {
        self.expect(TokenKind::Def)?;
        let name = self.expect(TokenKind::Identifier)?;
        let value = self.parse_expr()?;
        Ok(Node::named(NodeKind::DefExpr, name.lexeme, vec![value]))
    }

    /// ```text
    /// defnExpr : 'defn' IDENT '(' IDENT* ')' expr
    /// ```
    fn parse_defn_expr(&mut self) -> Result<Node> {
        self.expect(TokenKind::Defn)?;
        let name = self.expect(TokenKind::Identifier)?;

        self.expect(TokenKind::LeftParen)?;
        let mut params = Vec::new();
        while self.check(TokenKind::Identifier) {
            let param = self.advance()?;
            params.push(Node::leaf(NodeKind::Param, param.lexeme));
        }
        self.expect(TokenKind::RightParen)?;

        let body = self.parse_expr()?;

        let params = Node::branch(NodeKind::ParamList, params);
        Ok(Node::named(NodeKind::DefnExpr, name.lexeme, vec![params, body]))
    }

    /// ```text
    /// letExpr : 'let' '(' (IDENT expr)* ')' expr
    /// ```
    fn parse_let_expr(&mut self) -> Result<Node> {
        self.expect(TokenKind::Let)?;
        self.expect(TokenKind::LeftParen)?;

        let mut bindings = Vec::new();
        while self.check(TokenKind::Identifier) {
            let name = self.advance()?;
            let value = self.parse_expr()?;
            bindings.push(Node::named(NodeKind::LetBinding, name.lexeme, vec![value]));
        }
        self.expect(TokenKind::RightParen)?;

        let body = self.parse_expr()?;
        let bindings = Node::branch(NodeKind::LetBindings, bindings);
        Ok(Node::branch(NodeKind::LetExpr, vec![bindings, body]))
    }

    /// ```text
    /// appExpr : operator expr*
    /// ```
    ///
    /// No arity checking; the argument count is the evaluator's concern.
    fn parse_app_expr(&mut self) -> Result<Node> {
        if !self.lookahead.kind.is_operator() {
            return Err(self.expected_error("operator or function name"));
        }

        let op = self.advance()?;
        let args = self.parse_exprs_until_close()?;
        Ok(Node::named(NodeKind::AppExpr, op.lexeme, args))
    }

    /// Reads expressions until `)` or end of input; the caller's
    /// `expect(')')` reports a missing close paren.
    fn parse_exprs_until_close(&mut self) -> Result<Vec<Node>> {
        let mut exprs = Vec::new();
        while !self.check(TokenKind::RightParen) && !self.check(TokenKind::EndOfInput) {
            exprs.push(self.parse_expr()?);
        }
        Ok(exprs)
    }

    /// Replaces the lookahead with the next token, returning the old one
    fn advance(&mut self) -> Result<Token> {
        let next = self.source.next_token()?;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Consumes the lookahead if it has the given kind
    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.expected_error(kind.describe()))
        }
    }

    /// Syntax error describing what was expected and what the lookahead is
    fn expected_error(&self, expected: &str) -> Error {
        let token = &self.lookahead;
        debug!(expected, found = %token, "syntax error");
        Error::SyntaxError {
            expected: expected.to_string(),
            found: token.kind,
            lexeme: token.lexeme.clone(),
            line: token.line,
            col: token.column,
        }
    }
}
