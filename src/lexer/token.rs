use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The type of token
    pub kind: TokenKind,
    /// Original text of the token (string literals exclude their quotes)
    pub lexeme: String,
    /// Line number where token appears (1-indexed)
    pub line: usize,
    /// Column number where token starts (1-indexed)
    pub column: usize,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    /// Creates the end-of-input token at the given position
    pub fn eof(line: usize, column: usize) -> Self {
        Token::new(TokenKind::EndOfInput, EOF_LEXEME, line, column)
    }

    /// True if this is the end-of-input token
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}('{}')@{}:{}",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Lexeme carried by the end-of-input token
pub const EOF_LEXEME: &str = "<EOF>";

/// All possible token types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Delimiters
    /// Left parenthesis (
    LeftParen,
    /// Right parenthesis )
    RightParen,

    // Operators
    /// Plus operator (+)
    Plus,
    /// Minus operator (-)
    Minus,
    /// Star operator (*)
    Star,
    /// Slash operator (/)
    Slash,
    /// Equality operator (=)
    Eq,
    /// Less than operator (<)
    Lt,
    /// Greater than operator (>)
    Gt,

    // Keywords
    /// `if` special form
    If,
    /// `do` special form
    Do,
    /// `def` special form
    Def,
    /// `defn` special form
    Defn,
    /// `let` special form
    Let,
    /// `print` builtin
    Print,
    /// `str` builtin
    Str,
    /// `list` builtin
    List,
    /// `nth` builtin
    Nth,
    /// `head` builtin
    Head,
    /// `tail` builtin
    Tail,

    // Literals
    /// `true` or `false`
    Bool,
    /// Unsigned integer literal
    Int,
    /// Double-quoted string literal
    String,

    /// Identifier (anything alphanumeric that is not reserved)
    Identifier,

    // Special
    /// End of input marker
    EndOfInput,
}

impl TokenKind {
    /// Look up a reserved word.
    ///
    /// `true` and `false` map to [`TokenKind::Bool`]; everything else that is
    /// not reserved returns `None` and lexes as an identifier.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        let kind = match s {
            "if" => TokenKind::If,
            "do" => TokenKind::Do,
            "def" => TokenKind::Def,
            "defn" => TokenKind::Defn,
            "let" => TokenKind::Let,
            "print" => TokenKind::Print,
            "str" => TokenKind::Str,
            "list" => TokenKind::List,
            "nth" => TokenKind::Nth,
            "head" => TokenKind::Head,
            "tail" => TokenKind::Tail,
            "true" | "false" => TokenKind::Bool,
            _ => return None,
        };
        Some(kind)
    }

    /// Single-character punctuation and operator tokens
    pub fn from_punct(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if token is a reserved word (special form or builtin name)
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Do
                | TokenKind::Def
                | TokenKind::Defn
                | TokenKind::Let
                | TokenKind::Print
                | TokenKind::Str
                | TokenKind::List
                | TokenKind::Nth
                | TokenKind::Head
                | TokenKind::Tail
        )
    }

    /// Check if token starts one of the five special forms
    pub fn is_special_form(&self) -> bool {
        matches!(
            self,
            TokenKind::If | TokenKind::Do | TokenKind::Def | TokenKind::Defn | TokenKind::Let
        )
    }

    /// Check if token may stand in operator position of an application
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Eq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Print
                | TokenKind::Str
                | TokenKind::List
                | TokenKind::Nth
                | TokenKind::Head
                | TokenKind::Tail
                | TokenKind::Identifier
        )
    }

    /// Check if token is a literal or identifier, i.e. a complete expression
    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            TokenKind::Int | TokenKind::String | TokenKind::Bool | TokenKind::Identifier
        )
    }

    /// Stable diagnostic name of the kind
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "LPAREN",
            TokenKind::RightParen => "RPAREN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::If => "IF",
            TokenKind::Do => "DO",
            TokenKind::Def => "DEF",
            TokenKind::Defn => "DEFN",
            TokenKind::Let => "LET",
            TokenKind::Print => "PRINT",
            TokenKind::Str => "STRFN",
            TokenKind::List => "LISTFN",
            TokenKind::Nth => "NTH",
            TokenKind::Head => "HEAD",
            TokenKind::Tail => "TAIL",
            TokenKind::Bool => "BOOL",
            TokenKind::Int => "INT",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENT",
            TokenKind::EndOfInput => "EOF",
        }
    }

    /// Human-readable description used in "expected ..." messages
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "`(`",
            TokenKind::RightParen => "`)`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Eq => "`=`",
            TokenKind::Lt => "`<`",
            TokenKind::Gt => "`>`",
            TokenKind::If => "`if`",
            TokenKind::Do => "`do`",
            TokenKind::Def => "`def`",
            TokenKind::Defn => "`defn`",
            TokenKind::Let => "`let`",
            TokenKind::Print => "`print`",
            TokenKind::Str => "`str`",
            TokenKind::List => "`list`",
            TokenKind::Nth => "`nth`",
            TokenKind::Head => "`head`",
            TokenKind::Tail => "`tail`",
            TokenKind::Bool => "boolean",
            TokenKind::Int => "integer",
            TokenKind::String => "string",
            TokenKind::Identifier => "identifier",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
