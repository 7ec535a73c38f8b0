use super::token::{Token, TokenKind};
use crate::error::{Error, Result};
use tracing::{debug, trace};

/// Pull-based lexer for the S-expression language
///
/// Produces one token per [`Lexer::next_token`] call. Once the input is
/// exhausted every further call returns an `EndOfInput` token at the same
/// position.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Source text
    source: &'a str,
    /// Current byte offset into `source`
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed, counted in characters)
    column: usize,
    /// Set once the iterator has yielded `EndOfInput` or an error
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer over the given source text
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            current: 0,
            line: 1,
            column: 1,
            finished: false,
        }
    }

    /// Scans all tokens and returns them, `EndOfInput` included
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Scans the next token
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        // Positions are taken before the first character of the lexeme is consumed
        let line = self.line;
        let column = self.column;

        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(Token::eof(line, column)),
        };

        let token = if let Some(kind) = TokenKind::from_punct(c) {
            let start = self.current;
            self.advance();
            Token::new(kind, &self.source[start..self.current], line, column)
        } else {
            match c {
                '"' => self.scan_string(line, column)?,
                c if c.is_ascii_digit() => self.scan_integer(line, column),
                c if is_ident_start(c) => self.scan_identifier_or_keyword(line, column),
                c => {
                    debug!(ch = %c, line, column, "unexpected character");
                    return Err(Error::UnexpectedChar {
                        ch: c,
                        line,
                        col: column,
                    });
                }
            }
        };

        trace!(token = %token, "scanned token");
        Ok(token)
    }

    /// Current (line, column) of the cursor
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.advance();
                }
                Some(';') if self.peek_next() == Some(';') => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `;;` comment up to, not including, the newline
    fn skip_line_comment(&mut self) {
        while matches!(self.peek(), Some(c) if c != '\n') {
            self.advance();
        }
    }

    /// Scans a run of ASCII digits. Other Unicode decimal digits are rejected
    /// as unexpected characters since the literal must parse as `i64`.
    fn scan_integer(&mut self, line: usize, column: usize) -> Token {
        let start = self.current;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        Token::new(TokenKind::Int, &self.source[start..self.current], line, column)
    }

    /// Scans a string literal. No escape sequences: the first `"` after the
    /// opening one always closes the literal.
    fn scan_string(&mut self, line: usize, column: usize) -> Result<Token> {
        self.advance(); // Opening "
        let start = self.current;

        loop {
            match self.peek() {
                None => {
                    debug!(line, column, "unterminated string literal");
                    return Err(Error::UnterminatedString { line, col: column });
                }
                Some('"') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }

        let value = &self.source[start..self.current];
        self.advance(); // Closing "

        Ok(Token::new(TokenKind::String, value, line, column))
    }

    fn scan_identifier_or_keyword(&mut self, line: usize, column: usize) -> Token {
        let start = self.current;
        self.advance();
        while matches!(self.peek(), Some(c) if is_ident_part(c)) {
            self.advance();
        }

        let text = &self.source[start..self.current];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        Token::new(kind, text, line, column)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}

/// Yields every token up to and including `EndOfInput`, or up to and
/// including the first error, then stops.
impl Iterator for Lexer<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.next_token();
        self.finished = match &item {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(item)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
