use super::scanner::Lexer;
use super::token::Token;
use crate::error::Result;

/// Anything the parser can pull tokens from
///
/// Implementations must eventually return an `EndOfInput` token and keep
/// returning it on every later call.
pub trait TokenSource {
    /// Produces the next token
    fn next_token(&mut self) -> Result<Token>;
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Result<Token> {
        Lexer::next_token(self)
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self) -> Result<Token> {
        (**self).next_token()
    }
}

/// Replays a pre-scanned token vector
///
/// If the vector does not end in `EndOfInput`, one is synthesized at the
/// position of the last token (or 1:1 for an empty vector).
#[derive(Debug)]
pub struct TokenBuffer {
    tokens: std::vec::IntoIter<Token>,
    eof: Option<Token>,
    last_position: (usize, usize),
}

impl TokenBuffer {
    /// Creates a buffer over already scanned tokens
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenBuffer {
            tokens: tokens.into_iter(),
            eof: None,
            last_position: (1, 1),
        }
    }
}

impl From<Vec<Token>> for TokenBuffer {
    fn from(tokens: Vec<Token>) -> Self {
        TokenBuffer::new(tokens)
    }
}

impl TokenSource for TokenBuffer {
    fn next_token(&mut self) -> Result<Token> {
        if let Some(eof) = &self.eof {
            return Ok(eof.clone());
        }

        let token = match self.tokens.next() {
            Some(token) => token,
            None => Token::eof(self.last_position.0, self.last_position.1),
        };

        self.last_position = (token.line, token.column);
        if token.is_eof() {
            self.eof = Some(token.clone());
        }
        Ok(token)
    }
}
