use std::iter::FusedIterator;

use tracing::trace;

use super::token::{is_close_delimiter, is_open_delimiter, is_plain_rune, Token, TokenKind};
use crate::error::LexError;

/// Lexer over a borrowed source buffer
///
/// `start..end` spans the token under construction and is only non-empty
/// inside `next_token`; between calls `start == end`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// Source code
    source: &'a str,
    /// Start of the current token
    start: usize,
    /// Current position in source
    end: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer from source code
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            start: 0,
            end: 0,
        }
    }

    /// True once the cursor has reached the end of the source
    pub fn finished(&self) -> bool {
        self.end >= self.source.len()
    }

    /// Byte offset of the cursor
    pub fn position(&self) -> usize {
        self.end
    }

    /// The source being scanned
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Produces the next token
    ///
    /// Returns an `EndOfSource` token once only whitespace remains. On failure
    /// the cursor is moved back to the start of the failed token, so calling
    /// again reports the same error.
    pub fn next_token(&mut self) -> Result<Token<'a>, LexError> {
        debug_assert_eq!(self.start, self.end);
        self.skip_whitespace();

        match self.scan_token() {
            Ok(token) => {
                self.start = self.end;
                trace!(kind = ?token.kind, offset = token.offset, text = token.text, "token");
                Ok(token)
            }
            Err(err) => {
                self.end = self.start;
                trace!(error = %err, "lex error");
                Err(err)
            }
        }
    }

    /// Consumes the lexer into an iterator over its tokens
    pub fn tokens(self) -> Tokens<'a> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    fn scan_token(&mut self) -> Result<Token<'a>, LexError> {
        let Some(c) = self.advance() else {
            return Ok(self.token(TokenKind::EndOfSource));
        };

        if is_open_delimiter(c) {
            Ok(self.token(TokenKind::OpenDelimiter))
        } else if is_close_delimiter(c) {
            Ok(self.token(TokenKind::CloseDelimiter))
        } else if c == '"' {
            self.scan_string()
        } else if is_plain_rune(c) {
            self.scan_plain()
        } else {
            Err(LexError::InvalidTokenStart {
                rune: c,
                offset: self.start,
            })
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.end += c.len_utf8();
        }
        self.start = self.end;
    }

    fn scan_string(&mut self) -> Result<Token<'a>, LexError> {
        let mut escaped = false;

        while let Some(c) = self.advance() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                return Ok(self.token(TokenKind::StringLiteral));
            }
        }

        Err(LexError::UnterminatedString {
            text: self.current_text().to_string(),
            offset: self.start,
        })
    }

    fn scan_plain(&mut self) -> Result<Token<'a>, LexError> {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || is_close_delimiter(c) {
                break;
            }
            self.end += c.len_utf8();
            if !is_plain_rune(c) {
                return Err(LexError::InvalidTokenContent {
                    text: self.current_text().to_string(),
                    rune: c,
                    offset: self.start,
                });
            }
        }

        Ok(self.token(TokenKind::PlainToken))
    }

    fn peek(&self) -> Option<char> {
        self.source[self.end..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.end += c.len_utf8();
        Some(c)
    }

    fn current_text(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    fn token(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.current_text(), self.start)
    }
}

/// Iterator over a lexer's tokens
///
/// Stops before `EndOfSource`; yields at most one error, then ends.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    lexer: Lexer<'a>,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next_token() {
            Ok(token) if token.kind == TokenKind::EndOfSource => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Scans all tokens from source code and returns them as a vector
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::new(source).tokens().collect()
}
