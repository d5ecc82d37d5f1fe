use serde::{Deserialize, Serialize};
use std::fmt;

/// A single token from the source code
///
/// `text` borrows straight from the source buffer; tokens are never copied
/// out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The category of token
    pub kind: TokenKind,
    /// Original text of the token
    pub text: &'a str,
    /// Byte offset of `text` in the source
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, text: &'a str, offset: usize) -> Self {
        Token { kind, text, offset }
    }

    /// Byte offset just past the end of the token
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

/// Token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Internal failure signal; the lexer reports failures as `LexError`
    /// instead and never hands this category out
    Error,
    /// `(`
    OpenDelimiter,
    /// `)`
    CloseDelimiter,
    /// `"..."`, quotes included
    StringLiteral,
    /// Anything else: numbers and symbols
    PlainToken,
    /// No more tokens
    EndOfSource,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Error => write!(f, "error"),
            TokenKind::OpenDelimiter => write!(f, "open delimiter"),
            TokenKind::CloseDelimiter => write!(f, "close delimiter"),
            TokenKind::StringLiteral => write!(f, "string literal"),
            TokenKind::PlainToken => write!(f, "plain token"),
            TokenKind::EndOfSource => write!(f, "end of source"),
        }
    }
}

/// True for `(`
pub fn is_open_delimiter(c: char) -> bool {
    c == '('
}

/// True for `)`
pub fn is_close_delimiter(c: char) -> bool {
    c == ')'
}

/// True for runes allowed in a plain token
///
/// Brackets, braces, `#` and `'` stay reserved.
pub fn is_plain_rune(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '*' | '+' | ',' | '-' | '.' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_runes() {
        for c in "azAZ09*+,-./".chars() {
            assert!(is_plain_rune(c), "{c:?} should be legal");
        }
        for c in "[]{}#'\"();!?_ é٣".chars() {
            assert!(!is_plain_rune(c), "{c:?} should be illegal");
        }
    }

    #[test]
    fn test_token_end() {
        let token = Token::new(TokenKind::PlainToken, "define", 1);
        assert_eq!(token.end(), 7);
    }
}
