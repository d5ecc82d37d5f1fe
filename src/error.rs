//! Error types for the Arrlisp reader

use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::lexer::{Location, TokenKind};

/// Errors raised while splitting source text into tokens
///
/// Every variant records the byte offset of the offending rune (or of the
/// token under construction) so callers can point at it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A token started with a rune that may not begin any token
    ///
    /// **Triggered by:** brackets, braces, `#`, `'` and other reserved runes
    /// **Example:** `[foo]`
    #[error("invalid token start {rune:?} at offset {offset}")]
    InvalidTokenStart {
        /// The rejected rune
        rune: char,
        /// Byte offset of the rune
        offset: usize,
    },

    /// A plain token contained a rune outside the plain-token set
    ///
    /// **Example:** `foo[bar`
    #[error("invalid rune {rune:?} in token {text:?} at offset {offset}")]
    InvalidTokenContent {
        /// Token text up to and including the rejected rune
        text: String,
        /// The rejected rune
        rune: char,
        /// Byte offset of the token start
        offset: usize,
    },

    /// The source ended before a string literal's closing quote
    #[error("unterminated string {text:?} at offset {offset}")]
    UnterminatedString {
        /// String text from the opening quote to the end of the source
        text: String,
        /// Byte offset of the opening quote
        offset: usize,
    },
}

impl LexError {
    /// Byte offset the error points at
    pub fn offset(&self) -> usize {
        match self {
            LexError::InvalidTokenStart { offset, .. }
            | LexError::InvalidTokenContent { offset, .. }
            | LexError::UnterminatedString { offset, .. } => *offset,
        }
    }
}

/// Underlying failure of a number-shaped token
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// Integer parse failure
    #[error(transparent)]
    Integer(#[from] ParseIntError),
    /// Float parse failure
    #[error(transparent)]
    Float(#[from] ParseFloatError),
}

/// Errors raised while building expressions from tokens
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A close delimiter with no open array to end
    ///
    /// **Example:** `(a))`
    #[error("unmatched {text:?} at offset {offset}")]
    UnmatchedClose {
        /// Text of the offending token
        text: String,
        /// Byte offset of the token
        offset: usize,
    },

    /// The source ended inside an array
    ///
    /// **Example:** `(define x (+ 1 2)`
    #[error("array {text:?} opened at offset {offset} is never closed")]
    UnclosedArray {
        /// Text of the open delimiter
        text: String,
        /// Byte offset of the open delimiter
        offset: usize,
    },

    /// A token category that cannot start an expression here
    #[error("unexpected {kind:?} token {text:?} at offset {offset}")]
    UnexpectedToken {
        /// Category of the token
        kind: TokenKind,
        /// Text of the token
        text: String,
        /// Byte offset of the token
        offset: usize,
    },

    /// The source holds no tokens at all
    #[error("empty input")]
    EmptyInput,

    /// A number-shaped token that is not a valid number
    ///
    /// **Example:** `3.4.5`, `3x`
    #[error("malformed number {text:?} at offset {offset}: {source}")]
    MalformedNumber {
        /// Token text
        text: String,
        /// Byte offset of the token
        offset: usize,
        /// Why numeric parsing rejected it
        source: NumberError,
    },
}

impl ParseError {
    /// Byte offset the error points at, if it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnmatchedClose { offset, .. }
            | ParseError::UnclosedArray { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::MalformedNumber { offset, .. } => Some(*offset),
            ParseError::EmptyInput => None,
        }
    }
}

/// Reader errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Tokenizing failed
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Building the tree failed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// Byte offset the error points at, if it has one
    pub fn offset(&self) -> Option<usize> {
        match self {
            Error::Lex(e) => Some(e.offset()),
            Error::Parse(e) => e.offset(),
        }
    }

    /// Render the error against the source it came from
    ///
    /// Produces `line L, column C: message` followed by the offending line
    /// and a caret under the reported column.
    pub fn render(&self, source: &str) -> String {
        let Some(offset) = self.offset() else {
            return self.to_string();
        };
        let location = Location::of(source, offset);
        let line = source.lines().nth(location.line - 1).unwrap_or("");
        format!(
            "line {}, column {}: {}\n{}\n{}^",
            location.line,
            location.column,
            self,
            line,
            " ".repeat(location.column - 1)
        )
    }
}

/// Result type for reader operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let lex = Error::from(LexError::InvalidTokenStart {
            rune: '[',
            offset: 3,
        });
        assert_eq!(lex.offset(), Some(3));
        assert_eq!(Error::from(ParseError::EmptyInput).offset(), None);
    }

    #[test]
    fn test_render_points_at_column() {
        let source = "(a\n  [b])";
        let err = Error::from(LexError::InvalidTokenStart {
            rune: '[',
            offset: 5,
        });
        let rendered = err.render(source);
        assert!(rendered.starts_with("line 2, column 3: invalid token start '['"));
        assert!(rendered.ends_with("  [b])\n  ^"));
    }

    #[test]
    fn test_render_without_offset() {
        let err = Error::from(ParseError::EmptyInput);
        assert_eq!(err.render(""), "empty input");
    }

    #[test]
    fn test_malformed_number_has_source() {
        use std::error::Error as _;

        let cause = "3x".parse::<i64>().unwrap_err();
        let err = ParseError::MalformedNumber {
            text: "3x".to_string(),
            offset: 0,
            source: cause.into(),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("malformed number \"3x\""));
    }
}
