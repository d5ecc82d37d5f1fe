use tracing::debug;

use super::ast::Expression;
use crate::error::{Error, NumberError, ParseError, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Recursive-descent parser building array trees from a lexer
///
/// Arrays are parsed by recursion, so stack usage grows with the nesting depth
/// of the input. Nesting is not limited; pathologically deep input can overflow
/// the stack.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    /// Creates a parser over source code
    pub fn new(source: &'a str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a parser that pulls tokens from an existing lexer
    pub fn from_lexer(lexer: Lexer<'a>) -> Self {
        Parser { lexer }
    }

    /// Parses the whole source into one root expression
    ///
    /// Every top-level form must be an array. A single form is returned as
    /// is; several are wrapped as `(begin form1 form2 ...)`.
    pub fn parse_top_level(mut self) -> Result<Expression> {
        debug!(bytes = self.lexer.source().len(), "parsing source");
        let mut forms = Vec::new();

        while !self.lexer.finished() {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::OpenDelimiter => forms.push(self.parse_array_at(token.offset)?),
                TokenKind::EndOfSource => break,
                TokenKind::CloseDelimiter => return Err(unmatched_close(&token).into()),
                _ => return Err(unexpected(&token).into()),
            }
        }

        let count = forms.len();
        let root = if count > 1 {
            Expression::begin(forms)
        } else {
            forms.pop().ok_or(ParseError::EmptyInput)?
        };
        debug!(forms = count, wrapped = count > 1, "parsed source");
        Ok(root)
    }

    /// Parses the expression starting with `token`
    ///
    /// An open delimiter pulls further tokens until its array is closed.
    pub fn parse_expression(&mut self, token: Token<'a>) -> Result<Expression> {
        match token.kind {
            TokenKind::StringLiteral => {
                Ok(Expression::String(strip_quotes(token.text).to_string()))
            }
            TokenKind::PlainToken => classify(token.text).map_err(|source| {
                Error::from(ParseError::MalformedNumber {
                    text: token.text.to_string(),
                    offset: token.offset,
                    source,
                })
            }),
            TokenKind::OpenDelimiter => self.parse_array_at(token.offset),
            TokenKind::CloseDelimiter => Err(unmatched_close(&token).into()),
            TokenKind::Error | TokenKind::EndOfSource => Err(unexpected(&token).into()),
        }
    }

    /// Parses the rest of an array whose open delimiter was just consumed
    pub fn parse_array(&mut self) -> Result<Expression> {
        let open = self.lexer.position().saturating_sub(1);
        self.parse_array_at(open)
    }

    fn parse_array_at(&mut self, open: usize) -> Result<Expression> {
        let mut elements = Vec::new();

        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::CloseDelimiter => return Ok(Expression::Array(elements)),
                TokenKind::EndOfSource => {
                    return Err(ParseError::UnclosedArray {
                        text: "(".to_string(),
                        offset: open,
                    }
                    .into())
                }
                _ => elements.push(self.parse_expression(token)?),
            }
        }
    }
}

/// Parses source code into one root expression
pub fn parse(source: &str) -> Result<Expression> {
    Parser::new(source).parse_top_level()
}

/// Classifies a plain token as an integer, float or symbol
///
/// A token is a number if it starts with a digit, or with `-` followed by a
/// digit. A number containing `.` after its first character is a float.
/// Number-shaped tokens that fail to parse (`3.4.5`, `3x`) are errors, not
/// symbols.
pub fn classify(text: &str) -> std::result::Result<Expression, NumberError> {
    if !is_number(text) {
        return Ok(Expression::Symbol(text.to_string()));
    }

    if text.chars().skip(1).any(|c| c == '.') {
        Ok(Expression::Float(text.parse()?))
    } else {
        Ok(Expression::Integer(text.parse()?))
    }
}

fn is_number(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('-') => chars.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

fn strip_quotes(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

fn unmatched_close(token: &Token) -> ParseError {
    ParseError::UnmatchedClose {
        text: token.text.to_string(),
        offset: token.offset,
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        kind: token.kind,
        text: token.text.to_string(),
        offset: token.offset,
    }
}
