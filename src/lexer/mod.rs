//! Lexical analysis for Arrlisp
//!
//! Converts source text into a lazy stream of tokens. Tokens borrow their
//! text from the source buffer.

mod location;
mod scanner;
mod token;

pub use location::Location;
pub use scanner::{tokenize, Lexer, Tokens};
pub use token::{is_close_delimiter, is_open_delimiter, is_plain_rune, Token, TokenKind};
