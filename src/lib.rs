//! # Arrlisp - a Lisp reader built on arrays
//!
//! Turns Lisp-like source text into a syntax tree whose only aggregate is a
//! flat array of children, not a chain of cons cells.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrlisp::{parse, Expression};
//!
//! # fn main() -> arrlisp::Result<()> {
//! let tree = parse("(define x 4)")?;
//!
//! assert_eq!(
//!     tree,
//!     Expression::Array(vec![
//!         Expression::symbol("define"),
//!         Expression::symbol("x"),
//!         Expression::Integer(4),
//!     ])
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Several top-level forms are grouped under a `begin` symbol:
//!
//! ```rust
//! # fn main() -> arrlisp::Result<()> {
//! let tree = arrlisp::parse("(define x 4) (define y 8.)")?;
//! assert_eq!(tree.to_string(), "(begin (define x 4) (define y 8.0))");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Lexer → Tokens → Parser → Expression
//! ```
//!
//! - [`Lexer`] - splits source into [`Token`]s that borrow from the source
//! - [`Parser`] - builds [`Expression`] trees, one token at a time
//! - [`format_tree`] - indented debug rendering of a tree
//!
//! ## Grammar
//!
//! - `(` and `)` delimit arrays
//! - `"..."` is a string; `\` escapes the next rune. Escapes are kept as
//!   written, not interpreted
//! - plain tokens use ASCII letters, digits and `* + , - . /`
//! - a plain token starting with a digit, or `-` and a digit, is a number;
//!   with a `.` it is a float, otherwise an integer
//! - any other plain token is a symbol
//!
//! ## Error Handling
//!
//! The first lexing or parsing error ends the parse:
//!
//! ```rust
//! let source = "(a))";
//! let err = arrlisp::parse(source).unwrap_err();
//! assert!(err.render(source).starts_with("line 1, column 4: unmatched \")\""));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Version of the Arrlisp reader
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export main types
pub use error::{Error, LexError, NumberError, ParseError, Result};
pub use lexer::{tokenize, Lexer, Location, Token, TokenKind};
pub use parser::{classify, format_tree, parse, Expression, Parser};
