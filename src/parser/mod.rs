//! Arrlisp Parser Module
//!
//! Parses tokens into trees whose only aggregate is the array.

mod ast;
mod printer;
mod sexpr_parser;

pub use ast::Expression;
pub use printer::format_tree;
pub use sexpr_parser::{classify, parse, Parser};
