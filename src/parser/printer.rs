//! Indented tree rendering, for debugging and test diagnostics.
//!
//! ```text
//! (Symbol:define
//!  Symbol:square
//!  (Symbol:*
//!   Symbol:x
//!   Symbol:x))
//! ```

use super::ast::{float_literal, Expression};

/// Render an expression as an indented tree
///
/// The first element of an array sits right after `(`; the rest go one per
/// line, aligned under the first.
pub fn format_tree(expr: &Expression) -> String {
    let mut out = String::new();
    write_tree(expr, 0, &mut out);
    out
}

fn write_tree(expr: &Expression, column: usize, out: &mut String) {
    match expr {
        Expression::Array(elements) => {
            out.push('(');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                    out.push_str(&" ".repeat(column + 1));
                }
                write_tree(element, column + 1, out);
            }
            out.push(')');
        }
        Expression::Integer(n) => out.push_str(&format!("Integer:{n}")),
        Expression::Float(x) => out.push_str(&format!("Float:{}", float_literal(*x))),
        Expression::String(s) => out.push_str(&format!("String:\"{s}\"")),
        Expression::Symbol(name) => out.push_str(&format!("Symbol:{name}")),
    }
}
