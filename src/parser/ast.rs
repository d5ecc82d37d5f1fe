use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed expression
///
/// `Array` is the only recursive variant and owns its elements, so every tree
/// is acyclic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Integer literal
    Integer(i64),
    /// Floating-point literal
    Float(f64),
    /// String literal, quotes stripped, escapes left as written
    String(String),
    /// Symbol
    Symbol(String),
    /// Ordered sequence of expressions, in source order
    Array(Vec<Expression>),
}

impl Expression {
    /// Creates a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Expression::Symbol(name.into())
    }

    /// Wraps several top-level forms in a `(begin ...)` array
    pub fn begin(forms: impl IntoIterator<Item = Expression>) -> Self {
        let mut elements = vec![Expression::symbol("begin")];
        elements.extend(forms);
        Expression::Array(elements)
    }

    /// Name of the variant, as used by the tree formatter
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expression::Integer(_) => "Integer",
            Expression::Float(_) => "Float",
            Expression::String(_) => "String",
            Expression::Symbol(_) => "Symbol",
            Expression::Array(_) => "Array",
        }
    }

    /// Elements of an array, or `None` for leaves
    pub fn as_array(&self) -> Option<&[Expression]> {
        match self {
            Expression::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Name of a symbol, or `None` for anything else
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Expression::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// True for the `Array` variant
    pub fn is_array(&self) -> bool {
        matches!(self, Expression::Array(_))
    }
}

/// Formats a float so that it reads back as a float
pub(crate) fn float_literal(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Integer(n) => write!(f, "{n}"),
            Expression::Float(x) => write!(f, "{}", float_literal(*x)),
            Expression::String(s) => write!(f, "\"{s}\""),
            Expression::Symbol(name) => write!(f, "{name}"),
            Expression::Array(elements) => {
                write!(f, "(")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_wraps_forms() {
        let begin = Expression::begin([Expression::Integer(1), Expression::Integer(2)]);
        assert_eq!(
            begin,
            Expression::Array(vec![
                Expression::symbol("begin"),
                Expression::Integer(1),
                Expression::Integer(2),
            ])
        );
        assert_eq!(begin.as_array().unwrap()[0].as_symbol(), Some("begin"));
    }

    #[test]
    fn test_display() {
        let expr = Expression::Array(vec![
            Expression::symbol("define"),
            Expression::symbol("y"),
            Expression::Float(8.0),
            Expression::String(r#"a\"b"#.to_string()),
            Expression::Array(vec![]),
        ]);
        assert_eq!(expr.to_string(), r#"(define y 8.0 "a\"b" ())"#);
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(8.0), "8.0");
        assert_eq!(float_literal(-0.25), "-0.25");
        assert_eq!(float_literal(1e20), "100000000000000000000.0");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Expression::Integer(1).kind_name(), "Integer");
        assert_eq!(Expression::Array(vec![]).kind_name(), "Array");
        assert!(!Expression::symbol("x").is_array());
    }
}
