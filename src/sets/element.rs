//! Set elements: integers or text, totally ordered.

use std::fmt;

/// A value that can live in a [`ValueSet`](super::ValueSet).
///
/// Integers order before text. Text displays quoted, as a literal would.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Element {
    Int(i64),
    Text(String),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Int(v) => write!(f, "{v}"),
            Element::Text(v) => write!(f, "'{v}'"),
        }
    }
}

impl From<i64> for Element {
    fn from(v: i64) -> Self {
        Element::Int(v)
    }
}

impl From<i32> for Element {
    fn from(v: i32) -> Self {
        Element::Int(v.into())
    }
}

impl From<&str> for Element {
    fn from(v: &str) -> Self {
        Element::Text(v.to_string())
    }
}

impl From<String> for Element {
    fn from(v: String) -> Self {
        Element::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Element::from(3).to_string(), "3");
        assert_eq!(Element::from("a").to_string(), "'a'");
    }

    #[test]
    fn test_ints_order_before_text() {
        assert!(Element::from(1_000) < Element::from("0"));
        assert!(Element::from(-2) < Element::from(1));
    }
}
