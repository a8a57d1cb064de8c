use std::fmt::Display;

use super::types::ExpressionType;

// LITERALS

/// A concrete, already-known value.
///
/// Numeric literals keep the number without its unit; the unit is implied
/// by the variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Raw color text, including the leading `#`.
    Color(String),
    Bool(bool),
    Pixel(f64),
    Percentage(f64),
    Scalar(f64),
}

impl Literal {
    /// The intrinsic type of the literal.
    pub fn get_type(&self) -> ExpressionType {
        match self {
            Literal::Color(_) => ExpressionType::Color,
            Literal::Bool(_) => ExpressionType::Bool,
            Literal::Pixel(_) => ExpressionType::Pixel,
            Literal::Percentage(_) => ExpressionType::Percentage,
            Literal::Scalar(_) => ExpressionType::Scalar,
        }
    }
}

/// CSS text of the literal: `#ff0000`, `10px`, `50%`, `2`, `true`.
impl Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Color(value) => write!(f, "{}", value),
            Literal::Bool(value) => write!(f, "{}", value),
            Literal::Pixel(value) => write!(f, "{}px", value),
            Literal::Percentage(value) => write!(f, "{}%", value),
            Literal::Scalar(value) => write!(f, "{}", value),
        }
    }
}

// OPERATIONS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
        };
        write!(f, "{}", symbol)
    }
}
