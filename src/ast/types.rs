//! Semantic types assigned to expressions by the type checker.

use std::fmt::Display;

/// The type of an expression.
///
/// Every literal has an intrinsic type; variable references and operations
/// get theirs from the type checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionType {
    Color,
    Bool,
    Pixel,
    Percentage,
    Scalar,
}

impl ExpressionType {
    pub fn is_scalar(&self) -> bool {
        *self == ExpressionType::Scalar
    }
}

impl Display for ExpressionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpressionType::Color => "COLOR",
            ExpressionType::Bool => "BOOL",
            ExpressionType::Pixel => "PIXEL",
            ExpressionType::Percentage => "PERCENTAGE",
            ExpressionType::Scalar => "SCALAR",
        };
        write!(f, "{}", name)
    }
}
