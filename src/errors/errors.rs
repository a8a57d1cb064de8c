use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::ExpressionType, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::InvalidColor { .. } => "InvalidColor",
            ErrorImpl::UndefinedVariable { .. } => "UndefinedVariableError",
            ErrorImpl::InvalidConditionType { .. } => "InvalidConditionTypeError",
            ErrorImpl::OperandArity { .. } => "OperandArityError",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatchError",
            ErrorImpl::InvalidScalarOperand { .. } => "InvalidScalarOperandError",
            ErrorImpl::UnknownProperty { .. } => "UnknownPropertyError",
            ErrorImpl::PropertyTypeViolation { .. } => "PropertyTypeViolationError",
            ErrorImpl::UnboundVariable { .. } => "UnboundVariable",
            ErrorImpl::UnfoldableOperation { .. } => "UnfoldableOperation",
            ErrorImpl::NonBooleanCondition { .. } => "NonBooleanCondition",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::InvalidColor { token } => ErrorTip::Suggestion(format!(
                "`{}` is not a color, expected `#` followed by 3 or 6 hex digits",
                token
            )),
            ErrorImpl::UnboundVariable { .. }
            | ErrorImpl::UnfoldableOperation { .. }
            | ErrorImpl::NonBooleanCondition { .. } => ErrorTip::Suggestion(format!(
                "{}; the stylesheet must pass type checking before evaluation",
                self.internal_error
            )),
            other => ErrorTip::Suggestion(other.to_string()),
        }
    }

    /// Whether the error was produced by the type checker.
    pub fn is_semantic(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UndefinedVariable { .. }
                | ErrorImpl::InvalidConditionType { .. }
                | ErrorImpl::OperandArity { .. }
                | ErrorImpl::OperandTypeMismatch { .. }
                | ErrorImpl::InvalidScalarOperand { .. }
                | ErrorImpl::UnknownProperty { .. }
                | ErrorImpl::PropertyTypeViolation { .. }
        )
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    // Front end
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("invalid color literal: {token:?}")]
    InvalidColor { token: String },

    // Type checker
    #[error("variable `{variable}` is not defined in this scope")]
    UndefinedVariable { variable: String },
    #[error("condition must be boolean, found `{found}`")]
    InvalidConditionType { found: ExpressionType },
    #[error("operation `{operator}` must have exactly two operands, found {found}")]
    OperandArity { operator: String, found: usize },
    #[error("operands of + or - must be of the same type, found `{left}` and `{right}`")]
    OperandTypeMismatch {
        left: ExpressionType,
        right: ExpressionType,
    },
    #[error("one operand of * must be a scalar, found `{left}` * `{right}`")]
    InvalidScalarOperand {
        left: ExpressionType,
        right: ExpressionType,
    },
    #[error("unknown property `{property}`")]
    UnknownProperty { property: String },
    #[error("property `{property}`: {reason}")]
    PropertyTypeViolation { property: String, reason: String },

    // Evaluator
    #[error("variable `{variable}` has no value")]
    UnboundVariable { variable: String },
    #[error("cannot fold `{left} {operator} {right}`")]
    UnfoldableOperation {
        operator: String,
        left: String,
        right: String,
    },
    #[error("condition evaluated to `{found}` instead of a boolean")]
    NonBooleanCondition { found: String },
}
