use tracing::trace;

use crate::{
    ast::{
        ast::{Expr, ExprKind, Operation},
        expressions::{Literal, Operator},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::evaluator::Evaluator;

/// Folds `expr` into a literal node that keeps the original span.
pub fn evaluate_expr(evaluator: &Evaluator, expr: &Expr) -> Result<Expr, Error> {
    let literal = fold_expr(evaluator, expr)?;
    Ok(Expr::literal(literal, expr.span.clone()))
}

pub fn fold_expr(evaluator: &Evaluator, expr: &Expr) -> Result<Literal, Error> {
    match &expr.kind {
        ExprKind::Literal(literal) => Ok(literal.clone()),
        ExprKind::Variable(name) => match evaluator.environment.lookup(name) {
            Some(literal) => Ok(literal.clone()),
            None => Err(Error::new(
                ErrorImpl::UnboundVariable {
                    variable: name.clone(),
                },
                expr.span.start.clone(),
            )),
        },
        ExprKind::Operation(operation) => {
            fold_operation_expr(evaluator, operation, &expr.span.start)
        }
    }
}

fn fold_operation_expr(
    evaluator: &Evaluator,
    operation: &Operation,
    position: &Position,
) -> Result<Literal, Error> {
    let [lhs, rhs] = operation.operands.as_slice() else {
        return Err(Error::new(
            ErrorImpl::OperandArity {
                operator: operation.operator.to_string(),
                found: operation.operands.len(),
            },
            position.clone(),
        ));
    };

    let left = fold_expr(evaluator, lhs)?;
    let right = fold_expr(evaluator, rhs)?;

    match fold_operation(operation.operator, &left, &right) {
        Some(result) => {
            trace!(%left, operator = %operation.operator, %right, %result, "folded operation");
            Ok(result)
        }
        None => Err(Error::new(
            ErrorImpl::UnfoldableOperation {
                operator: operation.operator.to_string(),
                left: left.to_string(),
                right: right.to_string(),
            },
            position.clone(),
        )),
    }
}

/// Literal-level arithmetic.
///
/// `+` and `-` combine two literals of the same numeric kind. `*` scales a
/// pixel or percentage by a scalar, in either order. Everything else,
/// including any arithmetic on colors or booleans, has no value.
pub fn fold_operation(operator: Operator, left: &Literal, right: &Literal) -> Option<Literal> {
    match operator {
        Operator::Add | Operator::Subtract => {
            let combine = |a: f64, b: f64| match operator {
                Operator::Subtract => a - b,
                _ => a + b,
            };

            match (left, right) {
                (Literal::Pixel(a), Literal::Pixel(b)) => Some(Literal::Pixel(combine(*a, *b))),
                (Literal::Percentage(a), Literal::Percentage(b)) => {
                    Some(Literal::Percentage(combine(*a, *b)))
                }
                (Literal::Scalar(a), Literal::Scalar(b)) => Some(Literal::Scalar(combine(*a, *b))),
                _ => None,
            }
        }
        Operator::Multiply => match (left, right) {
            (Literal::Pixel(value), Literal::Scalar(factor))
            | (Literal::Scalar(factor), Literal::Pixel(value)) => {
                Some(Literal::Pixel(value * factor))
            }
            (Literal::Percentage(value), Literal::Scalar(factor))
            | (Literal::Scalar(factor), Literal::Percentage(value)) => {
                Some(Literal::Percentage(value * factor))
            }
            (Literal::Scalar(a), Literal::Scalar(b)) => Some(Literal::Scalar(a * b)),
            _ => None,
        },
    }
}
