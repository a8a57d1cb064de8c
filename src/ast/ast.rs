use std::{fmt::Display, slice::Iter};

use crate::{errors::errors::Error, Span};

use super::{
    expressions::{Literal, Operator},
    statements::{Declaration, IfClause, Stylerule, VariableAssignment},
};

/// Diagnostics attached to a single node.
///
/// Append-only: errors can be pushed and read, never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Error>);

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics(vec![])
    }

    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    pub fn iter(&self) -> Iter<'_, Error> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Top level members of a stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Assignment(VariableAssignment),
    Rule(Stylerule),
}

/// Members of a rule body or of a conditional branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Declaration(Declaration),
    Assignment(VariableAssignment),
    If(IfClause),
}

/// Expression node.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

/// Expression Kinds
///
/// Closed set of expression variants; every pass matches on all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Literal(Literal),
    /// Reference to a variable by name, resolved against the scope chain.
    Variable(String),
    Operation(Operation),
}

/// Binary arithmetic.
///
/// Operands are kept in a vector so that trees built outside the parser
/// can carry the wrong number of them; the type checker reports that.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub operator: Operator,
    pub operands: Vec<Expr>,
}

impl Operation {
    pub fn lhs(&self) -> Option<&Expr> {
        self.operands.first()
    }

    pub fn rhs(&self) -> Option<&Expr> {
        self.operands.get(1)
    }
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr {
            kind,
            span,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn literal(literal: Literal, span: Span) -> Self {
        Expr::new(ExprKind::Literal(literal), span)
    }

    pub fn variable(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Variable(name.into()), span)
    }

    pub fn operation(operator: Operator, lhs: Expr, rhs: Expr, span: Span) -> Self {
        Expr::new(
            ExprKind::Operation(Operation {
                operator,
                operands: vec![lhs, rhs],
            }),
            span,
        )
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match &self.kind {
            ExprKind::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn has_errors(&self) -> bool {
        if !self.diagnostics.is_empty() {
            return true;
        }

        match &self.kind {
            ExprKind::Operation(operation) => operation.operands.iter().any(Expr::has_errors),
            ExprKind::Literal(_) | ExprKind::Variable(_) => false,
        }
    }

    pub fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        errors.extend(self.diagnostics.iter());

        if let ExprKind::Operation(operation) = &self.kind {
            for operand in operation.operands.iter() {
                operand.collect_errors(errors);
            }
        }
    }

    fn binding_power(&self) -> u8 {
        match &self.kind {
            ExprKind::Operation(Operation {
                operator: Operator::Multiply,
                ..
            }) => 2,
            ExprKind::Operation(_) => 1,
            _ => 3,
        }
    }
}

/// Source form of the expression, parenthesised where precedence requires it.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ExprKind::Literal(literal) => write!(f, "{}", literal),
            ExprKind::Variable(name) => write!(f, "{}", name),
            ExprKind::Operation(operation) => {
                let own = self.binding_power();
                for (index, operand) in operation.operands.iter().enumerate() {
                    if index > 0 {
                        write!(f, " {} ", operation.operator)?;
                    }
                    let inner = operand.binding_power();
                    if inner < own || (index > 0 && inner == own) {
                        write!(f, "({})", operand)?;
                    } else {
                        write!(f, "{}", operand)?;
                    }
                }
                Ok(())
            }
        }
    }
}
