use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Diagnostics, Expr, ExprKind, Item, Operation, Stmt},
        expressions::Operator,
        statements::{Declaration, IfClause, Stylerule, Stylesheet, VariableAssignment},
        types::ExpressionType,
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope::ScopeStack,
    Position,
};

use super::properties::PROPERTY_LOOKUP;

/// State threaded through the checking functions.
///
/// A variable whose expression has no type is still bound, as `None`, so
/// that only the place where the type was lost reports an error.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub environment: ScopeStack<Option<ExpressionType>>,
    pub error_count: usize,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environment: ScopeStack::new(),
            error_count: 0,
        }
    }

    /// `None` if the name is not bound, `Some(None)` if it is bound without a type.
    pub fn fetch_variable_type(&self, variable: &str) -> Option<Option<ExpressionType>> {
        self.environment.lookup(variable).copied()
    }

    /// Runs `f` in a child scope, popping it on every exit path.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut TypeChecker) -> R) -> R {
        self.environment.push();
        let result = f(self);
        self.environment.pop();
        result
    }

    fn report(&mut self, diagnostics: &mut Diagnostics, error_impl: ErrorImpl, position: &Position) {
        let error = Error::new(error_impl, position.clone());
        trace!(name = error.get_error_name(), %error, "recorded diagnostic");
        diagnostics.push(error);
        self.error_count += 1;
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, expr: &mut Expr) -> Option<ExpressionType> {
    let Expr { kind, span, diagnostics } = expr;

    match kind {
        ExprKind::Literal(literal) => Some(literal.get_type()),
        ExprKind::Variable(name) => match type_checker.fetch_variable_type(name) {
            Some(variable_type) => variable_type,
            None => {
                type_checker.report(
                    diagnostics,
                    ErrorImpl::UndefinedVariable {
                        variable: name.clone(),
                    },
                    &span.start,
                );
                None
            }
        },
        ExprKind::Operation(operation) => {
            type_check_operation(type_checker, operation, diagnostics, &span.start)
        }
    }
}

fn type_check_operation(
    type_checker: &mut TypeChecker,
    operation: &mut Operation,
    diagnostics: &mut Diagnostics,
    position: &Position,
) -> Option<ExpressionType> {
    if operation.operands.len() != 2 {
        type_checker.report(
            diagnostics,
            ErrorImpl::OperandArity {
                operator: operation.operator.to_string(),
                found: operation.operands.len(),
            },
            position,
        );
        return None;
    }

    let left = type_check_expr(type_checker, &mut operation.operands[0]);
    let right = type_check_expr(type_checker, &mut operation.operands[1]);

    // An unresolved operand already carries its own error
    let (Some(left), Some(right)) = (left, right) else {
        return None;
    };

    match operation.operator {
        Operator::Add | Operator::Subtract => {
            if left == right {
                Some(left)
            } else {
                type_checker.report(
                    diagnostics,
                    ErrorImpl::OperandTypeMismatch { left, right },
                    position,
                );
                None
            }
        }
        Operator::Multiply => match (left.is_scalar(), right.is_scalar()) {
            (true, false) => Some(right),
            (false, true) => Some(left),
            (true, true) => Some(ExpressionType::Scalar),
            (false, false) => {
                type_checker.report(
                    diagnostics,
                    ErrorImpl::InvalidScalarOperand { left, right },
                    position,
                );
                None
            }
        },
    }
}

pub fn type_check_assignment(type_checker: &mut TypeChecker, assignment: &mut VariableAssignment) {
    let variable_type = type_check_expr(type_checker, &mut assignment.value);
    type_checker
        .environment
        .bind(assignment.name.clone(), variable_type);
}

pub fn type_check_declaration(type_checker: &mut TypeChecker, declaration: &mut Declaration) {
    let value_type = type_check_expr(type_checker, &mut declaration.value);

    let Some(property) = PROPERTY_LOOKUP.get(declaration.property.as_str()) else {
        type_checker.report(
            &mut declaration.diagnostics,
            ErrorImpl::UnknownProperty {
                property: declaration.property.clone(),
            },
            &declaration.span.start,
        );
        return;
    };

    if let Some(value_type) = value_type {
        if !property.accepts(value_type) {
            type_checker.report(
                &mut declaration.diagnostics,
                ErrorImpl::PropertyTypeViolation {
                    property: declaration.property.clone(),
                    reason: String::from(property.violation()),
                },
                &declaration.span.start,
            );
        }
    }
}

pub fn type_check_if(type_checker: &mut TypeChecker, if_clause: &mut IfClause) {
    type_checker.scoped(|type_checker| type_check_body(type_checker, &mut if_clause.body));

    // The guard only sees the enclosing scope
    match type_check_expr(type_checker, &mut if_clause.condition) {
        Some(ExpressionType::Bool) | None => {}
        Some(found) => type_checker.report(
            &mut if_clause.diagnostics,
            ErrorImpl::InvalidConditionType { found },
            &if_clause.span.start,
        ),
    }

    if let Some(else_clause) = &mut if_clause.else_clause {
        type_checker.scoped(|type_checker| type_check_body(type_checker, &mut else_clause.body));
    }
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &mut Stmt) {
    match stmt {
        Stmt::Declaration(declaration) => type_check_declaration(type_checker, declaration),
        Stmt::Assignment(assignment) => type_check_assignment(type_checker, assignment),
        Stmt::If(if_clause) => type_check_if(type_checker, if_clause),
    }
}

pub fn type_check_body(type_checker: &mut TypeChecker, body: &mut [Stmt]) {
    for stmt in body.iter_mut() {
        type_check_stmt(type_checker, stmt);
    }
}

pub fn type_check_rule(type_checker: &mut TypeChecker, rule: &mut Stylerule) {
    type_checker.scoped(|type_checker| type_check_body(type_checker, &mut rule.body));
}

/// Checks the whole stylesheet, attaching every error to the node that
/// caused it. Never stops early; read the result with
/// [`Stylesheet::has_errors`].
pub fn type_check(ast: &mut Stylesheet) -> TypeChecker {
    let mut type_checker = TypeChecker::new();

    for item in ast.body.iter_mut() {
        match item {
            Item::Assignment(assignment) => type_check_assignment(&mut type_checker, assignment),
            Item::Rule(rule) => type_check_rule(&mut type_checker, rule),
        }
    }

    debug!(errors = type_checker.error_count, "type check finished");
    type_checker
}
