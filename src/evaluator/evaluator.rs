use tracing::{debug, trace};

use crate::{
    ast::{
        ast::{Item, Stmt},
        expressions::Literal,
        statements::{Declaration, IfClause, Stylerule, Stylesheet, VariableAssignment},
    },
    errors::errors::{Error, ErrorImpl},
    scope::scope::ScopeStack,
};

use super::expr::{evaluate_expr, fold_expr};

/// Variables resolved to the literal they were last assigned.
#[derive(Debug, Default)]
pub struct Evaluator {
    pub environment: ScopeStack<Literal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Evaluator {
            environment: ScopeStack::new(),
        }
    }

    /// Runs `f` in a child scope, popping it on every exit path.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Evaluator) -> R) -> R {
        self.environment.push();
        let result = f(self);
        self.environment.pop();
        result
    }
}

pub fn evaluate_assignment(
    evaluator: &mut Evaluator,
    assignment: &VariableAssignment,
) -> Result<(), Error> {
    let value = fold_expr(evaluator, &assignment.value)?;
    trace!(variable = %assignment.name, %value, "bound variable");
    evaluator.environment.bind(assignment.name.clone(), value);
    Ok(())
}

pub fn evaluate_declaration(
    evaluator: &Evaluator,
    declaration: &Declaration,
) -> Result<Declaration, Error> {
    Ok(Declaration::new(
        declaration.property.clone(),
        evaluate_expr(evaluator, &declaration.value)?,
        declaration.span.clone(),
    ))
}

/// Picks the branch the guard selects and returns its flattened body.
/// A false guard without an `else` yields nothing.
pub fn evaluate_if(evaluator: &mut Evaluator, if_clause: &IfClause) -> Result<Vec<Stmt>, Error> {
    let condition = fold_expr(evaluator, &if_clause.condition)?;

    let branch = match condition {
        Literal::Bool(true) => Some(&if_clause.body),
        Literal::Bool(false) => if_clause
            .else_clause
            .as_ref()
            .map(|else_clause| &else_clause.body),
        other => {
            return Err(Error::new(
                ErrorImpl::NonBooleanCondition {
                    found: other.to_string(),
                },
                if_clause.span.start.clone(),
            ))
        }
    };

    trace!(%condition, taken = branch.is_some(), "resolved conditional");

    match branch {
        Some(body) => evaluator.scoped(|evaluator| evaluate_body(evaluator, body)),
        None => Ok(vec![]),
    }
}

/// Evaluates a rule or branch body into declarations only.
///
/// Assignments update the current scope and vanish; conditionals are
/// replaced, in place, by the statements of the branch they select.
pub fn evaluate_body(evaluator: &mut Evaluator, body: &[Stmt]) -> Result<Vec<Stmt>, Error> {
    let mut evaluated = vec![];

    for stmt in body.iter() {
        match stmt {
            Stmt::Declaration(declaration) => {
                evaluated.push(Stmt::Declaration(evaluate_declaration(evaluator, declaration)?))
            }
            Stmt::Assignment(assignment) => evaluate_assignment(evaluator, assignment)?,
            Stmt::If(if_clause) => evaluated.extend(evaluate_if(evaluator, if_clause)?),
        }
    }

    Ok(evaluated)
}

pub fn evaluate_rule(evaluator: &mut Evaluator, rule: &Stylerule) -> Result<Stylerule, Error> {
    let body = evaluator.scoped(|evaluator| evaluate_body(evaluator, &rule.body))?;
    Ok(Stylerule::new(
        rule.selectors.clone(),
        body,
        rule.span.clone(),
    ))
}

/// Produces a new stylesheet in which every declaration holds a literal
/// and no assignments or conditionals remain. The input must have passed
/// type checking; anything the checker would reject fails here with the
/// first offending node.
pub fn evaluate(ast: &Stylesheet) -> Result<Stylesheet, Error> {
    let mut evaluator = Evaluator::new();
    let mut body = vec![];

    for item in ast.iter() {
        match item {
            Item::Assignment(assignment) => evaluate_assignment(&mut evaluator, assignment)?,
            Item::Rule(rule) => body.push(Item::Rule(evaluate_rule(&mut evaluator, rule)?)),
        }
    }

    debug!(rules = body.len(), "evaluated stylesheet");
    Ok(Stylesheet::new(body, ast.span.clone()))
}
