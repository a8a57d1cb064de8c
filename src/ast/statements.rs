use std::{fmt::Display, slice::Iter};

use crate::{errors::errors::Error, Span};

use super::ast::{Diagnostics, Expr, Item, Stmt};

/// Root of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylesheet {
    pub body: Vec<Item>,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl Stylesheet {
    pub fn new(body: Vec<Item>, span: Span) -> Self {
        Stylesheet {
            body,
            span,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn iter(&self) -> Iter<'_, Item> {
        self.body.iter()
    }

    pub fn rules(&self) -> impl Iterator<Item = &Stylerule> {
        self.body.iter().filter_map(|item| match item {
            Item::Rule(rule) => Some(rule),
            Item::Assignment(_) => None,
        })
    }

    /// True iff any node in the tree carries at least one diagnostic.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
            || self.body.iter().any(|item| match item {
                Item::Assignment(assignment) => assignment.has_errors(),
                Item::Rule(rule) => rule.has_errors(),
            })
    }

    /// Every diagnostic in the tree, in document order.
    pub fn collect_errors(&self) -> Vec<&Error> {
        let mut errors = vec![];
        errors.extend(self.diagnostics.iter());

        for item in self.body.iter() {
            match item {
                Item::Assignment(assignment) => assignment.collect_errors(&mut errors),
                Item::Rule(rule) => rule.collect_errors(&mut errors),
            }
        }

        errors
    }
}

/// Selectors are opaque to the checker and evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Tag(name) => write!(f, "{}", name),
            Selector::Class(name) => write!(f, ".{}", name),
            Selector::Id(name) => write!(f, "#{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stylerule {
    pub selectors: Vec<Selector>,
    pub body: Vec<Stmt>,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl Stylerule {
    pub fn new(selectors: Vec<Selector>, body: Vec<Stmt>, span: Span) -> Self {
        Stylerule {
            selectors,
            body,
            span,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.body.iter().filter_map(|stmt| match stmt {
            Stmt::Declaration(declaration) => Some(declaration),
            _ => None,
        })
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || body_has_errors(&self.body)
    }

    pub fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        errors.extend(self.diagnostics.iter());
        collect_body_errors(&self.body, errors);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: Expr,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: Expr, span: Span) -> Self {
        Declaration {
            property: property.into(),
            value,
            span,
            diagnostics: Diagnostics::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableAssignment {
    pub name: String,
    pub value: Expr,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl VariableAssignment {
    pub fn new(name: impl Into<String>, value: Expr, span: Span) -> Self {
        VariableAssignment {
            name: name.into(),
            value,
            span,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty() || self.value.has_errors()
    }

    pub fn collect_errors<'a>(&'a self, errors: &mut Vec<&'a Error>) {
        errors.extend(self.diagnostics.iter());
        self.value.collect_errors(errors);
    }
}

/// Boolean-guarded block with an optional `else` branch.
#[derive(Debug, Clone, PartialEq)]
pub struct IfClause {
    pub condition: Expr,
    pub body: Vec<Stmt>,
    pub else_clause: Option<ElseClause>,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl IfClause {
    pub fn new(
        condition: Expr,
        body: Vec<Stmt>,
        else_clause: Option<ElseClause>,
        span: Span,
    ) -> Self {
        IfClause {
            condition,
            body,
            else_clause,
            span,
            diagnostics: Diagnostics::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElseClause {
    pub body: Vec<Stmt>,
    pub span: Span,
    pub diagnostics: Diagnostics,
}

impl ElseClause {
    pub fn new(body: Vec<Stmt>, span: Span) -> Self {
        ElseClause {
            body,
            span,
            diagnostics: Diagnostics::new(),
        }
    }
}

fn body_has_errors(body: &[Stmt]) -> bool {
    body.iter().any(|stmt| match stmt {
        Stmt::Declaration(declaration) => {
            !declaration.diagnostics.is_empty() || declaration.value.has_errors()
        }
        Stmt::Assignment(assignment) => assignment.has_errors(),
        Stmt::If(if_clause) => {
            !if_clause.diagnostics.is_empty()
                || if_clause.condition.has_errors()
                || body_has_errors(&if_clause.body)
                || if_clause.else_clause.as_ref().is_some_and(|else_clause| {
                    !else_clause.diagnostics.is_empty() || body_has_errors(&else_clause.body)
                })
        }
    })
}

fn collect_body_errors<'a>(body: &'a [Stmt], errors: &mut Vec<&'a Error>) {
    for stmt in body.iter() {
        match stmt {
            Stmt::Declaration(declaration) => {
                errors.extend(declaration.diagnostics.iter());
                declaration.value.collect_errors(errors);
            }
            Stmt::Assignment(assignment) => assignment.collect_errors(errors),
            Stmt::If(if_clause) => {
                errors.extend(if_clause.diagnostics.iter());
                if_clause.condition.collect_errors(errors);
                collect_body_errors(&if_clause.body, errors);
                if let Some(else_clause) = &if_clause.else_clause {
                    errors.extend(else_clause.diagnostics.iter());
                    collect_body_errors(&else_clause.body, errors);
                }
            }
        }
    }
}
