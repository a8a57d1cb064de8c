use std::fmt::Display;

use tracing::debug;

use crate::ast::{
    ast::Stmt,
    statements::{Stylerule, Stylesheet},
};

pub const DEFAULT_INDENT: usize = 2;

/// CSS text of a stylesheet.
///
/// Meant for evaluated trees, where every declaration holds a literal.
/// On an unevaluated tree, values print in their source form and any
/// member that is not a declaration is left out.
pub struct Css<'a> {
    pub stylesheet: &'a Stylesheet,
    pub indent: usize,
}

impl<'a> Css<'a> {
    pub fn new(stylesheet: &'a Stylesheet, indent: usize) -> Self {
        Css { stylesheet, indent }
    }

    fn fmt_rule(&self, rule: &Stylerule, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let selectors = rule
            .selectors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "{} {{", selectors)?;

        for stmt in rule.body.iter() {
            if let Stmt::Declaration(declaration) = stmt {
                writeln!(
                    f,
                    "{:indent$}{}: {};",
                    "",
                    declaration.property,
                    declaration.value,
                    indent = self.indent
                )?;
            }
        }

        writeln!(f, "}}")
    }
}

impl Display for Css<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rule in self.stylesheet.rules() {
            self.fmt_rule(rule, f)?;
        }
        Ok(())
    }
}

pub fn generate(ast: &Stylesheet) -> String {
    generate_with_indent(ast, DEFAULT_INDENT)
}

pub fn generate_with_indent(ast: &Stylesheet, indent: usize) -> String {
    let css = Css::new(ast, indent).to_string();
    debug!(bytes = css.len(), "generated css");
    css
}
