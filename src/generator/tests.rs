use crate::{
    ast::{
        ast::{Expr, Item, Stmt},
        expressions::{Literal, Operator},
        statements::{Declaration, IfClause, Selector, Stylerule, Stylesheet, VariableAssignment},
    },
    Span,
};

use super::generator::{generate, generate_with_indent};

fn declaration(property: &str, literal: Literal) -> Stmt {
    Stmt::Declaration(Declaration::new(
        property,
        Expr::literal(literal, Span::null()),
        Span::null(),
    ))
}

fn stylesheet(rules: Vec<Stylerule>) -> Stylesheet {
    Stylesheet::new(rules.into_iter().map(Item::Rule).collect(), Span::null())
}

#[test]
fn test_generate_literals() {
    let ast = stylesheet(vec![Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        vec![
            declaration("color", Literal::Color("#ff0000".to_string())),
            declaration("width", Literal::Pixel(20.0)),
            declaration("height", Literal::Percentage(12.5)),
        ],
        Span::null(),
    )]);

    assert_eq!(
        generate(&ast),
        "p {\n  color: #ff0000;\n  width: 20px;\n  height: 12.5%;\n}\n"
    );
}

#[test]
fn test_generate_scalar_and_bool() {
    let ast = stylesheet(vec![Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        vec![
            declaration("width", Literal::Scalar(3.0)),
            declaration("height", Literal::Bool(false)),
        ],
        Span::null(),
    )]);

    assert_eq!(generate(&ast), "p {\n  width: 3;\n  height: false;\n}\n");
}

#[test]
fn test_generate_multiple_rules_and_selectors() {
    let ast = stylesheet(vec![
        Stylerule::new(
            vec![
                Selector::Class("menu".to_string()),
                Selector::Id("main".to_string()),
            ],
            vec![declaration("width", Literal::Pixel(1.0))],
            Span::null(),
        ),
        Stylerule::new(vec![Selector::Tag("a".to_string())], vec![], Span::null()),
    ]);

    assert_eq!(
        generate(&ast),
        ".menu, #main {\n  width: 1px;\n}\na {\n}\n"
    );
}

#[test]
fn test_generate_with_indent() {
    let ast = stylesheet(vec![Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        vec![declaration("width", Literal::Pixel(1.0))],
        Span::null(),
    )]);

    assert_eq!(generate_with_indent(&ast, 4), "p {\n    width: 1px;\n}\n");
}

#[test]
fn test_generate_unevaluated_tree() {
    let value = Expr::operation(
        Operator::Multiply,
        Expr::variable("--size", Span::null()),
        Expr::literal(Literal::Scalar(2.0), Span::null()),
        Span::null(),
    );
    let mut body = vec![
        Stmt::Assignment(VariableAssignment::new(
            "--size",
            Expr::literal(Literal::Pixel(1.0), Span::null()),
            Span::null(),
        )),
        Stmt::Declaration(Declaration::new("width", value, Span::null())),
    ];
    body.push(Stmt::If(IfClause::new(
        Expr::literal(Literal::Bool(true), Span::null()),
        vec![declaration("height", Literal::Pixel(1.0))],
        None,
        Span::null(),
    )));

    let ast = stylesheet(vec![Stylerule::new(
        vec![Selector::Tag("p".to_string())],
        body,
        Span::null(),
    )]);

    assert_eq!(generate(&ast), "p {\n  width: --size * 2;\n}\n");
}

#[test]
fn test_generate_empty_stylesheet() {
    assert_eq!(generate(&stylesheet(vec![])), "");
}
