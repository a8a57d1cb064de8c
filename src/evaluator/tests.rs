use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, ExprKind, Item, Stmt},
        expressions::{Literal, Operator},
        statements::{Declaration, Selector, Stylerule, Stylesheet},
    },
    errors::errors::ErrorImpl,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
    Span,
};

use super::{evaluator::evaluate, expr::fold_operation};

fn evaluated(source: &str) -> Stylesheet {
    let tokens = tokenize(source.to_string(), None).unwrap();
    let (_, result) = parse(tokens, Rc::new("stdin".to_string()));
    let mut stylesheet = result.unwrap();
    type_check(&mut stylesheet);
    assert!(!stylesheet.has_errors(), "{:?}", stylesheet.collect_errors());
    evaluate(&stylesheet).unwrap()
}

fn values(stylesheet: &Stylesheet) -> Vec<(String, Literal)> {
    stylesheet
        .rules()
        .flat_map(|rule| rule.declarations())
        .map(|declaration| {
            (
                declaration.property.clone(),
                declaration.value.as_literal().unwrap().clone(),
            )
        })
        .collect()
}

fn assert_fully_evaluated(stylesheet: &Stylesheet) {
    for item in stylesheet.iter() {
        let Item::Rule(rule) = item else {
            panic!("assignment left in evaluated tree");
        };
        for stmt in rule.body.iter() {
            let Stmt::Declaration(declaration) = stmt else {
                panic!("non-declaration left in evaluated tree");
            };
            assert!(matches!(declaration.value.kind, ExprKind::Literal(_)));
        }
    }
}

#[test]
fn test_fold_additive() {
    assert_eq!(
        fold_operation(Operator::Add, &Literal::Pixel(10.0), &Literal::Pixel(5.0)),
        Some(Literal::Pixel(15.0))
    );
    assert_eq!(
        fold_operation(
            Operator::Subtract,
            &Literal::Percentage(50.0),
            &Literal::Percentage(20.0)
        ),
        Some(Literal::Percentage(30.0))
    );
    assert_eq!(
        fold_operation(Operator::Add, &Literal::Scalar(2.0), &Literal::Scalar(3.0)),
        Some(Literal::Scalar(5.0))
    );
}

#[test]
fn test_fold_multiply_either_order() {
    assert_eq!(
        fold_operation(Operator::Multiply, &Literal::Scalar(2.0), &Literal::Pixel(10.0)),
        Some(Literal::Pixel(20.0))
    );
    assert_eq!(
        fold_operation(Operator::Multiply, &Literal::Pixel(10.0), &Literal::Scalar(2.0)),
        Some(Literal::Pixel(20.0))
    );
    assert_eq!(
        fold_operation(
            Operator::Multiply,
            &Literal::Percentage(10.0),
            &Literal::Scalar(1.5)
        ),
        Some(Literal::Percentage(15.0))
    );
    assert_eq!(
        fold_operation(Operator::Multiply, &Literal::Scalar(4.0), &Literal::Scalar(0.5)),
        Some(Literal::Scalar(2.0))
    );
}

#[test]
fn test_fold_rejects_unchecked_combinations() {
    assert_eq!(
        fold_operation(Operator::Add, &Literal::Pixel(1.0), &Literal::Percentage(1.0)),
        None
    );
    assert_eq!(
        fold_operation(Operator::Multiply, &Literal::Pixel(1.0), &Literal::Pixel(1.0)),
        None
    );
    assert_eq!(
        fold_operation(
            Operator::Add,
            &Literal::Color("#fff".to_string()),
            &Literal::Color("#000".to_string())
        ),
        None
    );
}

#[test]
fn test_variables_and_folding() {
    let stylesheet = evaluated(
        "--size: 10px;
         --half: 50%;
         p { width: --size * 2; height: --half - 10%; color: #ff0000; }",
    );

    assert_eq!(
        values(&stylesheet),
        vec![
            ("width".to_string(), Literal::Pixel(20.0)),
            ("height".to_string(), Literal::Percentage(40.0)),
            ("color".to_string(), Literal::Color("#ff0000".to_string())),
        ]
    );
    assert_fully_evaluated(&stylesheet);
}

#[test]
fn test_true_branch_is_spliced_in_place() {
    let stylesheet = evaluated(
        "p { height: 1px; if (true) { width: 10px; } else { width: 20px; } color: #fff; }",
    );

    assert_eq!(
        values(&stylesheet),
        vec![
            ("height".to_string(), Literal::Pixel(1.0)),
            ("width".to_string(), Literal::Pixel(10.0)),
            ("color".to_string(), Literal::Color("#fff".to_string())),
        ]
    );
}

#[test]
fn test_false_branch_takes_else() {
    let stylesheet = evaluated("p { if [false] { width: 10px; } else { width: 20px; } }");
    assert_eq!(
        values(&stylesheet),
        vec![("width".to_string(), Literal::Pixel(20.0))]
    );
}

#[test]
fn test_false_without_else_contributes_nothing() {
    let stylesheet = evaluated("p { if (false) { width: 10px; } }");
    let rule = stylesheet.rules().next().unwrap();
    assert!(rule.body.is_empty());
}

#[test]
fn test_nested_conditionals_are_flattened() {
    let stylesheet = evaluated(
        "--wide: true;
         p {
            if [--wide] {
                --w: 100px;
                if [true] { width: --w; } else { width: 1px; }
                if [false] { height: 1px; }
            }
         }",
    );

    assert_eq!(
        values(&stylesheet),
        vec![("width".to_string(), Literal::Pixel(100.0))]
    );
    assert_fully_evaluated(&stylesheet);
}

#[test]
fn test_shadowing_is_scoped() {
    let stylesheet = evaluated(
        "--w: 10px;
         p { --w: 20px; width: --w; }
         a { width: --w; }",
    );

    assert_eq!(
        values(&stylesheet),
        vec![
            ("width".to_string(), Literal::Pixel(20.0)),
            ("width".to_string(), Literal::Pixel(10.0)),
        ]
    );
}

#[test]
fn test_redeclaration_last_write_wins() {
    let stylesheet = evaluated("--w: 10px; --w: 30px; p { width: --w; }");
    assert_eq!(
        values(&stylesheet),
        vec![("width".to_string(), Literal::Pixel(30.0))]
    );
}

#[test]
fn test_assignments_are_dropped() {
    let stylesheet = evaluated("--w: 10px; p { --h: 1px; height: --h; }");
    assert_eq!(stylesheet.body.len(), 1);
    assert_eq!(stylesheet.rules().next().unwrap().body.len(), 1);
}

#[test]
fn test_spans_survive_evaluation() {
    let stylesheet = evaluated("p { width: 1px + 2px; }");
    let declaration = stylesheet.rules().next().unwrap().declarations().next().unwrap();

    assert_eq!(declaration.span.start.0, 4);
    assert_eq!(declaration.value.span.start.0, 11);
}

#[test]
fn test_evaluation_is_idempotent() {
    let once = evaluated(
        "--c: #00ff00;
         .menu, #main { if [true] { color: --c; } width: 2 * 3px; }",
    );
    let twice = evaluate(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_unbound_variable_fails_fast() {
    let stylesheet = Stylesheet::new(
        vec![Item::Rule(Stylerule::new(
            vec![Selector::Tag("p".to_string())],
            vec![Stmt::Declaration(Declaration::new(
                "width",
                Expr::variable("--nope", Span::null()),
                Span::null(),
            ))],
            Span::null(),
        ))],
        Span::null(),
    );

    let error = evaluate(&stylesheet).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnboundVariable {
            variable: "--nope".to_string()
        }
    );
}

#[test]
fn test_color_arithmetic_is_unfoldable() {
    // Same-typed, so the checker lets it through
    let tokens = tokenize("p { color: #fff + #000; }".to_string(), None).unwrap();
    let (_, result) = parse(tokens, Rc::new("stdin".to_string()));
    let mut stylesheet = result.unwrap();
    type_check(&mut stylesheet);
    assert!(!stylesheet.has_errors());

    let error = evaluate(&stylesheet).unwrap_err();
    assert_eq!(error.get_error_name(), "UnfoldableOperation");
    assert_eq!(error.to_string(), "cannot fold `#fff + #000`");
}

#[test]
fn test_non_boolean_guard_fails_fast() {
    let tokens = tokenize("p { if [10px] { width: 1px; } }".to_string(), None).unwrap();
    let (_, result) = parse(tokens, Rc::new("stdin".to_string()));

    let error = evaluate(&result.unwrap()).unwrap_err();
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NonBooleanCondition {
            found: "10px".to_string()
        }
    );
}
