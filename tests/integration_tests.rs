//! Integration tests for end-to-end compilation.
//!
//! These tests run source text through the complete pipeline: tokenization,
//! parsing, type checking, evaluation and CSS generation.

use std::rc::Rc;

use icss::{
    ast::{
        ast::{ExprKind, Item, Stmt},
        statements::Stylesheet,
    },
    compiler::compiler::compile,
    config::CompilerConfig,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    generator::generator::generate,
    lexer::lexer::tokenize,
    parser::parser::parse,
    render_error,
    type_checker::type_checker::type_check,
};

fn css(source: &str) -> String {
    compile(source, &CompilerConfig::default())
        .unwrap_or_else(|errors| panic!("unexpected diagnostics: {:?}", errors))
        .unwrap()
}

fn diagnostics(source: &str) -> Vec<Error> {
    compile(source, &CompilerConfig::default()).unwrap_err()
}

fn names(errors: &[Error]) -> Vec<&str> {
    errors.iter().map(Error::get_error_name).collect()
}

#[test]
fn test_compile_variables_and_multiplication() {
    let source = "--size: 10px; p { width: --size * 2; color: #ff0000; }";
    assert_eq!(css(source), "p {\n  width: 20px;\n  color: #ff0000;\n}\n");
}

#[test]
fn test_unknown_property_rejects_everything() {
    let errors = diagnostics("p { margin: 10px; } a { width: 1px; }");
    assert_eq!(names(&errors), vec!["UnknownPropertyError"]);
}

#[test]
fn test_additive_folding() {
    assert_eq!(css("p { width: 10px + 5px; }"), "p {\n  width: 15px;\n}\n");
    assert_eq!(
        css("p { height: 50% - 20% + 5%; }"),
        "p {\n  height: 35%;\n}\n"
    );
}

#[test]
fn test_additive_mismatch_is_rejected() {
    let errors = diagnostics("p { width: 10px + 50%; }");
    assert_eq!(names(&errors), vec!["OperandTypeMismatchError"]);
}

#[test]
fn test_multiplication_either_order() {
    assert_eq!(css("p { width: 2 * 10px; }"), "p {\n  width: 20px;\n}\n");
    assert_eq!(css("p { width: 10px * 2; }"), "p {\n  width: 20px;\n}\n");
    assert_eq!(css("p { width: 2 * 3 * 10%; }"), "p {\n  width: 60%;\n}\n");
}

#[test]
fn test_multiplication_without_scalar_is_rejected() {
    let errors = diagnostics("p { width: 10px * 20px; }");
    assert_eq!(names(&errors), vec!["InvalidScalarOperandError"]);
}

#[test]
fn test_if_true_takes_body() {
    assert_eq!(
        css("p { if (true) { width: 10px; } else { width: 20px; } }"),
        "p {\n  width: 10px;\n}\n"
    );
}

#[test]
fn test_if_false_without_else() {
    assert_eq!(css("p { if (false) { width: 10px; } }"), "p {\n}\n");
}

#[test]
fn test_if_false_takes_else() {
    assert_eq!(
        css("--Wide := FALSE; p { if [--Wide] { width: 100%; } else { width: 50%; } }"),
        "p {\n  width: 50%;\n}\n"
    );
}

#[test]
fn test_scoped_bindings() {
    let source = "
        --w: 10px;
        p {
            --w: 20px;
            width: --w;
            if [true] {
                --w: 30px;
                height: --w;
            }
            color: #000;
        }
        a { width: --w; }
    ";

    assert_eq!(
        css(source),
        "p {\n  width: 20px;\n  height: 30px;\n  color: #000;\n}\na {\n  width: 10px;\n}\n"
    );
}

#[test]
fn test_branch_variable_is_out_of_scope_after_branch() {
    let errors = diagnostics("p { if [true] { --inner: 1px; } width: --inner; }");
    assert_eq!(names(&errors), vec!["UndefinedVariableError"]);
}

#[test]
fn test_all_diagnostics_in_one_pass() {
    let source = "
        p { margin: 1px; }
        a { width: --undefined; }
        div { if [1px] { color: 10px; } }
        span { height: 1px * 1%; }
    ";

    let errors = diagnostics(source);
    assert_eq!(
        names(&errors),
        vec![
            "UnknownPropertyError",
            "UndefinedVariableError",
            "InvalidConditionTypeError",
            "PropertyTypeViolationError",
            "InvalidScalarOperandError",
        ]
    );
}

#[test]
fn test_classic_level_syntax() {
    let source = "
        LinkColor := #ff0000;
        ParWidth := 500px;
        AdjustColor := TRUE;
        UseLinkColor := FALSE;

        p {
            background-color: #ffffff;
            width: ParWidth;
            if[AdjustColor] {
                color: #124532;
                if[UseLinkColor]{
                    background-color: LinkColor;
                } else {
                    background-color: #000000;
                }
            }
        }

        a {
            color: LinkColor;
        }
        #menu {
            width: ParWidth - 20px * 2;
        }
        .active {
            color: #fff;
        }
    ";

    let expected = "\
p {
  background-color: #ffffff;
  width: 500px;
  color: #124532;
  background-color: #000000;
}
a {
  color: #ff0000;
}
#menu {
  width: 460px;
}
.active {
  color: #fff;
}
";

    assert_eq!(css(source), expected);
}

#[test]
fn test_comments_are_ignored() {
    let source = "/* header */ --w: 1px; // line\np { width: --w; /* inline */ }";
    assert_eq!(css(source), "p {\n  width: 1px;\n}\n");
}

#[test]
fn test_staged_pipeline_and_idempotence() {
    let source = "--c: #abc; p, .x { if [true] { color: --c; } width: 3 * 2px; }";
    let tokens = tokenize(source.to_string(), Some("test.icss".to_string())).unwrap();
    let (_, parsed) = parse(tokens, Rc::new("test.icss".to_string()));
    let mut ast: Stylesheet = parsed.unwrap();

    type_check(&mut ast);
    assert!(!ast.has_errors());

    let evaluated = evaluate(&ast).unwrap();
    for item in evaluated.iter() {
        let Item::Rule(rule) = item else {
            panic!("assignment survived evaluation");
        };
        for stmt in rule.body.iter() {
            let Stmt::Declaration(declaration) = stmt else {
                panic!("non-declaration survived evaluation");
            };
            assert!(matches!(declaration.value.kind, ExprKind::Literal(_)));
        }
    }

    assert_eq!(evaluate(&evaluated).unwrap(), evaluated);
    assert_eq!(
        generate(&evaluated),
        "p, .x {\n  color: #abc;\n  width: 6px;\n}\n"
    );
}

#[test]
fn test_rendered_diagnostic() {
    let source = "p {\n  width: --x;\n}\n";
    let config = CompilerConfig::default().with_file_name("style.icss");
    let errors = compile(source, &config).unwrap_err();

    let rendered = render_error(&errors[0], source, &config.file_name);
    assert!(rendered.starts_with("Error: UndefinedVariableError"));
    assert!(rendered.contains("-> style.icss"));
    assert!(rendered.contains("2 | width: --x;"));
}
