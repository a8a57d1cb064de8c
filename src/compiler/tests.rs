use crate::config::CompilerConfig;

use super::compiler::{check, compile};

#[test]
fn test_compile_default_config() {
    let css = compile("p { width: 1px + 1px; }", &CompilerConfig::default()).unwrap();
    assert_eq!(css.as_deref(), Some("p {\n  width: 2px;\n}\n"));
}

#[test]
fn test_check_only_generates_nothing() {
    let config = CompilerConfig::default().with_check_only(true);
    assert_eq!(compile("p { width: 1px; }", &config), Ok(None));
}

#[test]
fn test_check_only_still_reports() {
    let config = CompilerConfig::default().with_check_only(true);
    let errors = compile("p { width: #fff; }", &config).unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_indent_is_configurable() {
    let config = CompilerConfig::default().with_indent(0);
    let css = compile("p { width: 1px; }", &config).unwrap().unwrap();
    assert_eq!(css, "p {\nwidth: 1px;\n}\n");
}

#[test]
fn test_file_name_is_recorded_in_positions() {
    let config = CompilerConfig::default().with_file_name("style.icss");
    let errors = check("p { width: --x; }", &config).unwrap_err();
    assert_eq!(errors[0].get_position().1.as_str(), "style.icss");
}

#[test]
fn test_lexer_error_is_single() {
    let errors = compile("p { width: 1px; } @", &CompilerConfig::default()).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_parse_error_is_single() {
    let errors = compile("p { width 1px; }", &CompilerConfig::default()).unwrap_err();
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_evaluator_error_is_surfaced() {
    let errors = compile("p { color: #fff + #000; }", &CompilerConfig::default()).unwrap_err();
    assert_eq!(errors[0].get_error_name(), "UnfoldableOperation");
}
