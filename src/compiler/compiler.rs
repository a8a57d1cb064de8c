//! Compilation pipeline.
//!
//! Drives a source text through every stage: tokenize, parse, type check,
//! then, only if no node carries a diagnostic, evaluate and generate.

use std::{rc::Rc, time::Instant};

use tracing::{debug, warn};

use crate::{
    ast::statements::Stylesheet,
    config::CompilerConfig,
    errors::errors::Error,
    evaluator::evaluator::evaluate,
    generator::generator::generate_with_indent,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

/// Parses and type checks `source`.
///
/// Returns the checked tree, or every diagnostic it carries. A lexing or
/// parsing failure yields exactly one error.
pub fn check(source: &str, config: &CompilerConfig) -> Result<Stylesheet, Vec<Error>> {
    let start = Instant::now();
    let tokens = tokenize(source.to_string(), Some(config.file_name.clone()))
        .map_err(|error| vec![error])?;
    debug!("tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let (_, parsed) = parse(tokens, Rc::new(config.file_name.clone()));
    let mut ast = parsed.map_err(|error| vec![error])?;
    debug!("parsed in {:?}", parse_start.elapsed());

    let type_check_start = Instant::now();
    type_check(&mut ast);
    debug!("type checked in {:?}", type_check_start.elapsed());

    if ast.has_errors() {
        let errors: Vec<Error> = ast.collect_errors().into_iter().cloned().collect();
        warn!(errors = errors.len(), file = %config.file_name, "stylesheet rejected");
        return Err(errors);
    }

    Ok(ast)
}

/// Compiles `source` to CSS.
///
/// `Ok(None)` when `config.check_only` is set and the stylesheet is valid.
pub fn compile(source: &str, config: &CompilerConfig) -> Result<Option<String>, Vec<Error>> {
    let start = Instant::now();
    let ast = check(source, config)?;

    if config.check_only {
        debug!("checked in {:?}", start.elapsed());
        return Ok(None);
    }

    let evaluate_start = Instant::now();
    let evaluated = evaluate(&ast).map_err(|error| {
        warn!(%error, "evaluation failed");
        vec![error]
    })?;
    debug!("evaluated in {:?}", evaluate_start.elapsed());

    let generate_start = Instant::now();
    let css = generate_with_indent(&evaluated, config.indent);
    debug!("generated in {:?}", generate_start.elapsed());

    debug!("total time: {:?}", start.elapsed());
    Ok(Some(css))
}
