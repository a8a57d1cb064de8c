/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Expression node, statement enums and per-node diagnostics
/// - expressions: Literal values and arithmetic operators
/// - statements: Stylesheet, rules, declarations, assignments and conditionals
/// - types: Semantic types assigned by the type checker
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
