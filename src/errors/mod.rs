//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the front end, the type checker and the evaluator
//! - Error names and suggestions used when rendering diagnostics
//!
//! Type checker errors are never returned early; they are attached to the
//! offending AST node (see [`crate::ast::ast::Diagnostics`]).

pub mod errors;
