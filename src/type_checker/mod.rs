//! Type checking and semantic analysis module.
//!
//! This module performs type checking on the parsed stylesheet. In a single
//! depth-first walk it:
//!
//! - Assigns a semantic type to every expression
//! - Resolves variable references against the active scopes
//! - Validates operator rules for `+`, `-` and `*`
//! - Validates declarations against the property table
//! - Requires conditional guards to be boolean
//!
//! Errors are recorded on the offending node and the walk continues, so one
//! pass yields every diagnostic in the stylesheet.

pub mod properties;
pub mod type_checker;
