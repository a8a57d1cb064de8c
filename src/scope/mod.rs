//! Lexical scoping shared by the type checker and the evaluator.
//!
//! A [`scope::ScopeStack`] mirrors block nesting: the stylesheet owns the
//! root frame, every rule and every conditional branch pushes a child frame
//! for the duration of its body.

pub mod scope;
