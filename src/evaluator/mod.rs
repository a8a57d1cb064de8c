//! Constant evaluation.
//!
//! Turns a checked stylesheet into a new one that holds only rules and
//! literal-valued declarations: variables are substituted, arithmetic is
//! folded and conditionals are replaced by the branch they select.

pub mod evaluator;
pub mod expr;

#[cfg(test)]
mod tests;
