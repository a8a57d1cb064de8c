//! Pipeline driver tying the stages together.

pub mod compiler;

#[cfg(test)]
mod tests;
