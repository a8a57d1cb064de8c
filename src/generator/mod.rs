//! CSS text generation.

pub mod generator;

#[cfg(test)]
mod tests;
