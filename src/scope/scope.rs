use std::collections::HashMap;

use tracing::trace;

/// A chain of nested binding frames.
///
/// The type checker binds names to types, the evaluator binds them to
/// literal values; both use the same push/pop/lookup discipline. The root
/// frame is created with the stack and is never popped.
#[derive(Debug)]
pub struct ScopeStack<T> {
    frames: Vec<HashMap<String, T>>,
}

impl<T> Default for ScopeStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ScopeStack<T> {
    pub fn new() -> Self {
        ScopeStack {
            frames: vec![HashMap::new()],
        }
    }

    /// Enters a new, empty scope.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
        trace!(depth = self.frames.len(), "entered scope");
    }

    /// Leaves the innermost scope, dropping its bindings.
    ///
    /// Returns `None` instead of removing the root frame.
    pub fn pop(&mut self) -> Option<HashMap<String, T>> {
        if self.frames.len() <= 1 {
            return None;
        }

        let frame = self.frames.pop();
        trace!(depth = self.frames.len(), "left scope");
        frame
    }

    /// Searches the frames from innermost to outermost.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Binds `name` in the innermost frame. An existing binding in the same
    /// frame is replaced; outer frames are never touched.
    pub fn bind(&mut self, name: impl Into<String>, value: T) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Runs `f` inside a fresh scope. The scope is popped whatever `f`
    /// returns, including an `Err`.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.push();
        let result = f(self);
        self.pop();
        result
    }
}
