//! Formatter state passed through the rules.

use crate::Indent;

/// Per-run formatter state.
#[derive(Debug, Clone)]
pub struct CraftContext {
    /// Unit emitted once per nesting level.
    pub indent: Indent,
    /// Current nesting depth, maintained by the nesting rule.
    pub cursor: usize,
}

impl CraftContext {
    /// Create a fresh context with the cursor at zero.
    pub fn new(indent: Indent) -> Self {
        Self { indent, cursor: 0 }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Indentation prefix for a nesting level.
    pub fn prefix(&self, level: usize) -> String {
        self.indent.repeat(level)
    }
}

impl Default for CraftContext {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}
