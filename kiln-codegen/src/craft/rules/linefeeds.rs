//! Linefeeds rule - separate methods with a blank line.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

static METHOD_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+\s*\(.*\)\s*\{").expect("method header regex should be valid")
});

/// Inserts an empty line after a line holding `}` when the next line opens a
/// method or control block (`name (...) {`).
pub struct LinefeedsRule;

impl Rule for LinefeedsRule {
    fn name(&self) -> &'static str {
        "linefeeds"
    }

    fn description(&self) -> &'static str {
        "Insert blank lines between blocks"
    }

    fn apply(
        &self,
        lines: Vec<String>,
        _ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        let mut out = Vec::with_capacity(lines.len());
        let mut lines = lines.into_iter().peekable();
        while let Some(line) = lines.next() {
            let separate = line.contains('}')
                && lines
                    .peek()
                    .is_some_and(|next| METHOD_HEADER.is_match(next));
            out.push(line);
            if separate {
                out.push(String::new());
            }
        }
        Ok(out)
    }
}
