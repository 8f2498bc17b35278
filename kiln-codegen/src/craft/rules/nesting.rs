//! Nesting rule - indent lines by brace depth.

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

/// Prefixes each line with one indent unit per open block.
///
/// A line holding `{` is printed at the current depth and opens a level; a
/// line holding `}` closes a level and is printed at the lowered depth. The
/// depth never goes below zero, and empty lines get no prefix.
pub struct NestingRule;

impl Rule for NestingRule {
    fn name(&self) -> &'static str {
        "nesting"
    }

    fn description(&self) -> &'static str {
        "Indent by block depth"
    }

    fn apply(
        &self,
        lines: Vec<String>,
        ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        ctx.reset();
        let out = lines
            .iter()
            .map(|line| {
                let content = line.trim_start();
                let mut level = ctx.cursor;
                if content.contains('{') {
                    ctx.cursor += 1;
                }
                if content.contains('}') {
                    ctx.cursor = ctx.cursor.saturating_sub(1);
                    level = ctx.cursor;
                }
                if content.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", ctx.prefix(level), content)
                }
            })
            .collect();
        Ok(out)
    }
}
