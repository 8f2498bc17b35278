//! Balance check - strict-mode precondition for nesting.

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

/// Fails when a `}` has no opener or a `{` is never closed.
///
/// Without this rule the nesting cursor silently drifts on such input.
pub struct BalanceCheckRule;

impl Rule for BalanceCheckRule {
    fn name(&self) -> &'static str {
        "balance-check"
    }

    fn description(&self) -> &'static str {
        "Reject unbalanced braces"
    }

    fn apply(
        &self,
        lines: Vec<String>,
        _ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        let mut depth: isize = 0;
        for (index, line) in lines.iter().enumerate() {
            for c in line.chars() {
                match c {
                    '{' => depth += 1,
                    '}' => depth -= 1,
                    _ => continue,
                }
                if depth < 0 {
                    return Err(FormatError::Unbalanced {
                        line: index + 1,
                        depth,
                    });
                }
            }
        }
        if depth != 0 {
            return Err(FormatError::Unbalanced {
                line: lines.len(),
                depth,
            });
        }
        Ok(lines)
    }
}
