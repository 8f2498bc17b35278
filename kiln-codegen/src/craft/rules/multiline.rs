//! Multiline rule - split lines after block and statement boundaries.

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

const BOUNDARIES: [char; 3] = ['{', '}', ';'];

/// Splits each line right after its first `{`, `}` or `;` whenever content
/// follows, so every boundary token ends a line.
pub struct MultilineRule;

impl Rule for MultilineRule {
    fn name(&self) -> &'static str {
        "multiline"
    }

    fn description(&self) -> &'static str {
        "Break lines after braces and semicolons"
    }

    fn apply(
        &self,
        lines: Vec<String>,
        _ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            let mut rest = line;
            while let Some(at) = split_point(&rest) {
                let tail = rest[at..].trim_start().to_string();
                rest.truncate(at);
                out.push(std::mem::replace(&mut rest, tail));
            }
            out.push(rest);
        }
        Ok(out)
    }
}

/// Byte offset just past the first boundary token, if anything follows it.
fn split_point(line: &str) -> Option<usize> {
    let end = line.find(BOUNDARIES)? + 1;
    (!line[end..].trim().is_empty()).then_some(end)
}
