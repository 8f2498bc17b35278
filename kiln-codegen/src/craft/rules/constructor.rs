//! Constructor rule - space after the first `constructor` keyword.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

static CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bconstructor\b").expect("constructor regex should be valid")
});

/// Normalizes the gap after the first `constructor` keyword to one space.
/// Later occurrences are left untouched.
pub struct ConstructorRule;

impl Rule for ConstructorRule {
    fn name(&self) -> &'static str {
        "constructor"
    }

    fn description(&self) -> &'static str {
        "Space the constructor signature"
    }

    fn apply(
        &self,
        mut lines: Vec<String>,
        _ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        let found = lines
            .iter()
            .enumerate()
            .find_map(|(index, line)| CONSTRUCTOR.find(line).map(|m| (index, m.end())));

        if let Some((index, end)) = found {
            let line = &lines[index];
            let rest = line[end..].trim_start();
            if !rest.is_empty() {
                let spaced = format!("{} {}", &line[..end], rest);
                lines[index] = spaced;
            }
        }
        Ok(lines)
    }
}
