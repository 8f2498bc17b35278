//! Spacing rule - whitespace around braces, control keywords and `=`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    FormatError,
    craft::{CraftContext, Rule},
};

static CONTROL_PAREN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(if|for|while)\(").expect("control keyword regex should be valid")
});

/// Longest run of `=` treated as an operator (`=`, `==`, `===`).
const MAX_OPERATOR_RUN: usize = 3;

/// Applies three per-line fixes:
/// a space before the first `{`, a space between `if`/`for`/`while` and `(`,
/// and exactly one space around assignment and equality operators.
pub struct SpacingRule;

impl Rule for SpacingRule {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn description(&self) -> &'static str {
        "Normalize spacing around braces and operators"
    }

    fn apply(
        &self,
        lines: Vec<String>,
        _ctx: &mut CraftContext,
    ) -> Result<Vec<String>, FormatError> {
        Ok(lines.iter().map(|line| space_line(line)).collect())
    }
}

fn space_line(line: &str) -> String {
    let line = space_brace(line);
    let line = CONTROL_PAREN.replace_all(&line, "$1 (");
    space_operators(&line)
}

fn space_brace(line: &str) -> String {
    match line.find('{') {
        Some(at) if at > 0 && !line[..at].ends_with(char::is_whitespace) => {
            format!("{} {}", &line[..at], &line[at..])
        }
        _ => line.to_string(),
    }
}

fn space_operators(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '=' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && chars[i] == '=' {
            i += 1;
        }
        let before = start.checked_sub(1).map(|j| chars[j]);
        let after = chars.get(i).copied();
        let is_operator = i - start <= MAX_OPERATOR_RUN
            && !before.is_some_and(is_comparison)
            && !after.is_some_and(is_comparison);
        if !is_operator {
            out.extend(&chars[start..i]);
            continue;
        }

        out.truncate(out.trim_end().len());
        if !out.is_empty() {
            out.push(' ');
        }
        out.extend(&chars[start..i]);
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        if i < chars.len() {
            out.push(' ');
        }
    }
    out
}

fn is_comparison(c: char) -> bool {
    matches!(c, '<' | '>' | '!')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_before_brace() {
        assert_eq!(space_line("class Person{"), "class Person {");
        assert_eq!(space_line("getName () {"), "getName () {");
        assert_eq!(space_line("{"), "{");
        // only the first brace
        assert_eq!(space_line("a{b{"), "a {b{");
    }

    #[test]
    fn test_control_keywords() {
        assert_eq!(space_line("if(x){"), "if (x) {");
        assert_eq!(space_line("for(let k of ks){"), "for (let k of ks) {");
        assert_eq!(space_line("while(true){"), "while (true) {");
        assert_eq!(space_line("notif(x);"), "notif(x);");
    }

    #[test]
    fn test_operators() {
        assert_eq!(space_line("this.__a=null;"), "this.__a = null;");
        assert_eq!(space_line("if(a===b){"), "if (a === b) {");
        assert_eq!(space_line("a  ==   b"), "a == b");
        assert_eq!(space_line("a====b"), "a====b");
    }

    #[test]
    fn test_comparisons_untouched() {
        let guard = "let test=v => v >= 0 && v <= 9 && v !== null;";
        assert_eq!(
            space_line(guard),
            "let test = v => v >= 0 && v <= 9 && v !== null;"
        );
    }

    #[test]
    fn test_idempotent() {
        for line in [
            "if (this.__personname === null) {",
            "let serialized = JSON.stringify(object);",
            "return keepObject === true ? JSON.parse(serialized) : serialized;",
        ] {
            assert_eq!(space_line(line), line);
        }
    }

    #[test]
    fn test_apply_keeps_line_count() {
        let lines = vec!["a=b;".to_string(), String::new(), "c{".to_string()];
        let out = SpacingRule
            .apply(lines, &mut CraftContext::default())
            .unwrap();
        assert_eq!(out, ["a = b;", "", "c {"]);
    }
}
