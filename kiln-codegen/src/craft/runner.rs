//! Formatter orchestrator.

use super::{
    CraftContext, Rule, RuleInfo,
    rules::{
        BalanceCheckRule, ConstructorRule, LinefeedsRule, MultilineRule, NestingRule, SpacingRule,
    },
};
use crate::{FormatError, Indent};

/// Formatter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CraftOptions {
    /// Indentation unit for each nesting level.
    pub indent: Indent,
    /// Reject unbalanced braces instead of letting the indent drift.
    pub strict: bool,
}

impl CraftOptions {
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Lines produced by a formatter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftOutput {
    pub lines: Vec<String>,
    /// Nesting depth left open at the end of the run; zero for balanced input.
    pub residual: usize,
}

impl CraftOutput {
    /// Join the lines into newline-terminated text.
    pub fn into_text(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// The formatter: an ordered list of [`Rule`]s over the lines of a text.
///
/// # Example
///
/// ```
/// use kiln_codegen::craft::{Craft, CraftOptions};
///
/// let text = Craft::new(CraftOptions::default())
///     .format("class A{constructor(){this.__a=null;}}")
///     .unwrap();
///
/// assert_eq!(text, "class A {\n  constructor () {\n    this.__a = null;\n  }\n}\n");
/// ```
pub struct Craft {
    options: CraftOptions,
    rules: Vec<Box<dyn Rule>>,
}

impl Craft {
    /// Create a formatter with the built-in rules.
    ///
    /// Strict mode inserts the balance check right before nesting.
    pub fn new(options: CraftOptions) -> Self {
        let mut rules: Vec<Box<dyn Rule>> = vec![
            Box::new(MultilineRule),
            Box::new(LinefeedsRule),
            Box::new(ConstructorRule),
            Box::new(SpacingRule),
        ];
        if options.strict {
            rules.push(Box::new(BalanceCheckRule));
        }
        rules.push(Box::new(NestingRule));

        Self { options, rules }
    }

    pub fn options(&self) -> CraftOptions {
        self.options
    }

    /// Rules in execution order.
    pub fn rules(&self) -> impl Iterator<Item = RuleInfo> + '_ {
        self.rules.iter().map(|rule| rule.info())
    }

    /// Run every rule over the lines of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Unbalanced`] in strict mode.
    pub fn run(&self, text: &str) -> Result<CraftOutput, FormatError> {
        let mut ctx = CraftContext::new(self.options.indent);
        let mut lines: Vec<String> = text.lines().map(str::to_string).collect();

        for rule in &self.rules {
            lines = rule.apply(lines, &mut ctx)?;
            tracing::trace!(rule = rule.name(), lines = lines.len(), "applied rule");
        }

        if ctx.cursor != 0 {
            tracing::warn!(residual = ctx.cursor, "unbalanced braces left the indent open");
        }
        Ok(CraftOutput {
            lines,
            residual: ctx.cursor,
        })
    }

    /// Run the rules and return the formatted text.
    pub fn format(&self, text: &str) -> Result<String, FormatError> {
        self.run(text).map(CraftOutput::into_text)
    }
}

impl Default for Craft {
    fn default() -> Self {
        Self::new(CraftOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = Craft::default().rules().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["multiline", "linefeeds", "constructor", "spacing", "nesting"]
        );

        let strict = Craft::new(CraftOptions::default().strict(true));
        let names: Vec<_> = strict.rules().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "multiline",
                "linefeeds",
                "constructor",
                "spacing",
                "balance-check",
                "nesting"
            ]
        );
    }

    #[test]
    fn test_balanced_input_has_no_residual() {
        let output = Craft::default()
            .run("class A{getA () {return 1;}getB () {return 2;}}")
            .unwrap();
        assert_eq!(output.residual, 0);
        assert_eq!(
            output.lines,
            [
                "class A {",
                "  getA () {",
                "    return 1;",
                "  }",
                "",
                "  getB () {",
                "    return 2;",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_unbalanced_input_drifts_by_default() {
        let output = Craft::default().run("class A{getA () {return 1;}").unwrap();
        assert_eq!(output.residual, 1);
    }

    #[test]
    fn test_unbalanced_input_fails_in_strict_mode() {
        let craft = Craft::new(CraftOptions::default().strict(true));
        let err = craft.run("class A{getA () {return 1;}").unwrap_err();
        assert_eq!(err, FormatError::Unbalanced { line: 4, depth: 1 });
    }

    #[test]
    fn test_tab_indent() {
        let craft = Craft::new(CraftOptions::default().indent(Indent::Tab));
        assert_eq!(craft.format("a{b;}").unwrap(), "a {\n\tb;\n}\n");
    }

    #[test]
    fn test_format_is_idempotent() {
        let craft = Craft::default();
        let once = craft
            .format("class A{constructor(){this.__a=null;}getA () {if(this.__a===null){throw new Error('x');}return this.__a;}}")
            .unwrap();
        assert_eq!(craft.format(&once).unwrap(), once);
    }
}
