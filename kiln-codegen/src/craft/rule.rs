//! Formatting rule trait.

use super::CraftContext;
use crate::FormatError;

/// Information about a formatting rule.
#[derive(Debug, Clone)]
pub struct RuleInfo {
    /// The rule name.
    pub name: &'static str,
    /// A human-readable description.
    pub description: &'static str,
}

/// A rewrite step in the formatter.
///
/// Rules run in order; each receives the full line sequence produced by the
/// previous one and returns its rewritten sequence.
///
/// Built-in rules:
/// - `MultilineRule` - one statement or block boundary per line
/// - `LinefeedsRule` - blank line between methods
/// - `ConstructorRule` - space after the `constructor` keyword
/// - `SpacingRule` - spacing around braces, control keywords and `=`
/// - `BalanceCheckRule` - brace balance precondition (strict mode only)
/// - `NestingRule` - indentation by brace depth
pub trait Rule: Send + Sync {
    /// The name of this rule (used in logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this rule does.
    fn description(&self) -> &'static str;

    /// Rewrite the line sequence.
    ///
    /// # Errors
    ///
    /// Only precondition rules fail; rewriting rules are total.
    fn apply(&self, lines: Vec<String>, ctx: &mut CraftContext)
    -> Result<Vec<String>, FormatError>;

    /// Get information about this rule.
    fn info(&self) -> RuleInfo {
        RuleInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
