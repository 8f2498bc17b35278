//! Rule-based source formatter.
//!
//! The assembler emits compact single-line classes; [`Craft`] lays them out
//! by running a fixed sequence of [`Rule`]s over the text's lines:
//!
//! - Multiline → Linefeeds → Constructor → Spacing → Nesting
//! - strict mode runs a balance check right before Nesting
//!
//! Each run allocates a fresh [`CraftContext`], so the nesting cursor never
//! leaks between runs.

mod context;
mod rule;
pub mod rules;
mod runner;

pub use context::CraftContext;
pub use rule::{Rule, RuleInfo};
pub use runner::{Craft, CraftOptions, CraftOutput};
