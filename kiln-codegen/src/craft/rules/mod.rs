//! Built-in formatting rules.

mod balance;
mod constructor;
mod linefeeds;
mod multiline;
mod nesting;
mod spacing;

pub use balance::BalanceCheckRule;
pub use constructor::ConstructorRule;
pub use linefeeds::LinefeedsRule;
pub use multiline::MultilineRule;
pub use nesting::NestingRule;
pub use spacing::SpacingRule;
