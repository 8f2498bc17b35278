//! JavaScript class generation for kiln.
//!
//! # Module Organization
//!
//! - [`assembler`] - compact class text from a [`ClassSchema`](kiln_bean::ClassSchema)
//! - [`craft`] - rule-based formatter that lays the compact text out
//! - [`generator`] - assemble, format and write in one step

pub mod assembler;
pub mod craft;
mod error;
pub mod generator;
mod indent;

pub use assembler::{Assembler, GeneratedSource};
pub use craft::{Craft, CraftOptions};
pub use error::{AssemblyError, FormatError};
pub use generator::{GenerateResult, Generator};
pub use indent::Indent;
