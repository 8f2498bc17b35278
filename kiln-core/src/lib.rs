//! Core utilities and types for the kiln class generator.
//!
//! This crate provides the identifier builder used to derive accessor names
//! from raw property names, plus the text and file helpers shared by the
//! other kiln crates.

mod file;
mod identifier;
mod utils;

// File operations
pub use file::{File, WriteResult};
// Identifier derivation
pub use identifier::{Identifier, IdentifierError, PROPERTY_DELIMITER};
// String utilities
pub use utils::{capitalize, pascalize};
