//! Bean loading and the class schema registry.
//!
//! A bean describes a class: a name plus an ordered set of properties, each
//! with a type guard and an optional immutability flag. This crate parses bean
//! documents (JSON or TOML), resolves guard tokens, and exposes the
//! [`ClassSchema`] registry consumed by the code generator.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod bean;
mod error;
mod guard;
mod instance;
mod schema;

pub use bean::{Bean, BeanFormat, GuardSpec, IMMUTABLE_SENTINEL, PropertySpec, bean_stem};
pub use error::{Error, Result, SourceContext};
pub use guard::{Guard, GuardKind, TypeCheck};
pub use instance::Instance;
pub use schema::{CLASS_NAME_DELIMITER, ClassSchema, Property, PropertyDefinition};

/// Load a bean file and resolve it into a class schema.
pub fn load_schema(
    path: impl AsRef<std::path::Path>,
    format: Option<BeanFormat>,
) -> Result<ClassSchema> {
    Bean::from_file(path, format)?.into_schema()
}
