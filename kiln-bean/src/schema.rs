//! The class schema registry.
//!
//! A [`ClassSchema`] holds the generated class name plus an insertion-ordered
//! set of properties. Insertion order is significant: it is the order in which
//! initializers and accessors are generated.

use indexmap::IndexMap;
use kiln_core::{Identifier, PROPERTY_DELIMITER, pascalize};
use serde_json::Value;

use crate::{Error, Guard, Result};

/// Delimiter separating words in class names (e.g., `software-developer`).
pub const CLASS_NAME_DELIMITER: char = '-';

/// One declared property.
#[derive(Debug, Clone)]
pub struct PropertyDefinition {
    default: Option<Value>,
    immutable: bool,
    guards: Vec<Guard>,
}

impl PropertyDefinition {
    /// Declared default value.
    ///
    /// Stored for completeness; generated constructors always initialize
    /// fields to the unset sentinel.
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn is_immutable(&self) -> bool {
        self.immutable
    }

    pub fn guards(&self) -> &[Guard] {
        &self.guards
    }
}

/// A property as seen while walking the schema.
#[derive(Debug, Clone)]
pub struct Property<'a> {
    pub name: &'a str,
    pub default: Option<&'a Value>,
    pub immutable: bool,
    pub identifier: Identifier,
    pub guards: &'a [Guard],
}

/// Class name plus ordered property registry.
#[derive(Debug, Clone, Default)]
pub struct ClassSchema {
    name: Option<String>,
    properties: IndexMap<String, PropertyDefinition>,
}

impl ClassSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name.
    ///
    /// Hyphen separated words are capitalized and joined, so `person-class`
    /// becomes `PersonClass`. Names must start with a letter or `_` and hold
    /// only ASCII alphanumerics, `_` and `-`.
    pub fn set_name(&mut self, raw: &str) -> Result<()> {
        let malformed = raw.is_empty()
            || raw.starts_with(|c: char| c.is_ascii_digit())
            || raw
                .chars()
                .any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == CLASS_NAME_DELIMITER))
            || raw.split(CLASS_NAME_DELIMITER).any(str::is_empty);
        if malformed {
            return Err(Box::new(Error::InvalidClassName {
                name: raw.to_string(),
            }));
        }
        self.name = Some(pascalize(raw, CLASS_NAME_DELIMITER));
        Ok(())
    }

    /// The PascalCase class name.
    pub fn name(&self) -> Result<&str> {
        self.name.as_deref().ok_or_else(|| Box::new(Error::NameNotSet))
    }

    /// Register a new property.
    ///
    /// Two properties deriving the same backing field (`first.name` and
    /// `firstname`) are rejected. Names that do not derive an identifier are
    /// accepted here and fail during iteration.
    pub fn add_property(
        &mut self,
        name: &str,
        default: Option<Value>,
        immutable: bool,
    ) -> Result<()> {
        if self.properties.contains_key(name) {
            return Err(Box::new(Error::DuplicateProperty {
                name: name.to_string(),
            }));
        }
        if let Some(field) = field_for(name)
            && let Some(existing) = self
                .properties
                .keys()
                .find(|existing| field_for(existing).as_ref() == Some(&field))
        {
            return Err(Box::new(Error::DuplicateField {
                name: name.to_string(),
                existing: existing.clone(),
                field,
            }));
        }
        self.properties.insert(
            name.to_string(),
            PropertyDefinition {
                default,
                immutable,
                guards: Vec::new(),
            },
        );
        Ok(())
    }

    /// Remove a property and its guards, returning the removed name.
    pub fn remove_property(&mut self, name: &str) -> Result<String> {
        self.properties
            .shift_remove_entry(name)
            .map(|(name, _)| name)
            .ok_or_else(|| Error::unknown_property(name))
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDefinition> {
        self.properties.get(name)
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Attach a guard to an existing property.
    ///
    /// Guards are deduplicated by handle identity: re-adding a handle that is
    /// already attached is a no-op, while a distinct handle with identical
    /// behavior is appended.
    pub fn add_property_guard(&mut self, name: &str, guard: Guard) -> Result<()> {
        let property = self
            .properties
            .get_mut(name)
            .ok_or_else(|| Error::unknown_property(name))?;
        if !property.guards.iter().any(|g| g.same_handle(&guard)) {
            property.guards.push(guard);
        }
        Ok(())
    }

    /// Detach and return every guard of a property.
    pub fn remove_property_guards(&mut self, name: &str) -> Result<Vec<Guard>> {
        let property = self
            .properties
            .get_mut(name)
            .ok_or_else(|| Error::unknown_property(name))?;
        Ok(std::mem::take(&mut property.guards))
    }

    /// Guards of a property; empty when the property has none or is unknown.
    pub fn property_guards(&self, name: &str) -> &[Guard] {
        self.properties
            .get(name)
            .map(PropertyDefinition::guards)
            .unwrap_or_default()
    }

    /// Walk `(name, identifier)` pairs in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = Result<(&str, Identifier)>> + '_ {
        self.properties
            .keys()
            .map(|name| {
                identifier_for(name).map(move |identifier| (name.as_str(), identifier))
            })
    }

    /// Walk every property with its default, flags, identifier and guards.
    pub fn all(&self) -> impl Iterator<Item = Result<Property<'_>>> + '_ {
        self.properties.iter().map(|(name, definition)| {
            identifier_for(name).map(move |identifier| Property {
                name: name.as_str(),
                default: definition.default.as_ref(),
                immutable: definition.immutable,
                identifier,
                guards: &definition.guards,
            })
        })
    }
}

fn identifier_for(name: &str) -> Result<Identifier> {
    Ok(Identifier::from_name(name, Some(PROPERTY_DELIMITER))?)
}

fn field_for(name: &str) -> Option<String> {
    Identifier::from_name(name, Some(PROPERTY_DELIMITER))
        .and_then(|identifier| identifier.field())
        .ok()
}
