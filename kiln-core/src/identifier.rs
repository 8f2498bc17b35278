//! Identifier derivation for generated class members.
//!
//! An [`Identifier`] turns a raw property name such as `first.name` into the
//! family of names used by generated code: a mangled backing field
//! (`__firstname`), a getter (`getFirstName`) and a setter (`setFirstName`).

use thiserror::Error;

use crate::utils::{capitalize, pascalize};

/// Delimiter separating words in bean property names (e.g., `person.name`).
pub const PROPERTY_DELIMITER: char = '.';

/// Prefix marking a backing field as private to the generated class.
const FIELD_PREFIX: &str = "__";

/// Errors raised while validating, building or reading an [`Identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("unexpected characters in name '{name}': {}", describe_positions(.invalid))]
    InvalidCharacters {
        name: String,
        invalid: Vec<(usize, char)>,
    },

    #[error("cannot build an identifier from an empty name")]
    Empty,

    #[error("name '{name}' contains an empty segment")]
    EmptySegment { name: String },

    #[error("must validate '{name}' before building it")]
    NotValidated { name: String },

    #[error("must build '{name}' before reading its {accessor}")]
    NotBuilt {
        name: String,
        accessor: &'static str,
    },
}

fn describe_positions(invalid: &[(usize, char)]) -> String {
    invalid
        .iter()
        .map(|(index, c)| format!("{:?} at {}", c, index))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Derived names for one raw property name.
///
/// Only ASCII letters are accepted. An optional delimiter may appear strictly
/// inside the name to separate words; each word is capitalized when the
/// identifier is built.
///
/// # Example
///
/// ```
/// use kiln_core::Identifier;
///
/// let ident = Identifier::from_name("first.name", Some('.')).unwrap();
/// assert_eq!(ident.field().unwrap(), "__firstname");
/// assert_eq!(ident.getter_name().unwrap(), "getFirstName");
/// assert_eq!(ident.setter_name().unwrap(), "setFirstName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    raw: String,
    delimiter: Option<char>,
    invalid: Vec<(usize, char)>,
    validated: bool,
    pascal: Option<String>,
}

impl Identifier {
    /// Create an unvalidated, unbuilt identifier.
    pub fn new(raw: impl Into<String>, delimiter: Option<char>) -> Self {
        Self {
            raw: raw.into(),
            delimiter,
            invalid: Vec::new(),
            validated: false,
            pascal: None,
        }
    }

    /// Validate and build in one step.
    pub fn from_name(
        raw: impl Into<String>,
        delimiter: Option<char>,
    ) -> Result<Self, IdentifierError> {
        let mut ident = Self::new(raw, delimiter);
        ident.validate()?.build()?;
        Ok(ident)
    }

    /// Check every character of the raw name.
    ///
    /// All offending `(index, char)` pairs are collected before failing, so the
    /// error reports the full set rather than the first hit.
    pub fn validate(&mut self) -> Result<&mut Self, IdentifierError> {
        let last = self.raw.chars().count().saturating_sub(1);
        self.invalid = self
            .raw
            .chars()
            .enumerate()
            .filter(|&(i, c)| {
                let interior_delimiter = self.delimiter == Some(c) && i > 0 && i < last;
                !interior_delimiter && !c.is_ascii_alphabetic()
            })
            .collect();
        self.validated = true;

        if self.invalid.is_empty() {
            Ok(self)
        } else {
            Err(IdentifierError::InvalidCharacters {
                name: self.raw.clone(),
                invalid: self.invalid.clone(),
            })
        }
    }

    /// Derive the PascalCase token.
    ///
    /// Building an already built identifier leaves it unchanged.
    pub fn build(&mut self) -> Result<&mut Self, IdentifierError> {
        if self.pascal.is_some() {
            return Ok(self);
        }
        if !self.validated || !self.invalid.is_empty() {
            return Err(IdentifierError::NotValidated {
                name: self.raw.clone(),
            });
        }
        if self.raw.is_empty() {
            return Err(IdentifierError::Empty);
        }

        let pascal = match self.delimiter {
            Some(delimiter) => {
                if self.raw.split(delimiter).any(str::is_empty) {
                    return Err(IdentifierError::EmptySegment {
                        name: self.raw.clone(),
                    });
                }
                pascalize(&self.raw, delimiter)
            }
            None => capitalize(&self.raw),
        };
        self.pascal = Some(pascal);
        Ok(self)
    }

    /// The raw name this identifier was created from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The optional word delimiter.
    pub fn delimiter(&self) -> Option<char> {
        self.delimiter
    }

    pub fn is_built(&self) -> bool {
        self.pascal.is_some()
    }

    /// Offending characters found by the last validation.
    pub fn invalid_chars(&self) -> &[(usize, char)] {
        &self.invalid
    }

    /// The PascalCase token (e.g., `FirstName`).
    pub fn pascal(&self) -> Result<&str, IdentifierError> {
        self.built("pascal name")
    }

    /// Mangled backing field name (e.g., `__firstname`).
    pub fn field(&self) -> Result<String, IdentifierError> {
        let pascal = self.built("field")?;
        Ok(format!("{}{}", FIELD_PREFIX, pascal.to_lowercase()))
    }

    /// Getter method name (e.g., `getFirstName`).
    pub fn getter_name(&self) -> Result<String, IdentifierError> {
        Ok(format!("get{}", self.built("getter")?))
    }

    /// Setter method name (e.g., `setFirstName`).
    pub fn setter_name(&self) -> Result<String, IdentifierError> {
        Ok(format!("set{}", self.built("setter")?))
    }

    fn built(&self, accessor: &'static str) -> Result<&str, IdentifierError> {
        self.pascal
            .as_deref()
            .ok_or_else(|| IdentifierError::NotBuilt {
                name: self.raw.clone(),
                accessor,
            })
    }
}
