use std::path::PathBuf;

use kiln_core::IdentifierError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for kiln-bean operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the bean document content and filename so parse errors can
/// point at the offending location.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn toml_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            message: source.message().to_string(),
        })
    }

    /// Create a parse error from a JSON error.
    ///
    /// serde_json reports 1-based line/column pairs; they are converted to a
    /// byte offset into the source.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self
            .offset_of(source.line(), source.column())
            .map(|offset| SourceSpan::from(offset..offset));
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            filename: self.filename.clone(),
            message: source.to_string(),
        })
    }

    fn offset_of(&self, line: usize, column: usize) -> Option<usize> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        Some((line_start + column.saturating_sub(1)).min(self.src.len()))
    }
}

/// Errors raised while loading beans, building the class schema, or
/// exercising an [`Instance`](crate::Instance).
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(kiln::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot detect bean format of '{path}'")]
    #[diagnostic(
        code(kiln::unknown_format),
        help("use a *.json or *.toml bean, or force the parser with --json or --toml")
    )]
    UnknownFormat { path: PathBuf },

    #[error("failed to parse bean '{filename}': {message}")]
    #[diagnostic(code(kiln::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        filename: String,
        message: String,
    },

    #[error(
        "invalid class name '{name}': expected hyphen separated words of ASCII letters, digits or '_', not starting with a digit"
    )]
    #[diagnostic(
        code(kiln::invalid_class_name),
        help("class names are hyphen separated words, e.g. 'software-developer'")
    )]
    InvalidClassName { name: String },

    #[error("class name is not set")]
    #[diagnostic(code(kiln::name_not_set))]
    NameNotSet,

    #[error("property \"{name}\" already exists")]
    #[diagnostic(code(kiln::duplicate_property))]
    DuplicateProperty { name: String },

    #[error("property \"{name}\" derives field \"{field}\" already used by \"{existing}\"")]
    #[diagnostic(
        code(kiln::duplicate_field),
        help("property names are compared after dropping '.' and lowercasing")
    )]
    DuplicateField {
        name: String,
        existing: String,
        field: String,
    },

    #[error("property \"{name}\" does not exist")]
    #[diagnostic(code(kiln::unknown_property))]
    UnknownProperty { name: String },

    #[error("unsupported typecheck for field \"{field}\": {found}")]
    #[diagnostic(
        code(kiln::unsupported_guard),
        help(
            "valid type checks are: string, uint, uint8, uint16, uint32, uint64, int, int8, int16, int32, int64, boolean, list, set, map, object, func"
        )
    )]
    UnsupportedGuard { field: String, found: String },

    #[error("invalid property name: {source}")]
    #[diagnostic(
        code(kiln::invalid_identifier),
        help("property names accept ASCII letters only, with '.' between words")
    )]
    InvalidIdentifier {
        #[source]
        source: IdentifierError,
    },

    #[error("property \"{name}\" is not set")]
    #[diagnostic(code(kiln::property_not_set))]
    PropertyNotSet { name: String },

    #[error("cannot set immutable property \"{name}\"")]
    #[diagnostic(code(kiln::immutable_property))]
    ImmutableProperty { name: String },

    #[error("unexpected value {value} for property \"{name}\"")]
    #[diagnostic(code(kiln::invalid_value))]
    InvalidValue { name: String, value: String },

    #[error("unsupported key \"{key}\" for class {class}")]
    #[diagnostic(code(kiln::unsupported_key))]
    UnsupportedKey { key: String, class: String },

    #[error("failed to load serialized object for class {class}: {reason}")]
    #[diagnostic(code(kiln::unloadable_record))]
    UnloadableRecord { class: String, reason: String },
}

impl Error {
    /// Create an unknown-property error.
    pub fn unknown_property(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnknownProperty { name: name.into() })
    }

    /// Create an unsupported-guard error for a field.
    pub fn unsupported_guard(field: impl Into<String>, found: impl Into<String>) -> Box<Self> {
        Box::new(Error::UnsupportedGuard {
            field: field.into(),
            found: found.into(),
        })
    }
}

impl From<IdentifierError> for Box<Error> {
    fn from(source: IdentifierError) -> Self {
        Box::new(Error::InvalidIdentifier { source })
    }
}
