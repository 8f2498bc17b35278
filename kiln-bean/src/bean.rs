//! Bean documents.
//!
//! A bean maps property keys to either a type-check token or a configuration
//! record:
//!
//! ```json
//! {
//!   "$first.name": "string",
//!   "salary": { "typeCheck": "uint16", "defaultValue": 1000, "immutable": false }
//! }
//! ```
//!
//! A leading `$` on a key marks the property immutable. The class name comes
//! from the bean's file stem.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{ClassSchema, Error, Guard, Result, TypeCheck, error::SourceContext};

/// Key prefix marking a property immutable.
pub const IMMUTABLE_SENTINEL: char = '$';

/// Supported bean document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeanFormat {
    Json,
    Toml,
}

impl BeanFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(Box::new(Error::UnknownFormat {
                path: path.to_path_buf(),
            })),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }
}

/// How a property's guard is specified.
#[derive(Debug, Clone)]
pub enum GuardSpec {
    /// A type-check token such as `"uint8"`.
    Token(String),
    /// A guard handle supplied by host code.
    Guard(Guard),
    /// Anything else found in a document; rejected when the bean is resolved.
    Unsupported(Value),
}

impl GuardSpec {
    fn resolve(self, field: &str) -> Result<Guard> {
        match self {
            Self::Token(token) => TypeCheck::from_token(&token)
                .map(TypeCheck::guard)
                .ok_or_else(|| Error::unsupported_guard(field, format!("\"{}\"", token))),
            Self::Guard(guard) => Ok(guard),
            Self::Unsupported(value) => Err(Error::unsupported_guard(field, value.to_string())),
        }
    }
}

/// One bean entry.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    pub check: GuardSpec,
    pub default_value: Option<Value>,
    pub immutable: bool,
}

impl PropertySpec {
    /// A property guarded by a type-check token.
    pub fn token(token: impl Into<String>) -> Self {
        Self::with_check(GuardSpec::Token(token.into()))
    }

    /// A property guarded by a host-supplied guard.
    pub fn guard(guard: Guard) -> Self {
        Self::with_check(GuardSpec::Guard(guard))
    }

    fn with_check(check: GuardSpec) -> Self {
        Self {
            check,
            default_value: None,
            immutable: false,
        }
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn immutable(mut self) -> Self {
        self.immutable = true;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSpec {
    Token(String),
    Config(RawConfig),
    Other(Value),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    default_value: Option<Value>,
    #[serde(default)]
    type_check: Option<Value>,
    #[serde(default)]
    immutable: Option<Value>,
}

impl From<RawSpec> for PropertySpec {
    fn from(raw: RawSpec) -> Self {
        match raw {
            RawSpec::Token(token) => PropertySpec::token(token),
            RawSpec::Config(config) => {
                let check = match config.type_check {
                    Some(Value::String(token)) => GuardSpec::Token(token),
                    Some(other) => GuardSpec::Unsupported(other),
                    None => GuardSpec::Unsupported(Value::Null),
                };
                PropertySpec {
                    check,
                    default_value: config.default_value.filter(|v| !v.is_null()),
                    immutable: config.immutable == Some(Value::Bool(true)),
                }
            }
            RawSpec::Other(value) => PropertySpec::with_check(GuardSpec::Unsupported(value)),
        }
    }
}

/// A named, ordered collection of property specs.
#[derive(Debug, Clone)]
pub struct Bean {
    name: String,
    entries: IndexMap<String, PropertySpec>,
}

impl Bean {
    /// Start an empty bean for host-built schemas.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Add or replace an entry.
    pub fn property(mut self, key: impl Into<String>, spec: PropertySpec) -> Self {
        self.entries.insert(key.into(), spec);
        self
    }

    /// Load a bean file.
    ///
    /// The format is detected from the extension unless `format` forces one.
    pub fn from_file(path: impl AsRef<Path>, format: Option<BeanFormat>) -> Result<Self> {
        let path = path.as_ref();
        let format = match format {
            Some(format) => format,
            None => BeanFormat::from_path(path)?,
        };
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let name = bean_stem(path, format);
        tracing::debug!(path = %path.display(), ?format, %name, "loading bean");

        let ctx = SourceContext::new(content, path.display().to_string());
        Self::parse(name, &ctx, format)
    }

    /// Parse bean content held in memory.
    pub fn from_str(name: impl Into<String>, content: &str, format: BeanFormat) -> Result<Self> {
        let name = name.into();
        let ctx = SourceContext::new(content, format!("{}.{}", name, format.extension()));
        Self::parse(name, &ctx, format)
    }

    fn parse(name: String, ctx: &SourceContext, format: BeanFormat) -> Result<Self> {
        let raw: IndexMap<String, RawSpec> = match format {
            BeanFormat::Json => serde_json::from_str(ctx.src()).map_err(|e| ctx.json_error(e))?,
            BeanFormat::Toml => toml::from_str(ctx.src()).map_err(|e| ctx.toml_error(e))?,
        };
        let entries = raw
            .into_iter()
            .map(|(key, spec)| (key, PropertySpec::from(spec)))
            .collect();
        Ok(Self { name, entries })
    }

    /// Raw class name, before PascalCase conversion.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    /// Resolve the bean into a class schema.
    ///
    /// Entries are registered in document order. A `$`-prefixed key is stored
    /// without its sentinel and marked immutable.
    pub fn into_schema(self) -> Result<ClassSchema> {
        let mut schema = ClassSchema::new();
        schema.set_name(&self.name)?;

        for (key, spec) in self.entries {
            let (field, sentinel) = match key.strip_prefix(IMMUTABLE_SENTINEL) {
                Some(stripped) => (stripped.to_string(), true),
                None => (key, false),
            };
            let immutable = spec.immutable || sentinel;

            schema.add_property(&field, spec.default_value, immutable)?;
            let guard = spec.check.resolve(&field)?;
            tracing::trace!(%field, immutable, guard = ?guard, "registered property");
            schema.add_property_guard(&field, guard)?;
        }

        Ok(schema)
    }
}

/// File stem of a bean, with the format's extension removed.
///
/// This is both the raw class name and the stem of the generated file.
pub fn bean_stem(path: &Path, format: BeanFormat) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = format!(".{}", format.extension());
    match file_name.strip_suffix(&suffix) {
        Some(stem) => stem.to_string(),
        None => PathBuf::from(&file_name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or(file_name),
    }
}
