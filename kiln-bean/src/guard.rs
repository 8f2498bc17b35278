//! Property guards.
//!
//! A guard validates a candidate property value before assignment. Guards are
//! either one of the named type checks shipped with kiln or a custom predicate
//! supplied by the caller. Both resolve to the same shape: a single-argument
//! predicate, rendered as a JavaScript arrow function in generated code and
//! evaluated over JSON values host-side.

use std::{
    fmt,
    sync::{Arc, LazyLock},
};

use serde_json::Value;

/// Built-in type checks addressable by token in bean documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCheck {
    String,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Boolean,
    List,
    Set,
    Map,
    Object,
    Func,
}

impl TypeCheck {
    /// All type checks, in declaration order.
    pub const ALL: [TypeCheck; 17] = [
        TypeCheck::String,
        TypeCheck::Uint,
        TypeCheck::Uint8,
        TypeCheck::Uint16,
        TypeCheck::Uint32,
        TypeCheck::Uint64,
        TypeCheck::Int,
        TypeCheck::Int8,
        TypeCheck::Int16,
        TypeCheck::Int32,
        TypeCheck::Int64,
        TypeCheck::Boolean,
        TypeCheck::List,
        TypeCheck::Set,
        TypeCheck::Map,
        TypeCheck::Object,
        TypeCheck::Func,
    ];

    /// Resolve a bean token such as `"uint8"`.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|check| check.as_str() == token)
    }

    /// The bean token for this check.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Uint => "uint",
            Self::Uint8 => "uint8",
            Self::Uint16 => "uint16",
            Self::Uint32 => "uint32",
            Self::Uint64 => "uint64",
            Self::Int => "int",
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Boolean => "boolean",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Object => "object",
            Self::Func => "func",
        }
    }

    /// JavaScript arrow function implementing this check.
    ///
    /// Unsigned upper bounds are exclusive, signed bounds inclusive.
    pub fn source(&self) -> &'static str {
        match self {
            Self::String => "v => v !== undefined && v !== null && v.toString() === v",
            Self::Uint | Self::Uint64 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= 0 && v < 18446744073709552000"
            }
            Self::Uint8 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= 0 && v < 256"
            }
            Self::Uint16 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= 0 && v < 65536"
            }
            Self::Uint32 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= 0 && v < 4294967296"
            }
            Self::Int | Self::Int64 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= -9223372036854775808 && v <= 9223372036854775807"
            }
            Self::Int8 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= -128 && v <= 127"
            }
            Self::Int16 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= -32768 && v <= 32767"
            }
            Self::Int32 => {
                "v => Number(v) === v && (v % 1 === 0) && (0 + v === v) && v >= -2147483648 && v <= 2147483647"
            }
            Self::Boolean => "v => v === true || v === false",
            Self::List => "v => v instanceof Array",
            Self::Set => "v => v instanceof Set",
            Self::Map => "v => v instanceof Map",
            Self::Object => "v => v === Object(v)",
            Self::Func => "v => !!(v && v.constructor && v.call && v.apply)",
        }
    }

    /// Evaluate the check over a JSON value.
    ///
    /// JSON has no sets, maps or functions: a set is an array without
    /// repeated elements, a map is an object, and `func` never passes.
    pub fn check(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Uint | Self::Uint64 => in_range(value, 0.0, u64::MAX as f64, false),
            Self::Uint8 => in_range(value, 0.0, 256.0, false),
            Self::Uint16 => in_range(value, 0.0, 65_536.0, false),
            Self::Uint32 => in_range(value, 0.0, 4_294_967_296.0, false),
            Self::Int | Self::Int64 => in_range(value, i64::MIN as f64, i64::MAX as f64, true),
            Self::Int8 => in_range(value, -128.0, 127.0, true),
            Self::Int16 => in_range(value, -32_768.0, 32_767.0, true),
            Self::Int32 => in_range(value, -2_147_483_648.0, 2_147_483_647.0, true),
            Self::Boolean => value.is_boolean(),
            Self::List => value.is_array(),
            Self::Set => value.as_array().is_some_and(|items| {
                items
                    .iter()
                    .enumerate()
                    .all(|(i, item)| !items[..i].contains(item))
            }),
            Self::Map => value.is_object(),
            Self::Object => value.is_array() || value.is_object(),
            Self::Func => false,
        }
    }

    /// The shared guard handle for this check.
    ///
    /// Every call returns a clone of the same handle, so attaching the same
    /// named check twice to one property keeps a single copy.
    pub fn guard(self) -> Guard {
        NAMED_GUARDS[self as usize].clone()
    }
}

impl fmt::Display for TypeCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn in_range(value: &Value, min: f64, max: f64, inclusive: bool) -> bool {
    let Some(n) = value.as_f64() else {
        return false;
    };
    if !n.is_finite() || n.fract() != 0.0 || n < min {
        return false;
    }
    if inclusive { n <= max } else { n < max }
}

static NAMED_GUARDS: LazyLock<Vec<Guard>> = LazyLock::new(|| {
    TypeCheck::ALL
        .into_iter()
        .map(|check| Guard(Arc::new(GuardKind::Named(check))))
        .collect()
});

type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// What a guard checks.
pub enum GuardKind {
    /// A built-in type check.
    Named(TypeCheck),
    /// A caller-supplied check: JavaScript source for generated code plus the
    /// equivalent host-side predicate.
    Custom { source: String, predicate: Predicate },
}

/// A shared handle to a guard.
///
/// Handles compare by identity, not by value: two custom guards built from
/// the same source are distinct, while clones of one handle are the same
/// guard.
#[derive(Clone)]
pub struct Guard(Arc<GuardKind>);

impl Guard {
    /// The shared handle for a named check.
    pub fn named(check: TypeCheck) -> Self {
        check.guard()
    }

    /// Create a new custom guard handle.
    pub fn custom(
        source: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(GuardKind::Custom {
            source: source.into(),
            predicate: Box::new(predicate),
        }))
    }

    pub fn kind(&self) -> &GuardKind {
        &self.0
    }

    /// JavaScript source of the predicate.
    pub fn source(&self) -> &str {
        match self.kind() {
            GuardKind::Named(check) => check.source(),
            GuardKind::Custom { source, .. } => source,
        }
    }

    /// Evaluate the predicate over a JSON value.
    pub fn test(&self, value: &Value) -> bool {
        match self.kind() {
            GuardKind::Named(check) => check.check(value),
            GuardKind::Custom { predicate, .. } => predicate(value),
        }
    }

    /// Whether both handles point at the same guard.
    pub fn same_handle(&self, other: &Guard) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Guard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            GuardKind::Named(check) => f.debug_tuple("Named").field(check).finish(),
            GuardKind::Custom { source, .. } => {
                f.debug_struct("Custom").field("source", source).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_token_round_trip() {
        for check in TypeCheck::ALL {
            assert_eq!(TypeCheck::from_token(check.as_str()), Some(check));
        }
        assert_eq!(TypeCheck::from_token("float"), None);
        assert_eq!(TypeCheck::from_token("String"), None);
    }

    #[test]
    fn test_uint8_boundaries() {
        let check = TypeCheck::Uint8;
        assert!(check.check(&json!(0)));
        assert!(check.check(&json!(255)));
        assert!(!check.check(&json!(-1)));
        assert!(!check.check(&json!(256)));
        assert!(!check.check(&json!(1.5)));
        assert!(!check.check(&json!("1")));
    }

    #[test]
    fn test_signed_bounds_are_inclusive() {
        assert!(TypeCheck::Int8.check(&json!(-128)));
        assert!(TypeCheck::Int8.check(&json!(127)));
        assert!(!TypeCheck::Int8.check(&json!(128)));
        assert!(!TypeCheck::Int8.check(&json!(-129)));
        assert!(TypeCheck::Int32.check(&json!(-2_147_483_648i64)));
        assert!(!TypeCheck::Int32.check(&json!(2_147_483_648i64)));
        assert!(TypeCheck::Int64.check(&json!(i64::MIN)));
        assert!(TypeCheck::Int.check(&json!(i64::MAX)));
    }

    #[test]
    fn test_integral_floats_pass() {
        assert!(TypeCheck::Uint16.check(&json!(2.0)));
        assert!(!TypeCheck::Uint16.check(&json!(65_536)));
        assert!(TypeCheck::Uint.check(&json!(u64::MAX / 2)));
        assert!(!TypeCheck::Uint.check(&json!(-1)));
    }

    #[test]
    fn test_structural_checks() {
        assert!(TypeCheck::String.check(&json!("alexandru")));
        assert!(!TypeCheck::String.check(&json!(null)));
        assert!(TypeCheck::Boolean.check(&json!(false)));
        assert!(!TypeCheck::Boolean.check(&json!(0)));
        assert!(TypeCheck::List.check(&json!([1, 1])));
        assert!(TypeCheck::Set.check(&json!([1, 2])));
        assert!(!TypeCheck::Set.check(&json!([1, 1])));
        assert!(TypeCheck::Map.check(&json!({"a": 1})));
        assert!(!TypeCheck::Map.check(&json!([])));
        assert!(TypeCheck::Object.check(&json!([])));
        assert!(TypeCheck::Object.check(&json!({})));
        assert!(!TypeCheck::Object.check(&json!("x")));
        assert!(!TypeCheck::Func.check(&json!({})));
    }

    #[test]
    fn test_named_guards_share_a_handle() {
        let a = Guard::named(TypeCheck::String);
        let b = TypeCheck::String.guard();
        assert!(a.same_handle(&b));
        assert!(!a.same_handle(&Guard::named(TypeCheck::Uint8)));
    }

    #[test]
    fn test_custom_guards_are_distinct_handles() {
        let a = Guard::custom("v => v > 0", |v| v.as_f64().is_some_and(|n| n > 0.0));
        let b = Guard::custom("v => v > 0", |v| v.as_f64().is_some_and(|n| n > 0.0));
        assert!(!a.same_handle(&b));
        assert!(a.same_handle(&a.clone()));
        assert_eq!(a.source(), b.source());
    }

    #[test]
    fn test_guard_resolves_uniformly() {
        let named = Guard::named(TypeCheck::Uint8);
        let custom = Guard::custom(
            "v => ['devops', 'qa'].indexOf(v) > -1",
            |v| matches!(v.as_str(), Some("devops" | "qa")),
        );

        assert!(named.test(&json!(7)));
        assert!(!named.test(&json!(300)));
        assert!(custom.test(&json!("qa")));
        assert!(!custom.test(&json!("ceo")));
        assert_eq!(named.source(), TypeCheck::Uint8.source());
        assert!(custom.source().starts_with("v => ['devops'"));
    }
}
