//! Tagged value kinds and the value-level operations rules share.
//!
//! Documents arrive as [`serde_json::Value`]. Rules never inspect values
//! ad hoc; they go through [`ValueKind`] and the helpers here so that
//! coercion and comparison behave the same everywhere.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::LengthMode;
use crate::foundation::ConfigError;

// ============================================================================
// VALUE KIND
// ============================================================================

/// Runtime category of a document value.
///
/// Arrays and objects are distinct kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Boolean,
    /// Any JSON number.
    Number,
    /// A string.
    String,
    /// A sequence.
    Array,
    /// A mapping.
    Object,
}

impl ValueKind {
    /// Returns the kind of `value`.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Returns true if `value` is of this kind.
    #[must_use]
    pub const fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::Null, Value::Null)
                | (Self::Boolean, Value::Bool(_))
                | (Self::Number, Value::Number(_))
                | (Self::String, Value::String(_))
                | (Self::Array, Value::Array(_))
                | (Self::Object, Value::Object(_))
        )
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Indefinite article used in messages: "an" for array and object.
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self {
            Self::Array | Self::Object => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "null" => Ok(Self::Null),
            "boolean" | "bool" => Ok(Self::Boolean),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            other => Err(ConfigError::invalid_params(
                "must_be_a",
                format!("unknown type tag '{other}'"),
            )),
        }
    }
}

// ============================================================================
// DISPLAY FORM
// ============================================================================

/// Formats a value the way messages show it: strings unquoted, everything
/// else as compact JSON.
#[must_use]
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// COMPARISON
// ============================================================================

/// Numeric view of a scalar: numbers as-is, booleans as 0/1, strings when
/// they parse as a number.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse().ok()
            }
        }
        _ => None,
    }
}

/// Equality by value without cross-kind coercion.
///
/// Numbers compare numerically, so `1` equals `1.0`; composites compare
/// element-wise under the same rule.
#[must_use]
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| strict_eq(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| strict_eq(x, y)))
        }
        _ => a == b,
    }
}

/// Loose equality.
///
/// Values of the same kind compare structurally (numbers numerically).
/// Mixed scalar kinds compare through their numeric view; `null` equals only
/// `null`, and composites never equal scalars.
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Null, _) | (_, Value::Null) => a.is_null() && b.is_null(),
        (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => a == b,
        _ if ValueKind::of(a) == ValueKind::of(b) => a == b,
        _ => match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

/// Ordered comparison.
///
/// Strings order lexicographically against strings; every other scalar
/// pairing orders through the numeric view. Returns `None` when the values
/// are not comparable (composites, `null`, unparsable strings, NaN).
#[must_use]
pub fn loose_cmp(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.as_str().cmp(y.as_str())),
        (Value::Null | Value::Array(_) | Value::Object(_), _)
        | (_, Value::Null | Value::Array(_) | Value::Object(_)) => None,
        _ => as_number(a)?.partial_cmp(&as_number(b)?),
    }
}

// ============================================================================
// LENGTH
// ============================================================================

/// Length of a value that exposes one: strings (measured per `mode`) and
/// arrays. Every other kind has no length.
#[must_use]
pub fn length_of(value: &Value, mode: LengthMode) -> Option<usize> {
    match value {
        Value::String(s) => Some(mode.measure(s)),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

// ============================================================================
// DOCUMENT FIELDS
// ============================================================================

/// The document's own field names in document order. Non-objects have none.
#[must_use]
pub fn field_names(document: &Value) -> Vec<&str> {
    match document {
        Value::Object(map) => map.keys().map(String::as_str).collect(),
        _ => Vec::new(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
