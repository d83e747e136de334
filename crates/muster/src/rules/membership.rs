//! Value membership and equality rules.

use serde_json::Value;

use crate::foundation::{loose_eq, strict_eq};

crate::rule! {
    /// The value is one of a fixed list, by equality without coercion.
    pub OneOf { allowed: Vec<Value> } as "must_be_one_of";
    check(self, value) { self.allowed.iter().any(|allowed| strict_eq(allowed, value)) }
}

impl OneOf {
    /// Creates the rule for `field`.
    pub fn new<I, V>(field: &str, allowed: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::with_message(
            format!("Key '{field}' was not a valid value."),
            allowed.into_iter().map(Into::into).collect(),
        )
    }

    /// The allowed values.
    #[must_use]
    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

crate::rule! {
    /// The value loosely equals an expected value.
    pub Equals { expected: Value } as "must_equal";
    check(self, value) { loose_eq(value, &self.expected) }
}

impl Equals {
    /// Creates the rule for `field`.
    pub fn new(field: &str, expected: impl Into<Value>) -> Self {
        Self::with_message(
            format!("Key '{field}' was not the correct value."),
            expected.into(),
        )
    }
}
