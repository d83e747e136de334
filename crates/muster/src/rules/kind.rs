//! Runtime type rule.

use crate::foundation::ValueKind;

crate::rule! {
    /// The value is of a given [`ValueKind`].
    #[derive(PartialEq, Eq)]
    pub IsA { kind: ValueKind } as "must_be_a";
    check(self, value) { self.kind.matches(value) }
}

impl IsA {
    /// Creates the rule for `field`.
    #[must_use]
    pub fn new(field: &str, kind: ValueKind) -> Self {
        Self::with_message(
            format!("Key '{field}' must be {} {kind}", kind.article()),
            kind,
        )
    }

    /// The required kind.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.kind
    }
}
