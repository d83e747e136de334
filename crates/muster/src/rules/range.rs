//! Ordered comparison rules

use std::cmp::Ordering;

use serde_json::Value;

use crate::foundation::{display_string, loose_cmp};

crate::rule! {
    /// The value orders strictly after a bound.
    pub GreaterThan { bound: Value } as "must_be_greater_than";
    check(self, value) { loose_cmp(value, &self.bound) == Some(Ordering::Greater) }
}

impl GreaterThan {
    /// Creates the rule for `field`.
    pub fn new(field: &str, bound: impl Into<Value>) -> Self {
        let bound = bound.into();
        Self::with_message(
            format!("Key '{field}' must be greater than {}", display_string(&bound)),
            bound,
        )
    }
}

crate::rule! {
    /// The value orders strictly before a bound.
    pub LessThan { bound: Value } as "must_be_less_than";
    check(self, value) { loose_cmp(value, &self.bound) == Some(Ordering::Less) }
}

impl LessThan {
    /// Creates the rule for `field`.
    pub fn new(field: &str, bound: impl Into<Value>) -> Self {
        let bound = bound.into();
        Self::with_message(
            format!("Key '{field}' must be less than {}", display_string(&bound)),
            bound,
        )
    }
}
