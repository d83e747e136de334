//! Pattern-based rules: regex match, email address, date string.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

// VERY loose on purpose: anything around a single `@` with no whitespace.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s]+@[^\s]+$").expect("email pattern compiles"));

static DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^\d{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12]\d|3[01])",
        r"(?:[Tt ](?:[01]\d|2[0-3]):[0-5]\d(?::(?:[0-5]\d|60)(?:\.\d+)?)?",
        r"(?:[Zz]|[+-](?:[01]\d|2[0-3]):?[0-5]\d)?)?$",
    ))
    .expect("date pattern compiles")
});

/// String form a pattern is matched against: strings as-is, numbers in display
/// form. Other kinds are never matched.
fn matchable(value: &Value) -> Option<std::borrow::Cow<'_, str>> {
    match value {
        Value::String(s) => Some(s.as_str().into()),
        Value::Number(n) => Some(n.to_string().into()),
        _ => None,
    }
}

// ============================================================================
// MATCHES
// ============================================================================

crate::rule! {
    /// The value (numbers in display form) matches a regular expression.
    pub Matches { pattern: Regex } as "must_match";
    check(self, value) {
        matchable(value).is_some_and(|s| self.pattern.is_match(&s))
    }
}

impl Matches {
    /// Creates the rule for `field`.
    #[must_use]
    pub fn new(field: &str, pattern: Regex) -> Self {
        Self::with_message(format!("Key '{field}' was not in the correct format."), pattern)
    }

    /// The pattern being matched.
    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

// ============================================================================
// EMAIL ADDRESS
// ============================================================================

crate::rule! {
    /// The value is a string that could be an email address.
    pub EmailAddress {} as "must_be_an_email_address";
    check(self, value) {
        value.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))
    }
}

impl EmailAddress {
    /// Creates the rule for `field`.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self::with_message(format!("Key '{field}' was not an email address."))
    }
}

// ============================================================================
// DATE STRING
// ============================================================================

crate::rule! {
    /// The value is an ISO 8601 / RFC 3339 shaped date string.
    pub DateString {} as "must_be_a_date_string";
    check(self, value) {
        value.as_str().is_some_and(|s| DATE_REGEX.is_match(s))
    }
}

impl DateString {
    /// Creates the rule for `field`.
    #[must_use]
    pub fn new(field: &str) -> Self {
        Self::with_message(format!(
            "Key '{field}' must be a valid ISO8601/RFC3339 date string."
        ))
    }
}

// ============================================================================
// TESTS
// ============================================================================
