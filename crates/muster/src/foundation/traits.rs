//! The rule capability and the key validator that binds a rule to a field.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::ValidationError;

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A predicate over a single field value that can explain its failures.
///
/// Every built-in `must_*` rule implements this trait, and so can any
/// caller-defined type. A rule is only ever asked about values that are
/// present in the document.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use muster::foundation::Rule;
/// use serde_json::Value;
///
/// #[derive(Debug)]
/// struct NonEmptyString {
///     message: String,
/// }
///
/// impl Rule for NonEmptyString {
///     fn name(&self) -> &str {
///         "non_empty_string"
///     }
///
///     fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
///         match value.as_str() {
///             Some(s) if !s.is_empty() => Ok(()),
///             _ => Err(Cow::Borrowed(&self.message)),
///         }
///     }
/// }
/// ```
pub trait Rule: fmt::Debug + Send + Sync {
    /// Short identifier, used in logs and registry lookups.
    fn name(&self) -> &str;

    /// Tests a value. On failure returns the message to report.
    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>>;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
        (**self).check(value)
    }
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
        (**self).check(value)
    }
}

// ============================================================================
// KEY VALIDATOR
// ============================================================================

/// One rule bound to one field name.
#[derive(Clone)]
pub struct KeyValidator {
    field: String,
    rule: Arc<dyn Rule>,
}

impl KeyValidator {
    /// Binds `rule` to `field`.
    pub fn new(field: impl Into<String>, rule: impl Rule + 'static) -> Self {
        Self::from_shared(field, Arc::new(rule))
    }

    /// Binds an already shared rule to `field`.
    pub fn from_shared(field: impl Into<String>, rule: Arc<dyn Rule>) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    /// The bound field name.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The bound rule.
    #[must_use]
    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Tests a present field value, producing an `InvalidAttribute` error
    /// carrying the value on failure.
    #[must_use]
    pub fn error(&self, value: &Value) -> Option<ValidationError> {
        self.rule
            .check(value)
            .err()
            .map(|message| ValidationError::invalid_attribute(message.into_owned(), value))
    }

    /// Looks the field up in `document` and tests it. Absent fields pass.
    #[must_use]
    pub fn error_in(&self, document: &Value) -> Option<ValidationError> {
        document.get(&self.field).and_then(|value| self.error(value))
    }
}

impl fmt::Debug for KeyValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValidator")
            .field("field", &self.field)
            .field("rule", &self.rule.name())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ErrorKind;
    use serde_json::json;

    #[derive(Debug)]
    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &str {
            "always_fails"
        }

        fn check(&self, _value: &Value) -> Result<(), Cow<'_, str>> {
            Err(Cow::Borrowed("always fails"))
        }
    }

    #[test]
    fn test_error_carries_value() {
        let kv = KeyValidator::new("year", AlwaysFails);
        let error = kv.error(&json!(2010)).unwrap();
        assert_eq!(error.kind, ErrorKind::InvalidAttribute);
        assert_eq!(error.message, "always fails");
        assert_eq!(error.detail, json!(2010));
    }

    #[test]
    fn test_absent_field_passes() {
        let kv = KeyValidator::new("year", AlwaysFails);
        assert!(kv.error_in(&json!({"other": 1})).is_none());
        assert!(kv.error_in(&json!({"year": null})).is_some());
    }

    #[test]
    fn test_boxed_rule_delegates() {
        let boxed: Box<dyn Rule> = Box::new(AlwaysFails);
        assert_eq!(boxed.name(), "always_fails");
        let kv = KeyValidator::new("x", boxed);
        assert_eq!(format!("{kv:?}"), r#"KeyValidator { field: "x", rule: "always_fails" }"#);
    }
}
