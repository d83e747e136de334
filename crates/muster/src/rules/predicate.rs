//! Caller-supplied predicate rules.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::Rule;

/// Shared predicate over a JSON value.
pub type PredicateFn = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A closure plus the message reported when it returns `false`.
///
/// Used both for `KeyBuilder::must_pass` and for whole-document rules.
#[derive(Clone)]
pub struct Predicate {
    message: String,
    predicate: PredicateFn,
}

impl Predicate {
    /// Wraps `predicate` with its failure message.
    pub fn new<F>(message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            message: message.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// The failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Runs the predicate.
    #[must_use]
    pub fn passes(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }
}

impl Rule for Predicate {
    fn name(&self) -> &str {
        "must_pass"
    }

    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
        if self.passes(value) {
            Ok(())
        } else {
            Err(Cow::Borrowed(&self.message))
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("message", &self.message)
            .field("predicate", &"<function>")
            .finish()
    }
}
