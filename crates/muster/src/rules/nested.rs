//! Nested schema rule
//!
//! Delegates a field value to a sub-schema in fail-fast mode, so mappings
//! inside a document can carry their own presence and key rules.

use std::borrow::Cow;

use serde_json::Value;

use crate::foundation::Rule;
use crate::schema::Schema;

/// The value passes a sub-schema.
///
/// The failure message wraps the sub-schema's first error:
/// `Problem with key '{field}': {sub message}`.
#[derive(Debug, Clone)]
pub struct PassesSchema {
    field: String,
    schema: Schema,
}

impl PassesSchema {
    /// Creates the rule for `field`.
    pub fn new(field: &str, schema: Schema) -> Self {
        Self {
            field: field.to_owned(),
            schema,
        }
    }

    /// The sub-schema values are checked against.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Rule for PassesSchema {
    fn name(&self) -> &str {
        "must_pass_muster"
    }

    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
        match self.schema.error(value) {
            None => Ok(()),
            Some(error) => Err(Cow::Owned(format!(
                "Problem with key '{}': {}",
                self.field, error.message
            ))),
        }
    }
}
