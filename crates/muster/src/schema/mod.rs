//! Schemas and their evaluation pipeline
//!
//! A [`Schema`] is built once through a [`SchemaBuilder`] and then evaluated
//! any number of times, from any number of threads. Evaluation is read-only.
//!
//! Every evaluation runs the same four phases in the same order:
//!
//! 1. **Document**: each whole-document rule that fails yields one
//!    `InvalidDocument` error carrying the document.
//! 2. **Missing**: each required field the document does not own yields one
//!    `MissingAttribute` error, in required order.
//! 3. **Unexpected**: closed schemas only. Each document field outside
//!    `optional ∪ required` yields one `UnexpectedAttribute` error, in
//!    document order.
//! 4. **Invalid**: each key validator whose field is present and whose rule
//!    fails yields one `InvalidAttribute` error carrying the value, in
//!    registration order. Absent fields are never flagged here.
//!
//! [`Schema::error`] stops at the first error of the earliest non-empty
//! phase; [`Schema::errors`] runs everything and concatenates.
//!
//! # Examples
//!
//! ```
//! use muster::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .must_have_keys(["firstname", "lastname"])
//!     .key("birthyear").must_be_greater_than(1900)
//!     .build();
//!
//! let error = schema.error(&json!({"firstname": "Gregg"})).unwrap();
//! assert_eq!(error.kind, ErrorKind::MissingAttribute);
//! assert_eq!(error.detail, "lastname");
//!
//! assert!(schema.error(&json!({"firstname": "Gregg", "lastname": "Caines"})).is_none());
//! ```

mod builder;

pub use builder::{KeyBuilder, SchemaBuilder};

use serde_json::Value;

use crate::foundation::{
    KeyValidator, ValidationError, ValidationErrors, ValidationResult, ValidationResultMulti,
    field_names,
};
use crate::rules::Predicate;
use crate::sets;

// ============================================================================
// ALLOWANCE
// ============================================================================

/// Which fields beyond the required ones a document may carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Allowance {
    /// Any extra field is allowed.
    #[default]
    Any,
    /// Only the listed extra fields are allowed (closed schema).
    Only(Vec<String>),
}

impl Allowance {
    /// Returns true for a closed schema.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Only(_))
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable set of presence, key and document rules.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    required: Vec<String>,
    allowance: Allowance,
    key_validators: Vec<KeyValidator>,
    document_rules: Vec<Predicate>,
}

impl Schema {
    /// Starts building a schema with the built-in rule registry.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Fields that must be present.
    #[must_use]
    pub fn required(&self) -> &[String] {
        &self.required
    }

    /// The extra-field policy.
    #[must_use]
    pub fn allowance(&self) -> &Allowance {
        &self.allowance
    }

    /// Key validators in evaluation order.
    #[must_use]
    pub fn key_validators(&self) -> &[KeyValidator] {
        &self.key_validators
    }

    /// Key validators bound to `field`, in evaluation order.
    pub fn validators_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a KeyValidator> {
        self.key_validators
            .iter()
            .filter(move |kv| kv.field() == field)
    }

    /// Whole-document rules in evaluation order.
    #[must_use]
    pub fn document_rules(&self) -> &[Predicate] {
        &self.document_rules
    }

    /// Returns true if no rule of any kind is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
            && !self.allowance.is_closed()
            && self.key_validators.is_empty()
            && self.document_rules.is_empty()
    }

    // ------------------------------------------------------------------------
    // Evaluation
    // ------------------------------------------------------------------------

    /// Fail-fast evaluation: the first error of the earliest non-empty phase,
    /// or `None` if the document conforms.
    #[must_use]
    pub fn error(&self, document: &Value) -> Option<ValidationError> {
        let fields = field_names(document);
        let first = self
            .document_phase(document)
            .next()
            .or_else(|| self.missing_phase(&fields).next())
            .or_else(|| self.unexpected_phase(&fields).next())
            .or_else(|| self.invalid_phase(document).next());
        tracing::trace!(mode = "fail_fast", failed = first.is_some(), "Evaluated document");
        first
    }

    /// Bulk evaluation: every error of every phase, in phase order.
    #[must_use]
    pub fn errors(&self, document: &Value) -> ValidationErrors {
        let fields = field_names(document);
        let mut errors = ValidationErrors::new();
        errors.extend(self.document_phase(document));
        errors.extend(self.missing_phase(&fields));
        errors.extend(self.unexpected_phase(&fields));
        errors.extend(self.invalid_phase(document));
        tracing::trace!(mode = "bulk", errors = errors.len(), "Evaluated document");
        errors
    }

    /// Returns true if the document conforms.
    #[must_use]
    pub fn is_valid(&self, document: &Value) -> bool {
        self.error(document).is_none()
    }

    /// Fail-fast check: `Err` with exactly what [`Schema::error`] returns.
    pub fn check(&self, document: &Value) -> ValidationResult<()> {
        match self.error(document) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Bulk check: `Err` with exactly what [`Schema::errors`] returns when it
    /// is non-empty.
    pub fn check_all(&self, document: &Value) -> ValidationResultMulti<()> {
        self.errors(document).into_result(())
    }

    // ------------------------------------------------------------------------
    // Phases
    // ------------------------------------------------------------------------

    fn document_phase<'a>(
        &'a self,
        document: &'a Value,
    ) -> impl Iterator<Item = ValidationError> + 'a {
        self.document_rules
            .iter()
            .filter(move |rule| !rule.passes(document))
            .map(move |rule| ValidationError::invalid_document(rule.message().to_owned(), document))
    }

    fn missing_phase(&self, fields: &[&str]) -> std::vec::IntoIter<ValidationError> {
        sets::difference::<_, _, str>(&self.required, fields)
            .into_iter()
            .map(ValidationError::missing)
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn unexpected_phase(&self, fields: &[&str]) -> std::vec::IntoIter<ValidationError> {
        let Allowance::Only(optional) = &self.allowance else {
            return Vec::new().into_iter();
        };
        let allowed = sets::union::<_, str>(optional, &self.required);
        sets::difference::<_, _, str>(fields, &allowed)
            .into_iter()
            .map(ValidationError::unexpected)
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn invalid_phase<'a>(
        &'a self,
        document: &'a Value,
    ) -> impl Iterator<Item = ValidationError> + 'a {
        self.key_validators
            .iter()
            .filter_map(move |kv| kv.error_in(document))
    }
}

// ============================================================================
// TESTS
// ============================================================================
