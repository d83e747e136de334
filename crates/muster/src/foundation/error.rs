//! Error types for validation failures
//!
//! Validation failures are data: [`ValidationError`] values produced fresh on
//! every evaluation and collected into [`ValidationErrors`] in bulk mode.
//! [`ConfigError`] is the separate, configuration-time failure raised while a
//! schema is being built.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Category of a validation failure.
///
/// Callers branch on the kind instead of parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A required field is absent from the document.
    MissingAttribute,
    /// A closed schema found a field it does not allow.
    UnexpectedAttribute,
    /// A key validator rejected a field value.
    InvalidAttribute,
    /// A whole-document rule rejected the document.
    InvalidDocument,
}

impl ErrorKind {
    /// Returns the variant name, as used in serialized errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingAttribute => "MissingAttribute",
            Self::UnexpectedAttribute => "UnexpectedAttribute",
            Self::InvalidAttribute => "InvalidAttribute",
            Self::InvalidDocument => "InvalidDocument",
        }
    }

    /// Returns true for the two field-presence kinds.
    #[must_use]
    pub const fn is_presence(self) -> bool {
        matches!(self, Self::MissingAttribute | Self::UnexpectedAttribute)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single structured validation failure.
///
/// `detail` carries the offending value: the field name (as a JSON string)
/// for presence errors, the field value for attribute errors, and the whole
/// document for document errors.
///
/// # Examples
///
/// ```
/// use muster::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::missing("lastname");
/// assert_eq!(error.kind, ErrorKind::MissingAttribute);
/// assert_eq!(error.message, "A key named 'lastname' is required but was not found.");
/// assert_eq!(error.detail, "lastname");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable explanation.
    pub message: Cow<'static, str>,
    /// The offending value.
    pub detail: Value,
}

impl ValidationError {
    /// Creates an error from its three parts.
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>, detail: Value) -> Self {
        Self {
            kind,
            message: message.into(),
            detail,
        }
    }

    /// Creates a `MissingAttribute` error for `field`.
    pub fn missing(field: &str) -> Self {
        Self::new(
            ErrorKind::MissingAttribute,
            format!("A key named '{field}' is required but was not found."),
            Value::String(field.to_owned()),
        )
    }

    /// Creates an `UnexpectedAttribute` error for `field`.
    pub fn unexpected(field: &str) -> Self {
        Self::new(
            ErrorKind::UnexpectedAttribute,
            format!("A key named '{field}' was found but is not allowed."),
            Value::String(field.to_owned()),
        )
    }

    /// Creates an `InvalidAttribute` error carrying the rejected value.
    pub fn invalid_attribute(message: impl Into<Cow<'static, str>>, value: &Value) -> Self {
        Self::new(ErrorKind::InvalidAttribute, message, value.clone())
    }

    /// Creates an `InvalidDocument` error carrying the rejected document.
    pub fn invalid_document(message: impl Into<Cow<'static, str>>, document: &Value) -> Self {
        Self::new(ErrorKind::InvalidDocument, message, document.clone())
    }

    /// Returns the `detail` as a field name, for presence errors.
    #[must_use]
    pub fn field_name(&self) -> Option<&str> {
        if self.kind.is_presence() {
            self.detail.as_str()
        } else {
            None
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered result of bulk evaluation.
///
/// Order is phase order (document, missing, unexpected, invalid) and
/// registration or document-field order within each phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: SmallVec<[ValidationError; 4]>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: SmallVec::new(),
        }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no error was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the first error, which is what fail-fast mode reports.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterates the errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns all errors as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Counts errors of one kind.
    #[must_use]
    pub fn count_of(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }

    /// Consumes the collection into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors.into_vec()
    }

    /// `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = smallvec::IntoIter<[ValidationError; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl std::ops::Index<usize> for ValidationErrors {
    type Output = ValidationError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.errors[index]
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// CONFIGURATION ERROR
// ============================================================================

/// A schema was configured with something the engine cannot use.
///
/// Raised while building, never collected by `errors()`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `must_have_length` was given a comparator outside the supported set.
    #[error("Comparator for must_have_length() must be one of >, <, ==, >=, or <=.")]
    UnknownComparator(String),

    /// A pattern string failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// `must` named a rule the registry does not know.
    #[error("no rule named '{0}' is registered")]
    UnknownRule(String),

    /// A registered rule rejected its parameters.
    #[error("invalid parameters for rule '{rule}': {reason}")]
    InvalidParams {
        /// The rule name.
        rule: String,
        /// Why the parameters were rejected.
        reason: String,
    },
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidParams`].
    pub fn invalid_params(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
