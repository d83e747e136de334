//! Fluent schema construction
//!
//! [`SchemaBuilder`] collects presence rules, document rules and key
//! validators. [`SchemaBuilder::key`] opens a [`KeyBuilder`] for one field;
//! each `must_*` terminal registers exactly one key validator and hands the
//! schema builder back, so one chain can describe a whole schema:
//!
//! ```
//! use muster::prelude::*;
//!
//! let schema = Schema::builder()
//!     .must_have_keys(["email"])
//!     .may_have_keys(["nickname"])
//!     .key("email").must_be_an_email_address()
//!     .key("nickname").must_have_length("<=", 16)?
//!     .build();
//! assert_eq!(schema.key_validators().len(), 2);
//! # Ok::<(), ConfigError>(())
//! ```

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use super::{Allowance, Schema};
use crate::config::SchemaConfig;
use crate::foundation::{ConfigError, KeyValidator, Rule, ValueKind};
use crate::registry::RuleRegistry;
use crate::rules::{
    Comparator, DateString, EmailAddress, Equals, GreaterThan, HasLength, IsA, LessThan, Matches,
    OneOf, PassesSchema, Predicate,
};

// ============================================================================
// SCHEMA BUILDER
// ============================================================================

/// Accumulates rules for a [`Schema`].
#[derive(Debug, Clone)]
#[must_use = "builder methods must be chained or built"]
pub struct SchemaBuilder {
    schema: Schema,
    registry: Arc<RuleRegistry>,
    config: SchemaConfig,
}

impl SchemaBuilder {
    /// An empty builder using the shared built-in registry.
    pub fn new() -> Self {
        Self {
            schema: Schema::default(),
            registry: RuleRegistry::shared_builtin(),
            config: SchemaConfig::default(),
        }
    }

    /// Resolves [`KeyBuilder::must`] through `registry`.
    pub fn with_registry(mut self, registry: Arc<RuleRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Sets options for rules added after this call.
    pub fn with_config(mut self, config: SchemaConfig) -> Self {
        self.config = config;
        self
    }

    /// The registry named rules resolve through.
    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Current build options.
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.config
    }

    /// Sets the required fields, replacing any earlier list.
    pub fn must_have_keys<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.required = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Closes the schema, allowing only `fields` beyond the required ones.
    /// Replaces any earlier list.
    ///
    /// An empty list still closes the schema.
    pub fn may_have_keys<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schema.allowance = Allowance::Only(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a whole-document rule reported as `InvalidDocument` with
    /// `message` when `predicate` returns `false`.
    pub fn must_pass<F>(mut self, message: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.schema.document_rules.push(Predicate::new(message, predicate));
        self
    }

    /// Opens a key builder for `field`.
    pub fn key(self, field: impl Into<String>) -> KeyBuilder {
        KeyBuilder {
            builder: self,
            field: field.into(),
        }
    }

    /// Appends a ready-made key validator.
    pub fn register_key_validator(mut self, validator: KeyValidator) -> Self {
        tracing::trace!(
            field = validator.field(),
            rule = validator.rule().name(),
            "Registered key validator"
        );
        self.schema.key_validators.push(validator);
        self
    }

    /// Finishes the schema.
    #[must_use]
    pub fn build(self) -> Schema {
        let schema = self.schema;
        tracing::debug!(
            required = schema.required.len(),
            closed = schema.allowance.is_closed(),
            key_validators = schema.key_validators.len(),
            document_rules = schema.document_rules.len(),
            "Built schema"
        );
        schema
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// KEY BUILDER
// ============================================================================

/// Binds one rule to one field.
///
/// Every `must_*` method consumes the key builder, registers one key
/// validator and returns the [`SchemaBuilder`]. A key builder dropped or
/// [finished](KeyBuilder::finish) without a terminal registers nothing.
///
/// New terminals can be added from outside the crate with an extension
/// trait that calls [`KeyBuilder::field`] and [`KeyBuilder::must_pass`] or
/// [`KeyBuilder::must_satisfy`].
#[derive(Debug)]
#[must_use = "a key builder registers nothing until a must_* rule is attached"]
pub struct KeyBuilder {
    builder: SchemaBuilder,
    field: String,
}

impl KeyBuilder {
    /// The field this builder targets.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Build options in effect for this field.
    #[must_use]
    pub fn config(&self) -> &SchemaConfig {
        &self.builder.config
    }

    /// Returns to the schema builder without attaching a rule.
    pub fn finish(self) -> SchemaBuilder {
        tracing::trace!(field = %self.field, "Key builder finished without a rule");
        self.builder
    }

    /// Attaches any [`Rule`].
    pub fn must_satisfy(self, rule: impl Rule + 'static) -> SchemaBuilder {
        let validator = KeyValidator::new(self.field, rule);
        self.builder.register_key_validator(validator)
    }

    /// Attaches the registered rule `name` built from `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownRule`] if `name` is not registered, or
    /// whatever the rule's constructor rejects `params` with.
    pub fn must(
        self,
        name: &str,
        params: impl IntoIterator<Item = Value>,
    ) -> Result<SchemaBuilder, ConfigError> {
        let params: Vec<Value> = params.into_iter().collect();
        let rule =
            self.builder
                .registry
                .construct(name, &self.field, &params, &self.builder.config)?;
        let validator = KeyValidator::from_shared(self.field, Arc::from(rule));
        Ok(self.builder.register_key_validator(validator))
    }

    // ------------------------------------------------------------------------
    // Built-in terminals
    // ------------------------------------------------------------------------

    /// The value must match `pattern` (unanchored search).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if `pattern` does not compile.
    pub fn must_match(self, pattern: &str) -> Result<SchemaBuilder, ConfigError> {
        let pattern = Regex::new(pattern)?;
        Ok(self.must_match_regex(pattern))
    }

    /// The value must match a precompiled pattern.
    pub fn must_match_regex(self, pattern: Regex) -> SchemaBuilder {
        let rule = Matches::new(&self.field, pattern);
        self.must_satisfy(rule)
    }

    /// The value must look like an email address.
    pub fn must_be_an_email_address(self) -> SchemaBuilder {
        let rule = EmailAddress::new(&self.field);
        self.must_satisfy(rule)
    }

    /// The value must strictly equal one of `allowed`.
    pub fn must_be_one_of<I, V>(self, allowed: I) -> SchemaBuilder
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let rule = OneOf::new(&self.field, allowed);
        self.must_satisfy(rule)
    }

    /// The value must loosely equal `expected`.
    pub fn must_equal(self, expected: impl Into<Value>) -> SchemaBuilder {
        let rule = Equals::new(&self.field, expected);
        self.must_satisfy(rule)
    }

    /// The value's length must compare to `length` as `comparator` says.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownComparator`] unless `comparator` is one
    /// of `>`, `<`, `==`, `>=` or `<=`.
    pub fn must_have_length(
        self,
        comparator: &str,
        length: usize,
    ) -> Result<SchemaBuilder, ConfigError> {
        let comparator = comparator.parse::<Comparator>()?;
        Ok(self.must_have_length_cmp(comparator, length))
    }

    /// Typed form of [`KeyBuilder::must_have_length`].
    pub fn must_have_length_cmp(self, comparator: Comparator, length: usize) -> SchemaBuilder {
        let rule = HasLength::new(
            &self.field,
            comparator,
            length,
            self.builder.config.length_mode,
        );
        self.must_satisfy(rule)
    }

    /// The value's length must be exactly `length`.
    pub fn must_have_exact_length(self, length: usize) -> SchemaBuilder {
        self.must_have_length_cmp(Comparator::Equal, length)
    }

    /// The value must be of `kind`.
    pub fn must_be_a(self, kind: ValueKind) -> SchemaBuilder {
        let rule = IsA::new(&self.field, kind);
        self.must_satisfy(rule)
    }

    /// The value must be an ISO 8601 / RFC 3339 date string.
    pub fn must_be_a_date_string(self) -> SchemaBuilder {
        let rule = DateString::new(&self.field);
        self.must_satisfy(rule)
    }

    /// The value must be strictly greater than `bound`.
    pub fn must_be_greater_than(self, bound: impl Into<Value>) -> SchemaBuilder {
        let rule = GreaterThan::new(&self.field, bound);
        self.must_satisfy(rule)
    }

    /// The value must be strictly less than `bound`.
    pub fn must_be_less_than(self, bound: impl Into<Value>) -> SchemaBuilder {
        let rule = LessThan::new(&self.field, bound);
        self.must_satisfy(rule)
    }

    /// The value must satisfy `predicate`; `message` is reported otherwise.
    pub fn must_pass<F>(self, message: impl Into<String>, predicate: F) -> SchemaBuilder
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.must_satisfy(Predicate::new(message, predicate))
    }

    /// The value must pass `schema` in fail-fast mode.
    pub fn must_pass_muster(self, schema: Schema) -> SchemaBuilder {
        let rule = PassesSchema::new(&self.field, schema);
        self.must_satisfy(rule)
    }
}
