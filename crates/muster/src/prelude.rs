//! Prelude module for convenient imports.
//!
//! `use muster::prelude::*;` brings in the builder, the evaluation types and
//! everything needed to write custom rules.

// ============================================================================
// SCHEMA: builders and evaluation
// ============================================================================

pub use crate::schema::{Allowance, KeyBuilder, Schema, SchemaBuilder};

// ============================================================================
// FOUNDATION: rules, errors, value kinds
// ============================================================================

pub use crate::foundation::{
    ConfigError, ErrorKind, KeyValidator, Rule, ValidationError, ValidationErrors,
    ValidationResult, ValidationResultMulti, ValueKind,
};

// ============================================================================
// CONFIGURATION
// ============================================================================

pub use crate::config::{LengthMode, SchemaConfig};
pub use crate::registry::RuleRegistry;
pub use crate::rules::Comparator;
