//! # muster
//!
//! Declarative schema validation for structured documents.
//!
//! A [`Schema`](schema::Schema) states which fields a document must have,
//! which it may have, what each present field's value must satisfy, and
//! which whole-document predicates must hold. Documents are
//! [`serde_json::Value`]s; anything that is not a JSON object has no fields.
//!
//! ## Quick Start
//!
//! ```
//! use muster::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .must_have_keys(["firstname", "lastname", "email"])
//!     .may_have_keys(["birthyear"])
//!     .key("email").must_be_an_email_address()
//!     .key("birthyear").must_be_greater_than(1900)
//!     .key("birthyear").must_be_less_than(2100)
//!     .build();
//!
//! let errors = schema.errors(&json!({
//!     "firstname": "Joe",
//!     "email": "not an address",
//!     "favourite_band": "The Clash"
//! }));
//! assert_eq!(errors.len(), 3);
//! assert_eq!(errors[0].message, "A key named 'lastname' is required but was not found.");
//! assert_eq!(errors[1].message, "A key named 'favourite_band' was found but is not allowed.");
//! assert_eq!(errors[2].message, "Key 'email' was not an email address.");
//! ```
//!
//! ## Evaluation modes
//!
//! - [`Schema::error`](schema::Schema::error) / [`Schema::check`](schema::Schema::check):
//!   fail-fast, the first error only
//! - [`Schema::errors`](schema::Schema::errors) / [`Schema::check_all`](schema::Schema::check_all):
//!   bulk, every error in phase order
//!
//! ## Custom rules
//!
//! Implement [`Rule`](foundation::Rule) (or declare one with [`rule!`]) and
//! attach it with [`KeyBuilder::must_satisfy`](schema::KeyBuilder::must_satisfy),
//! add a `must_*` terminal through an extension trait on
//! [`KeyBuilder`](schema::KeyBuilder), or register a named constructor in a
//! [`RuleRegistry`](registry::RuleRegistry).

// ValidationError carries the offending value inline; boxing it would put an
// allocation on every failing check.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod schema;
pub mod sets;

pub use serde_json::{Map, Value};
