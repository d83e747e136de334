//! Rule registry for named rule constructors
//!
//! A [`RuleRegistry`] maps rule names to constructors. Schema builders hold
//! one (shared behind `Arc`) and resolve `KeyBuilder::must(name, params)`
//! calls through it, so new rule kinds plug in without touching the engine.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use muster::prelude::*;
//! use muster::rules::Predicate;
//! use serde_json::json;
//!
//! let mut registry = RuleRegistry::builtin();
//! registry.register("must_be_the_colour", |field, params, _config| {
//!     let colour = params
//!         .first()
//!         .and_then(|v| v.as_str())
//!         .ok_or_else(|| ConfigError::invalid_params("must_be_the_colour", "expected a colour"))?
//!         .to_owned();
//!     let message = format!("Key '{field}' must be the colour {colour}.");
//!     Ok(Box::new(Predicate::new(message, move |v| v.as_str() == Some(colour.as_str()))))
//! });
//!
//! let schema = Schema::builder()
//!     .with_registry(Arc::new(registry))
//!     .key("colour")
//!     .must("must_be_the_colour", [json!("blue")])?
//!     .build();
//!
//! assert!(schema.error(&json!({"colour": "blue"})).is_none());
//! # Ok::<(), ConfigError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::config::SchemaConfig;
use crate::foundation::{ConfigError, Rule, ValueKind};
use crate::rules::{
    Comparator, DateString, EmailAddress, Equals, GreaterThan, HasLength, IsA, LessThan, Matches,
    OneOf,
};

/// Builds a rule for `field` from positional parameters.
pub type RuleConstructor =
    Arc<dyn Fn(&str, &[Value], &SchemaConfig) -> Result<Box<dyn Rule>, ConfigError> + Send + Sync>;

static BUILTIN: LazyLock<Arc<RuleRegistry>> = LazyLock::new(|| Arc::new(RuleRegistry::builtin()));

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// Named rule constructors.
#[derive(Clone, Default)]
pub struct RuleRegistry {
    constructors: HashMap<String, RuleConstructor>,
}

impl RuleRegistry {
    /// Creates a registry with no rules.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a registry holding every parameterisable built-in rule.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register("must_match", |field, params, _| {
            let [pattern] = params else {
                return Err(arity("must_match", "a pattern"));
            };
            let pattern = pattern
                .as_str()
                .ok_or_else(|| ConfigError::invalid_params("must_match", "pattern must be a string"))?;
            Ok(Box::new(Matches::new(field, Regex::new(pattern)?)))
        });
        registry.register("must_be_an_email_address", |field, params, _| {
            no_params("must_be_an_email_address", params)?;
            Ok(Box::new(EmailAddress::new(field)))
        });
        registry.register("must_be_one_of", |field, params, _| match params {
            [Value::Array(allowed)] => Ok(Box::new(OneOf::new(field, allowed.iter().cloned()))),
            _ => Err(arity("must_be_one_of", "one array of allowed values")),
        });
        registry.register("must_equal", |field, params, _| {
            let [expected] = params else {
                return Err(arity("must_equal", "the expected value"));
            };
            Ok(Box::new(Equals::new(field, expected.clone())))
        });
        registry.register("must_have_length", |field, params, config| {
            let (comparator, length) = match params {
                [length] => (Comparator::Equal, length),
                [comparator, length] => {
                    let symbol = comparator.as_str().ok_or_else(|| {
                        ConfigError::invalid_params("must_have_length", "comparator must be a string")
                    })?;
                    (symbol.parse::<Comparator>()?, length)
                }
                _ => return Err(arity("must_have_length", "an optional comparator and a length")),
            };
            let length = length
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| {
                    ConfigError::invalid_params("must_have_length", "length must be a non-negative integer")
                })?;
            Ok(Box::new(HasLength::new(field, comparator, length, config.length_mode)))
        });
        registry.register("must_be_a", |field, params, _| {
            let [Value::String(tag)] = params else {
                return Err(arity("must_be_a", "a type tag string"));
            };
            Ok(Box::new(IsA::new(field, tag.parse::<ValueKind>()?)))
        });
        registry.register("must_be_a_date_string", |field, params, _| {
            no_params("must_be_a_date_string", params)?;
            Ok(Box::new(DateString::new(field)))
        });
        registry.register("must_be_greater_than", |field, params, _| {
            let [bound] = params else {
                return Err(arity("must_be_greater_than", "a bound"));
            };
            Ok(Box::new(GreaterThan::new(field, bound.clone())))
        });
        registry.register("must_be_less_than", |field, params, _| {
            let [bound] = params else {
                return Err(arity("must_be_less_than", "a bound"));
            };
            Ok(Box::new(LessThan::new(field, bound.clone())))
        });
        registry
    }

    /// The process-wide built-in registry. Immutable.
    #[must_use]
    pub fn shared_builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Registers `constructor` under `name`, returning any constructor it
    /// replaces.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> Option<RuleConstructor>
    where
        F: Fn(&str, &[Value], &SchemaConfig) -> Result<Box<dyn Rule>, ConfigError>
            + Send
            + Sync
            + 'static,
    {
        let name = name.into();
        let replaced = self.constructors.insert(name.clone(), Arc::new(constructor));
        tracing::debug!(rule = %name, replaced = replaced.is_some(), "Registered rule constructor");
        replaced
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds the rule `name` for `field`.
    pub fn construct(
        &self,
        name: &str,
        field: &str,
        params: &[Value],
        config: &SchemaConfig,
    ) -> Result<Box<dyn Rule>, ConfigError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| ConfigError::UnknownRule(name.to_owned()))?;
        constructor(field, params, config)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}

fn arity(rule: &str, expected: &str) -> ConfigError {
    ConfigError::invalid_params(rule, format!("expected {expected}"))
}

fn no_params(rule: &str, params: &[Value]) -> Result<(), ConfigError> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(arity(rule, "no parameters"))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Predicate;
    use serde_json::json;

    fn build(name: &str, params: &[Value]) -> Result<Box<dyn Rule>, ConfigError> {
        RuleRegistry::builtin().construct(name, "field", params, &SchemaConfig::default())
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            RuleRegistry::builtin().names(),
            vec![
                "must_be_a",
                "must_be_a_date_string",
                "must_be_an_email_address",
                "must_be_greater_than",
                "must_be_less_than",
                "must_be_one_of",
                "must_equal",
                "must_have_length",
                "must_match",
            ]
        );
    }

    #[test]
    fn test_construct_builtin() {
        let rule = build("must_have_length", &[json!(">"), json!(3)]).unwrap();
        assert_eq!(rule.name(), "must_have_length");
        assert!(rule.check(&json!([1, 2, 3, 4])).is_ok());
        assert!(rule.check(&json!([1, 2, 3])).is_err());

        let rule = build("must_be_one_of", &[json!(["a", "b"])]).unwrap();
        assert!(rule.check(&json!("b")).is_ok());
    }

    #[test]
    fn test_unknown_rule() {
        let err = build("must_be_purple", &[]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRule(ref name) if name == "must_be_purple"));
    }

    #[test]
    fn test_bad_params() {
        assert!(matches!(
            build("must_match", &[]).unwrap_err(),
            ConfigError::InvalidParams { .. }
        ));
        assert!(matches!(
            build("must_match", &[json!("(")]).unwrap_err(),
            ConfigError::InvalidPattern(_)
        ));
        assert!(matches!(
            build("must_have_length", &[json!("!"), json!(5)]).unwrap_err(),
            ConfigError::UnknownComparator(_)
        ));
        assert!(matches!(
            build("must_have_length", &[json!(-1)]).unwrap_err(),
            ConfigError::InvalidParams { .. }
        ));
        assert!(matches!(
            build("must_be_a", &[json!("function")]).unwrap_err(),
            ConfigError::InvalidParams { .. }
        ));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = RuleRegistry::empty();
        let first = registry.register("always", |_, _, _| Ok(Box::new(Predicate::new("a", |_| true))));
        assert!(first.is_none());
        let second = registry.register("always", |_, _, _| Ok(Box::new(Predicate::new("b", |_| false))));
        assert!(second.is_some());

        let rule = registry
            .construct("always", "f", &[], &SchemaConfig::default())
            .unwrap();
        assert_eq!(rule.check(&json!(1)).unwrap_err(), "b");
    }

    #[test]
    fn test_shared_builtin_is_shared() {
        let a = RuleRegistry::shared_builtin();
        let b = RuleRegistry::shared_builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
