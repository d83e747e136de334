//! The three ways of adding rules from outside the crate.

use std::borrow::Cow;
use std::sync::Arc;

use muster::prelude::*;
use muster::rules::Predicate;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

// ============================================================================
// EXTENSION TRAIT ON KEY BUILDER
// ============================================================================

trait ColourRules {
    fn must_be_the_colour(self, colour: &str) -> SchemaBuilder;
}

impl ColourRules for KeyBuilder {
    fn must_be_the_colour(self, colour: &str) -> SchemaBuilder {
        let message = format!("Key '{}' must be the colour {colour}.", self.field());
        let colour = colour.to_owned();
        self.must_pass(message, move |v| v.as_str() == Some(colour.as_str()))
    }
}

#[test]
fn extension_trait_adds_terminal() {
    let schema = Schema::builder()
        .key("colour").must_be_the_colour("blue")
        .build();
    let error = schema.error(&json!({"colour": "yellow"})).unwrap();
    assert_eq!(error.kind, ErrorKind::InvalidAttribute);
    assert_eq!(error.message, "Key 'colour' must be the colour blue.");
    assert_eq!(error.detail, "yellow");

    let schema = Schema::builder()
        .key("colour").must_be_the_colour("yellow")
        .build();
    assert_eq!(schema.error(&json!({"colour": "yellow"})), None);
}

// ============================================================================
// RULE TRAIT
// ============================================================================

#[derive(Debug)]
struct Divisible {
    field: String,
    by: u64,
}

impl Rule for Divisible {
    fn name(&self) -> &str {
        "must_be_divisible_by"
    }

    fn check(&self, value: &Value) -> Result<(), Cow<'_, str>> {
        match value.as_u64() {
            Some(n) if n % self.by == 0 => Ok(()),
            Some(n) => Err(Cow::Owned(format!(
                "Key '{}' must be divisible by {}, {n} is not.",
                self.field, self.by
            ))),
            None => Err(Cow::Borrowed("not a whole number")),
        }
    }
}

#[test]
fn rule_impl_builds_dynamic_messages() {
    let schema = Schema::builder()
        .key("n")
        .must_satisfy(Divisible {
            field: "n".to_owned(),
            by: 3,
        })
        .build();
    assert_eq!(schema.error(&json!({"n": 9})), None);
    assert_eq!(
        schema.error(&json!({"n": 10})).unwrap().message,
        "Key 'n' must be divisible by 3, 10 is not."
    );
    assert_eq!(
        schema.error(&json!({"n": "ten"})).unwrap().message,
        "not a whole number"
    );
}

#[test]
fn key_validator_registers_directly() {
    let validator = KeyValidator::new("n", Predicate::new("n must be odd", |v| {
        v.as_i64().is_some_and(|n| n % 2 != 0)
    }));
    let schema = Schema::builder().register_key_validator(validator).build();
    assert_eq!(schema.error(&json!({"n": 3})), None);
    assert_eq!(schema.error(&json!({"n": 4})).unwrap().message, "n must be odd");
}

// ============================================================================
// RULE MACRO
// ============================================================================

muster::rule! {
    /// The value is a string starting with a prefix.
    pub StartsWith { prefix: String } as "must_start_with";
    check(self, value) {
        value.as_str().is_some_and(|s| s.starts_with(self.prefix.as_str()))
    }
}

#[test]
fn rule_macro_declares_a_rule() {
    let rule = StartsWith::with_message("Key 'id' must start with usr_.", "usr_".to_owned());
    assert_eq!(rule.name(), "must_start_with");

    let schema = Schema::builder().key("id").must_satisfy(rule).build();
    assert_eq!(schema.error(&json!({"id": "usr_42"})), None);
    let error = schema.error(&json!({"id": "grp_42"})).unwrap();
    assert_eq!(error.message, "Key 'id' must start with usr_.");
    assert_eq!(error.detail, "grp_42");
}

// ============================================================================
// REGISTRY
// ============================================================================

fn colour_registry() -> Arc<RuleRegistry> {
    let mut registry = RuleRegistry::builtin();
    registry.register("must_be_the_colour", |field, params, _config| {
        let [Value::String(colour)] = params else {
            return Err(ConfigError::invalid_params("must_be_the_colour", "expected one colour"));
        };
        let message = format!("Key '{field}' must be the colour {colour}.");
        let colour = colour.clone();
        Ok(Box::new(Predicate::new(message, move |v| {
            v.as_str() == Some(colour.as_str())
        })))
    });
    Arc::new(registry)
}

#[test]
fn registry_rule_resolves_by_name() {
    let schema = Schema::builder()
        .with_registry(colour_registry())
        .key("colour")
        .must("must_be_the_colour", [json!("blue")])
        .unwrap()
        .key("n")
        .must("must_be_greater_than", [json!(1)])
        .unwrap()
        .build();

    let errors = schema.errors(&json!({"colour": "yellow", "n": 0}));
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].message, "Key 'colour' must be the colour blue.");
    assert_eq!(errors[1].message, "Key 'n' must be greater than 1");
}

#[test]
fn registry_rejects_bad_params() {
    let err = Schema::builder()
        .with_registry(colour_registry())
        .key("colour")
        .must("must_be_the_colour", [json!(1), json!(2)])
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidParams { ref rule, .. } if rule == "must_be_the_colour"));
}

#[test]
fn registry_must_be_a_parses_tags() {
    let schema = Schema::builder()
        .key("flag")
        .must("must_be_a", [json!("boolean")])
        .unwrap()
        .build();
    assert_eq!(
        schema.error(&json!({"flag": 1})).unwrap().message,
        "Key 'flag' must be a boolean"
    );
}

#[test]
fn builtin_registry_is_unchanged_by_custom_registries() {
    let _custom = colour_registry();
    assert!(!RuleRegistry::shared_builtin().contains("must_be_the_colour"));
}
