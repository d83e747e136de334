//! Property-based tests for schema evaluation.

use muster::prelude::*;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn field_name() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z0-9@. ]{0,8}".prop_map(Value::String),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    prop::collection::vec((field_name(), scalar()), 0..6).prop_map(|pairs| {
        let map: Map<String, Value> = pairs.into_iter().collect();
        Value::Object(map)
    })
}

fn schema_from(required: Vec<String>, optional: Option<Vec<String>>) -> Schema {
    let mut builder = Schema::builder().must_have_keys(required);
    if let Some(optional) = optional {
        builder = builder.may_have_keys(optional);
    }
    builder
        .key("a").must_be_a(ValueKind::String)
        .key("b").must_be_greater_than(0)
        .key("c").must_be_an_email_address()
        .key("d").must_have_exact_length(3)
        .build()
}

fn schema() -> impl Strategy<Value = Schema> {
    (
        prop::collection::vec(field_name(), 0..4),
        prop::option::of(prop::collection::vec(field_name(), 0..4)),
    )
        .prop_map(|(required, optional)| schema_from(required, optional))
}

fn phase_rank(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::InvalidDocument => 0,
        ErrorKind::MissingAttribute => 1,
        ErrorKind::UnexpectedAttribute => 2,
        ErrorKind::InvalidAttribute => 3,
    }
}

// ============================================================================
// DETERMINISM: evaluating twice gives the same answer
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_idempotent(schema in schema(), doc in document()) {
        prop_assert_eq!(schema.errors(&doc), schema.errors(&doc));
        prop_assert_eq!(schema.error(&doc), schema.error(&doc));
    }
}

// ============================================================================
// MODES AGREE: error() is the head of errors()
// ============================================================================

proptest! {
    #[test]
    fn fail_fast_is_first_of_bulk(schema in schema(), doc in document()) {
        let errors = schema.errors(&doc);
        let first = schema.error(&doc);
        prop_assert_eq!(first.as_ref(), errors.first());
        prop_assert_eq!(schema.check(&doc).is_ok(), errors.is_empty());
        prop_assert_eq!(schema.check_all(&doc).is_ok(), errors.is_empty());
    }
}

// ============================================================================
// ORDERING: phases never interleave
// ============================================================================

proptest! {
    #[test]
    fn errors_are_in_phase_order(schema in schema(), doc in document()) {
        let ranks: Vec<u8> = schema.errors(&doc).iter().map(|e| phase_rank(e.kind)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }
}

// ============================================================================
// PRESENCE: each missing field reported once, absent fields never invalid
// ============================================================================

proptest! {
    #[test]
    fn missing_errors_match_absent_required_fields(schema in schema(), doc in document()) {
        let errors = schema.errors(&doc);
        for field in schema.required() {
            let present = doc.get(field).is_some();
            let reported = errors
                .iter()
                .filter(|e| e.kind == ErrorKind::MissingAttribute && e.detail == field.as_str())
                .count();
            prop_assert_eq!(reported > 0, !present);
        }
        for error in errors.iter().filter(|e| e.kind == ErrorKind::InvalidAttribute) {
            prop_assert!(doc.as_object().is_some_and(|m| m.values().any(|v| *v == error.detail)));
        }
    }

    #[test]
    fn open_schema_never_reports_unexpected(required in prop::collection::vec(field_name(), 0..4), doc in document()) {
        let schema = schema_from(required, None);
        prop_assert_eq!(schema.errors(&doc).count_of(ErrorKind::UnexpectedAttribute), 0);
    }

    #[test]
    fn empty_schema_accepts_anything(doc in document()) {
        prop_assert!(Schema::builder().build().errors(&doc).is_empty());
    }
}
