//! Black-box coverage for individual keywords and cross-cutting compiler
//! behavior (drafts, `$ref`, multi-document precaching, formats).
use schema_compiler::{CompilationOptions, Draft, JSONSchema, ValidationErrorKind};
use serde_json::json;

fn compile(schema: serde_json::Value) -> JSONSchema<'static> {
    let schema: &'static serde_json::Value = Box::leak(Box::new(schema));
    JSONSchema::compile(schema).expect("schema compiles")
}

#[test]
fn dependencies_required_form_before_2019_09() {
    let compiled = compile(json!({
        "type": "object",
        "dependencies": {"credit_card": ["billing_address"]}
    }));
    assert!(compiled.is_valid(&json!({"name": "x"})));
    assert!(compiled.is_valid(&json!({"credit_card": "1234", "billing_address": "here"})));
    assert!(!compiled.is_valid(&json!({"credit_card": "1234"})));
}

#[test]
fn dependencies_schema_form_before_2019_09() {
    let compiled = compile(json!({
        "type": "object",
        "dependencies": {
            "credit_card": {"properties": {"billing_address": {"type": "string"}}, "required": ["billing_address"]}
        }
    }));
    assert!(compiled.is_valid(&json!({"credit_card": "1234", "billing_address": "here"})));
    assert!(!compiled.is_valid(&json!({"credit_card": "1234"})));
}

#[test]
fn dependent_required_and_dependent_schemas_split_under_2019_09_plus() {
    let schema = json!({
        "type": "object",
        "$schema": "https://json-schema.org/draft/2019-09/schema",
        "dependentRequired": {"credit_card": ["billing_address"]},
        "dependentSchemas": {"name": {"required": ["address"]}}
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert_eq!(compiled.draft(), Draft::Draft201909);
    assert!(compiled.is_valid(&json!({"credit_card": "1", "billing_address": "x"})));
    assert!(!compiled.is_valid(&json!({"credit_card": "1"})));
    assert!(compiled.is_valid(&json!({"name": "w", "address": "h"})));
    assert!(!compiled.is_valid(&json!({"name": "w"})));
}

#[test]
fn unevaluated_properties_rejects_keys_no_sibling_keyword_covers() {
    let schema = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {"street": {"type": "string"}},
        "unevaluatedProperties": false
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert!(compiled.is_valid(&json!({"street": "Main"})));
    assert!(!compiled.is_valid(&json!({"street": "Main", "city": "Springfield"})));
}

#[test]
fn unevaluated_items_rejects_indices_past_prefix_items() {
    let schema = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "array",
        "prefixItems": [{"type": "string"}],
        "unevaluatedItems": false
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert!(compiled.is_valid(&json!(["x"])));
    assert!(!compiled.is_valid(&json!(["x", "extra"])));
}

#[test]
fn contains_respects_min_and_max_contains() {
    let compiled = compile(json!({
        "type": "array",
        "contains": {"type": "integer"},
        "minContains": 2,
        "maxContains": 3
    }));
    assert!(!compiled.is_valid(&json!([1, "a", "b"])));
    assert!(compiled.is_valid(&json!([1, 2, "a"])));
    assert!(!compiled.is_valid(&json!([1, 2, 3, 4])));
}

#[test]
fn items_tuple_form_with_additional_items_false_rejects_overflow() {
    let compiled = compile(json!({
        "items": [{"type": "string"}, {"type": "integer"}],
        "additionalItems": false
    }));
    assert!(compiled.is_valid(&json!(["a", 1])));
    assert!(compiled.is_valid(&json!(["a"])));
    assert!(!compiled.is_valid(&json!(["a", 1, "extra"])));
}

#[test]
fn prefix_items_and_items_tail_schema_under_2020_12() {
    let schema = json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "prefixItems": [{"type": "string"}, {"type": "integer"}],
        "items": {"type": "boolean"}
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert!(compiled.is_valid(&json!(["a", 1, true, false])));
    assert!(!compiled.is_valid(&json!(["a", 1, "oops"])));
}

#[test]
fn multiple_of_rejects_non_multiples() {
    let compiled = compile(json!({"multipleOf": 2}));
    assert!(compiled.is_valid(&json!(4)));
    assert!(!compiled.is_valid(&json!(5)));
    assert!(compiled.is_valid(&json!(4.0)));
}

#[test]
fn draft4_boolean_exclusive_minimum_toggles_strictness() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "minimum": 0,
        "exclusiveMinimum": true
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert_eq!(compiled.draft(), Draft::Draft4);
    assert!(!compiled.is_valid(&json!(0)));
    assert!(compiled.is_valid(&json!(1)));
}

#[test]
fn draft4_minimum_without_exclusive_flag_is_inclusive() {
    let schema = json!({
        "$schema": "http://json-schema.org/draft-04/schema#",
        "minimum": 5
    });
    let compiled = JSONSchema::options().compile(&schema).expect("compiles");
    assert!(compiled.is_valid(&json!(5)));
    assert!(!compiled.is_valid(&json!(4)));
}

#[test]
fn format_date_time_defaults_and_can_be_disabled() {
    let compiled = compile(json!({"type": "string", "format": "date-time"}));
    assert!(compiled.is_valid(&json!("2020-01-02T03:04:05Z")));
    assert!(!compiled.is_valid(&json!("not-a-date")));

    let schema = json!({"type": "string", "format": "date-time"});
    let schema: &'static serde_json::Value = Box::leak(Box::new(schema));
    let lenient = JSONSchema::options().without_format_validation().compile(schema).expect("compiles");
    assert!(lenient.is_valid(&json!("not-a-date")));
}

#[test]
fn format_ipv4_and_ipv6() {
    let compiled = compile(json!({"type": "string", "format": "ipv4"}));
    assert!(compiled.is_valid(&json!("127.0.0.1")));
    assert!(!compiled.is_valid(&json!("::1")));

    let compiled = compile(json!({"type": "string", "format": "ipv6"}));
    assert!(compiled.is_valid(&json!("::1")));
    assert!(!compiled.is_valid(&json!("127.0.0.1")));
}

#[test]
fn if_then_else_picks_the_matching_branch() {
    let compiled = compile(json!({
        "if": {"properties": {"kind": {"const": "a"}}},
        "then": {"required": ["a_field"]},
        "else": {"required": ["b_field"]}
    }));
    assert!(compiled.is_valid(&json!({"kind": "a", "a_field": 1})));
    assert!(!compiled.is_valid(&json!({"kind": "a"})));
    assert!(compiled.is_valid(&json!({"kind": "b", "b_field": 1})));
    assert!(!compiled.is_valid(&json!({"kind": "b"})));
}

#[test]
fn one_of_requires_exactly_one_match() {
    let compiled = compile(json!({"oneOf": [{"type": "integer"}, {"minimum": 0}]}));
    // 5 is both an integer and >= 0: matches both, so it fails oneOf.
    assert!(!compiled.is_valid(&json!(5)));
    // -5 matches only the integer branch.
    assert!(compiled.is_valid(&json!(-5)));
    // 1.5 matches only the minimum branch.
    assert!(compiled.is_valid(&json!(1.5)));
}

#[test]
fn with_authority_overrides_id_detection_for_ref_routing() {
    let schema = json!({"$ref": "urn:example:root#/definitions/positive"});
    let schema: &'static serde_json::Value = Box::leak(Box::new(schema));
    let other = json!({"definitions": {"positive": {"type": "integer", "minimum": 0}}});
    let compiled = JSONSchema::options()
        .with_authority("urn:example:caller")
        .precache("urn:example:root", other)
        .compile(schema)
        .expect("compiles");
    assert!(compiled.is_valid(&json!(3)));
    assert!(!compiled.is_valid(&json!(-3)));
}

#[test]
fn unresolved_ref_fails_compilation() {
    let schema = json!({"$ref": "#/definitions/missing"});
    let error = JSONSchema::compile(&schema).unwrap_err();
    assert!(matches!(error, schema_compiler::CompilationError::UnresolvedReference { .. }));
}

#[test]
fn entrypoint_option_compiles_a_subtree_instead_of_the_root() {
    let schema = json!({
        "definitions": {"positive": {"type": "integer", "minimum": 0}}
    });
    let compiled = JSONSchema::options()
        .with_entrypoint(schema_compiler::Pointer::root().join("definitions").join("positive"))
        .compile(&schema)
        .expect("compiles");
    assert!(compiled.is_valid(&json!(1)));
    assert!(!compiled.is_valid(&json!(-1)));
}

#[test]
fn combinator_mismatch_kind_is_reported_for_one_of() {
    let compiled = compile(json!({"oneOf": [{"type": "integer"}, {"minimum": 0}]}));
    let error = compiled.validate(&json!(5)).next().expect("one error");
    assert!(matches!(&error.kind, ValidationErrorKind::CombinatorMismatch { combinator: "oneOf", .. }));
}

#[test]
fn options_default_draft_is_2020_12_when_schema_is_silent() {
    let compiled = compile(json!({}));
    assert_eq!(compiled.draft(), Draft::Draft202012);
}

#[test]
fn with_draft_forces_a_draft_even_if_schema_says_otherwise() {
    let schema = json!({"$schema": "https://json-schema.org/draft/2020-12/schema"});
    let options = CompilationOptions::new().with_draft(Draft::Draft7);
    let compiled = options.compile(&schema).expect("compiles");
    assert_eq!(compiled.draft(), Draft::Draft7);
}
