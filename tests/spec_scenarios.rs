//! Transcribed scenarios from the design document's "testable properties"
//! section: concrete schema/instance pairs with the exact error location
//! each one is expected to produce.
use schema_compiler::{JSONSchema, ValidationErrorKind};
use serde_json::json;

fn compile(schema: serde_json::Value) -> JSONSchema<'static> {
    let schema: &'static serde_json::Value = Box::leak(Box::new(schema));
    JSONSchema::compile(schema).expect("schema compiles")
}

#[test]
fn not_an_object_reports_type_at_root() {
    let compiled = compile(json!({"type": "object"}));
    let instance = json!("Not an object");
    let error = compiled.validate(&instance).next().expect("one error");
    assert!(matches!(error.kind, ValidationErrorKind::TypeMismatch { .. }));
    assert_eq!(error.schema_pointer.to_uri(), "#/type");
    assert_eq!(error.instance_pointer.to_uri(), "#");
    assert_eq!(error.error_value, instance);
}

#[test]
fn nested_property_type_mismatch_points_at_the_failing_property() {
    let compiled = compile(json!({
        "type": "object",
        "properties": {"number": {"type": "number"}}
    }));
    let instance = json!({"number": "1600", "street_name": "Pennsylvania"});
    let error = compiled.validate(&instance).next().expect("one error");
    assert!(matches!(error.kind, ValidationErrorKind::TypeMismatch { .. }));
    assert_eq!(error.schema_pointer.to_uri(), "#/properties/number/type");
    assert_eq!(error.instance_pointer.to_uri(), "#/number");
    assert_eq!(error.error_value, json!("1600"));
}

#[test]
fn missing_required_property_names_the_missing_key() {
    let compiled = compile(json!({"type": "object", "required": ["name", "email"]}));
    let instance = json!({"name": "W", "address": "H"});
    let errors: Vec<_> = compiled.validate(&instance).collect();
    assert_eq!(errors.len(), 1);
    let error = &errors[0];
    assert_eq!(error.schema_pointer.to_uri(), "#/required/1");
    assert_eq!(error.instance_pointer.to_uri(), "#");
    assert_eq!(error.error_value, instance);
    assert!(matches!(&error.kind, ValidationErrorKind::RequiredMissing { property } if property == "email"));
}

#[test]
fn property_name_pattern_failure_points_at_the_bad_key() {
    let compiled = compile(json!({
        "type": "object",
        "propertyNames": {"pattern": "^[A-Za-z_][A-Za-z0-9_]*$"}
    }));
    let instance = json!({"001 invalid": "value"});
    let error = compiled.validate(&instance).next().expect("one error");
    assert_eq!(error.schema_pointer.to_uri(), "#/propertyNames/pattern");
    assert_eq!(error.instance_pointer.to_uri(), "#/001 invalid");
    assert_eq!(error.error_value, json!("001 invalid"));
}

#[test]
fn too_many_properties_reports_max_properties() {
    let compiled = compile(json!({"type": "object", "minProperties": 2, "maxProperties": 3}));
    let instance = json!({"a": 0, "b": 1, "c": 2, "d": 3});
    let error = compiled.validate(&instance).next().expect("one error");
    assert_eq!(error.schema_pointer.to_uri(), "#/maxProperties");
}

#[test]
fn pattern_properties_type_mismatch_points_at_the_matched_pattern() {
    let compiled = compile(json!({
        "type": "object",
        "patternProperties": {
            "^S_": {"type": "string"},
            "^I_": {"type": "integer"}
        },
        "additionalProperties": false
    }));
    let instance = json!({"S_0": 42});
    let error = compiled.validate(&instance).next().expect("one error");
    assert_eq!(error.schema_pointer.to_uri(), "#/patternProperties/%5ES_/type");
    assert_eq!(error.instance_pointer.to_uri(), "#/S_0");
}

#[test]
fn validate_is_deterministic() {
    let compiled = compile(json!({"type": "object", "required": ["a"], "properties": {"a": {"minLength": 3}}}));
    let instance = json!({"a": "x"});
    let first: Vec<_> = compiled.validate(&instance).map(|error| error.kind.to_string()).collect();
    let second: Vec<_> = compiled.validate(&instance).map(|error| error.kind.to_string()).collect();
    assert_eq!(first, second);
}

#[test]
fn empty_schema_accepts_everything() {
    let compiled = compile(json!({}));
    assert!(compiled.is_valid(&json!(null)));
    assert!(compiled.is_valid(&json!(42)));
    assert!(compiled.is_valid(&json!("anything")));
    assert!(compiled.is_valid(&json!([1, 2, 3])));
    assert!(compiled.is_valid(&json!({"a": 1})));
}

#[test]
fn boolean_schemas_accept_or_reject_unconditionally() {
    let accept_all = compile(json!(true));
    assert!(accept_all.is_valid(&json!(1)));
    assert!(accept_all.is_valid(&json!(null)));

    let reject_all = compile(json!(false));
    assert!(!reject_all.is_valid(&json!(1)));
    let error = reject_all.validate(&json!(1)).next().expect("one error");
    assert!(matches!(error.kind, ValidationErrorKind::TypeMismatch { .. }));
}

#[test]
fn bare_type_keyword_matches_only_its_primitive() {
    let compiled = compile(json!({"type": "integer"}));
    assert!(compiled.is_valid(&json!(5)));
    assert!(!compiled.is_valid(&json!("5")));
    assert!(!compiled.is_valid(&json!(5.5)));
    // A whole-valued float counts as an integer.
    assert!(compiled.is_valid(&json!(5.0)));
}

#[test]
fn pointer_round_trips_through_uri_form() {
    use schema_compiler::Pointer;
    let pointer = Pointer::root().join("a").join("b").join(0usize);
    assert_eq!(Pointer::from_uri(&pointer.to_uri()), pointer);
}

#[test]
fn enum_law_holds_for_matching_and_non_matching_values() {
    let compiled = compile(json!({"enum": [1, "two", [3]]}));
    assert!(compiled.is_valid(&json!(1)));
    assert!(compiled.is_valid(&json!("two")));
    assert!(compiled.is_valid(&json!([3])));
    assert!(!compiled.is_valid(&json!(2)));
    assert!(!compiled.is_valid(&json!("three")));
}

#[test]
fn not_law_inverts_the_inner_schema() {
    let compiled = compile(json!({"not": {"type": "string"}}));
    assert!(compiled.is_valid(&json!(1)));
    assert!(!compiled.is_valid(&json!("x")));
}

#[test]
fn any_of_succeeds_if_any_branch_succeeds_and_surfaces_no_failing_branch_errors() {
    let compiled = compile(json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}));
    assert!(compiled.is_valid(&json!("x")));
    assert!(compiled.is_valid(&json!(1)));
    assert!(!compiled.is_valid(&json!(1.5)));
    let errors: Vec<_> = compiled.validate(&json!(1.5)).collect();
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0].kind, ValidationErrorKind::CombinatorMismatch { combinator: "anyOf", .. }));
}

#[test]
fn ref_error_carries_a_ref_trace() {
    let compiled = compile(json!({
        "definitions": {"positive": {"type": "integer", "minimum": 0}},
        "properties": {"value": {"$ref": "#/definitions/positive"}}
    }));
    let instance = json!({"value": -1});
    let error = compiled.validate(&instance).next().expect("one error");
    assert_eq!(error.ref_trace.len(), 1);
    assert_eq!(error.ref_trace[0].to_uri(), "#/properties/value/$ref");
}
