use criterion::{black_box, criterion_group, criterion_main, Criterion};
use schema_compiler::JSONSchema;
use serde_json::{json, Value};

fn bench_compile(c: &mut Criterion, name: &str, schema: &Value) {
    c.bench_function(&format!("compile/{name}"), |b| {
        b.iter(|| JSONSchema::compile(schema).expect("valid schema"))
    });
}

fn bench_is_valid(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let compiled = JSONSchema::compile(schema).expect("valid schema");
    c.bench_function(&format!("is_valid/{name}"), |b| {
        b.iter(|| compiled.is_valid(black_box(instance)))
    });
}

fn bench_validate(c: &mut Criterion, name: &str, schema: &Value, instance: &Value) {
    let compiled = JSONSchema::compile(schema).expect("valid schema");
    c.bench_function(&format!("validate/{name}"), |b| {
        b.iter(|| compiled.validate(black_box(instance)).count())
    });
}

fn flat_object(c: &mut Criterion) {
    let schema = json!({
        "type": "object",
        "properties": {
            "name": {"type": "string"},
            "age": {"type": "integer", "minimum": 0},
            "email": {"type": "string", "format": "email"}
        },
        "required": ["name", "age"]
    });
    let valid = json!({"name": "Ann", "age": 30, "email": "ann@example.com"});
    let invalid = json!({"name": "Ann", "age": -1});

    bench_compile(c, "flat_object", &schema);
    bench_is_valid(c, "flat_object/valid", &schema, &valid);
    bench_is_valid(c, "flat_object/invalid", &schema, &invalid);
    bench_validate(c, "flat_object/invalid", &schema, &invalid);
}

fn nested_ref(c: &mut Criterion) {
    let schema = json!({
        "definitions": {
            "positive": {"type": "integer", "minimum": 0}
        },
        "type": "object",
        "properties": {
            "items": {
                "type": "array",
                "items": {"$ref": "#/definitions/positive"}
            }
        }
    });
    let valid = json!({"items": [1, 2, 3, 4, 5]});
    let invalid = json!({"items": [1, 2, -3, 4, -5]});

    bench_compile(c, "nested_ref", &schema);
    bench_is_valid(c, "nested_ref/valid", &schema, &valid);
    bench_validate(c, "nested_ref/invalid", &schema, &invalid);
}

fn combinators(c: &mut Criterion) {
    let schema = json!({
        "allOf": [
            {"type": "object"},
            {"properties": {"kind": {"enum": ["a", "b", "c"]}}}
        ],
        "anyOf": [
            {"required": ["a_field"]},
            {"required": ["b_field"]},
            {"required": ["c_field"]}
        ]
    });
    let instance = json!({"kind": "b", "b_field": 1});

    bench_compile(c, "combinators", &schema);
    bench_is_valid(c, "combinators", &schema, &instance);
    bench_validate(c, "combinators", &schema, &instance);
}

fn large_array(c: &mut Criterion) {
    let schema = json!({
        "type": "array",
        "items": {"type": "integer", "minimum": 0},
        "uniqueItems": true
    });
    let instance = Value::Array((0..1000).map(Value::from).collect());

    bench_compile(c, "large_array", &schema);
    bench_is_valid(c, "large_array", &schema, &instance);
}

criterion_group!(benches, flat_object, nested_ref, combinators, large_array);
criterion_main!(benches);
