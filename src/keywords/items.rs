//! `items`: either a tuple of positional schemas (drafts before 2020-12) or
//! a single schema applied to every element (2020-12, where positional
//! checking moved to `prefixItems`).
//!
//! Grounded in `jsonschema::keywords::items`'s `ItemsArrayValidator`/
//! `ItemsObjectValidator` split. Both forms populate the same
//! `ArrayAccumulator` the `accumulator` module already drives, rather than
//! each owning a separate per-element loop.
use crate::{
    accumulator::ArrayAccumulator,
    driver::{self, Artifact},
    error::CompilationError,
};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let supports_prefix_items = artifact.context.draft.supports_prefix_items();
    match value {
        Value::Array(items) if !supports_prefix_items => {
            let base_context = artifact.context.descend(keyword, value);
            let accumulator = artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default);
            for (index, item) in items.iter().enumerate() {
                let sub = driver::compile_subtree(item, base_context.descend(index, item))?;
                accumulator.positional.push(Box::new(sub));
            }
            Ok(())
        }
        Value::Array(_) => Err(CompilationError::SchemaError {
            schema_pointer: artifact.context.pointer.join(keyword),
            reason: "`items` must be a single schema, not an array, under this draft".to_string(),
        }),
        _ => {
            let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
            artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default).overflow = Some(Box::new(sub));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::JSONSchema;
    use serde_json::json;

    #[test]
    fn tuple_form_checks_each_position_under_legacy_drafts() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "items": [{"type": "string"}, {"type": "integer"}]
        });
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!(["a", 1])));
        assert!(!compiled.is_valid(&json!([1, 1])));
    }

    #[test]
    fn single_schema_form_applies_to_every_element() {
        let compiled = JSONSchema::compile(&json!({"items": {"type": "integer"}})).expect("compiles");
        assert!(compiled.is_valid(&json!([1, 2, 3])));
        assert!(!compiled.is_valid(&json!([1, "x"])));
    }

    #[test]
    fn tuple_form_is_rejected_under_2020_12() {
        let schema = json!({"items": [{"type": "string"}]});
        assert!(JSONSchema::compile(&schema).is_err());
    }
}
