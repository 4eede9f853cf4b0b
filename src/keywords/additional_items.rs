//! `additionalItems` (pre-2020-12): governs elements past the end of a
//! tuple-form `items`. Has no effect unless the sibling `items` is itself an
//! array — matching the teacher's `AdditionalItemsObjectValidator`/
//! `AdditionalItemsBooleanValidator` dispatch, which only compiles when that
//! condition holds.
//!
//! Grounded in `jsonschema::keywords::additional_items`.
use crate::{
    accumulator::ArrayAccumulator,
    driver::{self, Artifact},
    error::CompilationError,
};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    if !matches!(parent.get("items"), Some(Value::Array(_))) {
        return Ok(());
    }
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    artifact.array_accumulator.get_or_insert_with(ArrayAccumulator::default).overflow = Some(Box::new(sub));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::JSONSchema;
    use serde_json::json;

    #[test]
    fn has_no_effect_unless_items_is_a_tuple() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "items": {"type": "string"},
            "additionalItems": false
        });
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!(["a", "b", "c"])));
    }

    #[test]
    fn false_rejects_elements_past_the_tuple() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "items": [{"type": "string"}],
            "additionalItems": false
        });
        let compiled = JSONSchema::options().compile(&schema).expect("compiles");
        assert!(compiled.is_valid(&json!(["a"])));
        assert!(!compiled.is_valid(&json!(["a", "extra"])));
    }
}
