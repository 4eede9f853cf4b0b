//! `additionalProperties`: governs keys not matched by `properties` or
//! `patternProperties`.
//!
//! Grounded in `jsonschema::keywords::additional_properties`, which compiles
//! to one of 8 structs depending on whether `properties`/`patternProperties`
//! are present and whether the schema is `true`/`false`/an object. That
//! combinatorial split exists because the teacher re-derives "is this key
//! additional" inside each validator; here `ObjectAccumulator::run` already
//! computes that once per key across every object filter, so
//! `additionalProperties` only needs to compile its own schema and hand it
//! to the fold (see `DESIGN.md`).
use crate::{accumulator::ObjectAccumulator, driver, driver::Artifact, error::CompilationError};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    artifact.object_accumulator.get_or_insert_with(ObjectAccumulator::default).additional_properties = Some(Box::new(sub));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn false_rejects_keys_not_named_in_properties() {
        let schema = json!({"properties": {"a": {}}, "additionalProperties": false});
        tests_util::is_valid(schema.clone(), json!({"a": 1}));
        tests_util::is_not_valid(schema, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn schema_form_validates_the_leftover_values() {
        let schema = json!({"properties": {"a": {}}, "additionalProperties": {"type": "integer"}});
        tests_util::is_valid(schema.clone(), json!({"a": 1, "b": 2}));
        tests_util::is_not_valid(schema, json!({"a": 1, "b": "x"}));
    }
}
