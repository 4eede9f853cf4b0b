//! `properties`: a per-key schema, checked only against keys present on the
//! instance.
//!
//! Grounded in `jsonschema::keywords::properties::PropertiesValidator`,
//! folded here into `ObjectAccumulator::property_keywords` rather than its
//! own `Vec<(String, Validators)>` walk, so one pass over the instance's
//! keys drives `properties`/`patternProperties`/`additionalProperties`/
//! `propertyNames` together (see `accumulator` module doc).
use crate::{
    accumulator::ObjectAccumulator,
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
    let object = value.as_object().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`properties` must be an object".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let accumulator = artifact.object_accumulator.get_or_insert_with(ObjectAccumulator::default);
    for (name, schema) in object {
        let sub = driver::compile_subtree(schema, base_context.descend(name.as_str(), schema))?;
        accumulator.property_keywords.insert(name.clone(), Box::new(sub));
    }
    Ok(())
}
