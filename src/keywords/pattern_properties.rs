//! `patternProperties`: a schema applied to every key matching a regular
//! expression, translated from ECMA-262 the same way `pattern` is.
//!
//! Grounded in `jsonschema::keywords::pattern_properties::PatternPropertiesValidator`,
//! folded into `ObjectAccumulator::pattern_properties`.
use crate::{
    accumulator::ObjectAccumulator,
    driver::{self, Artifact},
    error::CompilationError,
    keywords::pattern::convert_regex,
};
use regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let object = value.as_object().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`patternProperties` must be an object".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let accumulator = artifact.object_accumulator.get_or_insert_with(ObjectAccumulator::default);
    for (raw_pattern, schema) in object {
        let regex = Regex::new(&convert_regex(raw_pattern)).map_err(|error| CompilationError::InvalidRegex {
            pattern: raw_pattern.clone(),
            reason: error.to_string(),
        })?;
        let sub = driver::compile_subtree(schema, base_context.descend(raw_pattern.as_str(), schema))?;
        accumulator.pattern_properties.push((regex, Box::new(sub)));
    }
    Ok(())
}
