//! `propertyNames`: every key, seen as a string instance, must satisfy the
//! given schema.
//!
//! Grounded in `jsonschema::keywords::property_names`'s
//! `PropertyNamesObjectValidator`/`PropertyNamesBooleanValidator` split —
//! unnecessary here since `driver::compile_subtree` already handles a
//! `true`/`false` schema node the same way it handles an object one.
use crate::{accumulator::ObjectAccumulator, driver, driver::Artifact, error::CompilationError};
use serde_json::{Map, Value};

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let sub = driver::compile_subtree(value, artifact.context.descend(keyword, value))?;
    artifact.object_accumulator.get_or_insert_with(ObjectAccumulator::default).property_names = Some(Box::new(sub));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn checks_keys_as_string_instances() {
        let schema = json!({"propertyNames": {"pattern": "^[a-z]+$"}});
        tests_util::is_valid(schema.clone(), json!({"abc": 1}));
        tests_util::is_not_valid(schema, json!({"ABC": 1}));
    }
}
