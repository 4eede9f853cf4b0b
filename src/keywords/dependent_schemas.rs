//! `dependentSchemas` (2019-09+): the schema-only half of what pre-2019-09
//! drafts call `dependencies`.
//!
//! Grounded in `jsonschema`'s modern keyword split; shares its validation
//! shape with `dependencies::Dependency::Schema`.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{CompilationError, ErrorIterator},
    keyword::Keyword,
    paths::InstancePath,
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct DependentSchemas<'a> {
    entries: Vec<(String, Artifact<'a>)>,
}

impl<'a> Keyword for DependentSchemas<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        let Value::Object(object) = instance else {
            return Box::new(std::iter::empty());
        };
        let mut errors = Vec::new();
        for (property, sub) in &self.entries {
            if object.contains_key(property.as_str()) {
                errors.extend(sub.validate(schema, instance, instance_path));
            }
        }
        Box::new(errors.into_iter())
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        let Value::Object(object) = instance else { return true };
        self.entries
            .iter()
            .all(|(property, sub)| !object.contains_key(property.as_str()) || sub.is_valid(schema, instance))
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let object = value.as_object().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`dependentSchemas` must be an object".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let mut entries = Vec::with_capacity(object.len());
    for (property, sub_value) in object {
        let sub = driver::compile_subtree(sub_value, base_context.descend(property.as_str(), sub_value))?;
        entries.push((property.clone(), sub));
    }
    artifact.filters.push(Box::new(DependentSchemas { entries }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn applies_only_when_the_key_is_present() {
        let schema = json!({"dependentSchemas": {"a": {"required": ["b"]}}});
        tests_util::is_valid(schema.clone(), json!({"c": 1}));
        tests_util::is_not_valid(schema, json!({"a": 1}));
    }
}
