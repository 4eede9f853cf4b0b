//! `required`: every named property must be present on an object instance.
//!
//! Grounded in `jsonschema::keywords::required::RequiredValidator`.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Required {
    properties: Vec<String>,
    schema_pointer: Pointer,
}

impl Keyword for Required {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Object(object) = instance {
            let missing: Vec<ValidationError> = self
                .properties
                .iter()
                .enumerate()
                .filter(|(_, property)| !object.contains_key(property.as_str()))
                .map(|(index, property)| {
                    ValidationError::new(
                        ValidationErrorKind::RequiredMissing { property: property.clone() },
                        self.schema_pointer.join(index),
                        instance_path.to_pointer(),
                        owned(instance),
                    )
                })
                .collect();
            return Box::new(missing.into_iter());
        }
        Box::new(std::iter::empty())
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        match instance {
            Value::Object(object) => self.properties.iter().all(|property| object.contains_key(property.as_str())),
            _ => true,
        }
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let items = value.as_array().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`required` must be an array of strings".to_string(),
    })?;
    let mut properties = Vec::with_capacity(items.len());
    for item in items {
        let name = item.as_str().ok_or_else(|| CompilationError::SchemaError {
            schema_pointer: artifact.context.pointer.join(keyword),
            reason: "`required` must be an array of strings".to_string(),
        })?;
        properties.push(name.to_string());
    }
    artifact
        .filters
        .push(Box::new(Required { properties, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location_points_at_the_missing_property_s_index() {
        tests_util::assert_schema_path(json!({"required": ["a", "b"]}), json!({"a": 1}), "#/required/1")
    }

    #[test]
    fn missing_property_is_named() {
        use crate::JSONSchema;
        let schema = json!({"required": ["a", "b"]});
        let instance = json!({"a": 1});
        let compiled = JSONSchema::compile(&schema).expect("compiles");
        let error = compiled.validate(&instance).next().expect("should be an error");
        assert!(matches!(&error.kind, crate::ValidationErrorKind::RequiredMissing { property } if property == "b"));
    }
}
