//! `dependentRequired` (2019-09+): the array-only half of what pre-2019-09
//! drafts call `dependencies`.
//!
//! Grounded in `jsonschema`'s modern keyword split; shares its validation
//! shape with `dependencies::Dependency::Required` but has no schema-valued
//! form to handle.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct DependentRequired {
    entries: Vec<(String, Vec<String>)>,
    schema_pointer: Pointer,
}

impl Keyword for DependentRequired {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        let Value::Object(object) = instance else {
            return Box::new(std::iter::empty());
        };
        let mut errors = Vec::new();
        for (property, required) in &self.entries {
            if !object.contains_key(property.as_str()) {
                continue;
            }
            for name in required {
                if !object.contains_key(name.as_str()) {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::DependencyUnsatisfied {
                            property: property.clone(),
                            reason: format!("also requires `{}`", name),
                        },
                        self.schema_pointer.clone(),
                        instance_path.to_pointer(),
                        owned(instance),
                    ));
                }
            }
        }
        Box::new(errors.into_iter())
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        let Value::Object(object) = instance else { return true };
        self.entries.iter().all(|(property, required)| {
            !object.contains_key(property.as_str()) || required.iter().all(|name| object.contains_key(name.as_str()))
        })
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
        reason: "`dependentRequired` must be an object".to_string(),
    })?;
    let mut entries = Vec::with_capacity(object.len());
    for (property, names) in object {
        let names = names.as_array().ok_or_else(|| CompilationError::SchemaError {
            schema_pointer: artifact.context.pointer.join(keyword),
            reason: "`dependentRequired` entries must be arrays of strings".to_string(),
        })?;
        let mut required = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_str().ok_or_else(|| CompilationError::SchemaError {
                schema_pointer: artifact.context.pointer.join(keyword),
                reason: "`dependentRequired` entries must be arrays of strings".to_string(),
            })?;
            required.push(name.to_string());
        }
        entries.push((property.clone(), required));
    }
    artifact
        .filters
        .push(Box::new(DependentRequired { entries, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location() {
        tests_util::assert_schema_path(
            json!({"dependentRequired": {"a": ["b"]}}),
            json!({"a": 1}),
            "#/dependentRequired",
        )
    }
}
