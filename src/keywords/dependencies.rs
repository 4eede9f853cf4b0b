//! `dependencies` (before 2019-09 split it into `dependentRequired`/
//! `dependentSchemas`): each key names either an array of sibling properties
//! that must then also be present, or a schema the whole instance must then
//! satisfy.
//!
//! Grounded in `jsonschema::keywords::dependencies::DependenciesValidator`,
//! which compiles an array-valued dependency into a `RequiredValidator` and
//! keeps a schema-valued one as-is; this keeps that same two-kind split in
//! one enum rather than two validator types.
use crate::{
    compilation::JSONSchema,
    driver::{self, Artifact},
    error::{owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
enum Dependency<'a> {
    Required(Vec<String>),
    Schema(Artifact<'a>),
}

#[derive(Debug)]
struct Dependencies<'a> {
    entries: Vec<(String, Dependency<'a>)>,
    schema_pointer: Pointer,
}

impl<'a> Keyword for Dependencies<'a> {
    fn validate<'i>(&self, schema: &'i JSONSchema, instance: &'i Value, instance_path: &InstancePath) -> ErrorIterator<'i> {
        let Value::Object(object) = instance else {
            return Box::new(std::iter::empty());
        };
        let mut errors = Vec::new();
        for (property, dependency) in &self.entries {
            if !object.contains_key(property.as_str()) {
                continue;
            }
            match dependency {
                Dependency::Required(required) => {
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
                Dependency::Schema(sub) => errors.extend(sub.validate(schema, instance, instance_path)),
            }
        }
        Box::new(errors.into_iter())
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        let Value::Object(object) = instance else { return true };
        self.entries.iter().all(|(property, dependency)| {
            if !object.contains_key(property.as_str()) {
                return true;
            }
            match dependency {
                Dependency::Required(required) => required.iter().all(|name| object.contains_key(name.as_str())),
                Dependency::Schema(sub) => sub.is_valid(schema, instance),
            }
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
        reason: "`dependencies` must be an object".to_string(),
    })?;
    let base_context = artifact.context.descend(keyword, value);
    let mut entries = Vec::with_capacity(object.len());
    for (property, dependency_value) in object {
        let dependency = match dependency_value {
            Value::Array(names) => {
                let mut required = Vec::with_capacity(names.len());
                for name in names {
                    let name = name.as_str().ok_or_else(|| CompilationError::SchemaError {
                        schema_pointer: base_context.pointer.join(property.as_str()),
                        reason: "array-form dependency must contain only strings".to_string(),
                    })?;
                    required.push(name.to_string());
                }
                Dependency::Required(required)
            }
            _ => {
                let context = base_context.descend(property.as_str(), dependency_value);
                Dependency::Schema(driver::compile_subtree(dependency_value, context)?)
            }
        };
        entries.push((property.clone(), dependency));
    }
    artifact
        .filters
        .push(Box::new(Dependencies { entries, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location_of_an_unsatisfied_required_dependency() {
        tests_util::assert_schema_path(
            json!({"dependencies": {"a": ["b"]}}),
            json!({"a": 1}),
            "#/dependencies",
        )
    }

    #[test]
    fn schema_form_applies_to_the_whole_instance() {
        let schema = json!({"dependencies": {"a": {"required": ["b"]}}});
        tests_util::is_valid(schema.clone(), json!({"a": 1, "b": 2}));
        tests_util::is_not_valid(schema, json!({"a": 1}));
    }
}
