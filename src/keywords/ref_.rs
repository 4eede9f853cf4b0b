//! `$ref`: validate against a schema located elsewhere in the same document.
//!
//! Grounded in `jsonschema::keywords::ref_`, but deliberately diverging from
//! its lazy, validate-time `RwLock`-guarded resolution: here `$ref` targets
//! are requested from the shared `Registry` at compile time, and
//! `compilation::compile_entrypoint`'s worklist loop materializes every
//! requested subtree before `JSONSchema::compile` returns (`spec.md` §4.7).
//! This keyword only ever stores the target's string identifier and looks it
//! up through `JSONSchema::get_validator` at validation time, so it never
//! holds a borrow that would make `$ref` cycles a borrow-checker problem.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Ref {
    identifier: String,
    schema_pointer: Pointer,
}

impl Keyword for Ref {
    fn validate<'a>(&self, schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        match schema.get_validator(&self.identifier) {
            Some(target) => {
                let errors: Vec<ValidationError> = target
                    .validate(schema, instance, instance_path)
                    .map(|error| error.with_ref_crossing(self.schema_pointer.clone()))
                    .collect();
                Box::new(errors.into_iter())
            }
            None => error(ValidationError::new(
                ValidationErrorKind::RefMismatch,
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            )),
        }
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        schema.get_validator(&self.identifier).map_or(false, |target| target.is_valid(schema, instance))
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let reference = value.as_str().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`$ref` must be a string".to_string(),
    })?;
    let url = artifact.context.build_url(reference)?;
    let mut target_authority_url = url.clone();
    target_authority_url.set_fragment(None);
    let target_authority = target_authority_url.to_string();
    let pointer = Pointer::from_uri(url.fragment().unwrap_or(""));
    let identifier = artifact.context.registry.borrow_mut().request(&target_authority, pointer);
    artifact
        .filters
        .push(Box::new(Ref { identifier, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn resolves_within_the_same_document() {
        let schema = json!({
            "definitions": {"positive": {"type": "integer", "minimum": 0}},
            "properties": {"value": {"$ref": "#/definitions/positive"}}
        });
        tests_util::is_valid(schema.clone(), json!({"value": 3}));
        tests_util::is_not_valid(schema, json!({"value": -3}));
    }

    #[test]
    fn location_of_an_error_crossing_a_ref() {
        let schema = json!({
            "definitions": {"positive": {"type": "integer", "minimum": 0}},
            "properties": {"value": {"$ref": "#/definitions/positive"}}
        });
        tests_util::assert_schema_path(schema, json!({"value": -3}), "#/definitions/positive/minimum")
    }
}
