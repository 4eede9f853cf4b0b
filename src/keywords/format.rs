//! The `format` keyword: a named string check looked up in the compiled
//! schema's `FormatRegistry`.
//!
//! Grounded in `jsonschema::keywords::format`. Annotation-only drafts (a
//! `format` the registry doesn't recognize) pass silently, matching
//! `spec.md`'s "unknown format names are ignored" rule; a name the registry
//! knows but was disabled via `without_format` also always passes.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Format {
    name: String,
    schema_pointer: Pointer,
}

impl Keyword for Format {
    fn validate<'a>(&self, schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::String(string) = instance {
            if let Some(Some(check)) = schema.formats().get(&self.name) {
                if !check.is_valid(string) {
                    return error(ValidationError::new(
                        ValidationErrorKind::FormatMismatch { format: self.name.clone() },
                        self.schema_pointer.clone(),
                        instance_path.to_pointer(),
                        owned(instance),
                    ));
                }
            }
        }
        no_error()
    }

    fn is_valid(&self, schema: &JSONSchema, instance: &Value) -> bool {
        match instance {
            Value::String(string) => match schema.formats().get(&self.name) {
                Some(Some(check)) => check.is_valid(string),
                _ => true,
            },
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
    let name = value.as_str().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`format` must be a string".to_string(),
    })?;
    if artifact.context.options.formats().validates_by_default() {
        artifact
            .filters
            .push(Box::new(Format { name: name.to_string(), schema_pointer: artifact.context.pointer.join(keyword) }));
    }
    Ok(())
}
