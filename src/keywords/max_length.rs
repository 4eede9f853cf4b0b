//! `maxLength`: a string's Unicode scalar count must not exceed the limit.
//!
//! Grounded in `jsonschema::keywords::max_length`, which counts
//! `chars().count()` rather than byte length, matching the spec's
//! "characters" units for string length keywords.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct MaxLength {
    limit: u64,
    schema_pointer: Pointer,
}

impl Keyword for MaxLength {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::String(string) = instance {
            let length = string.chars().count() as u64;
            if length > self.limit {
                return error(ValidationError::new(
                    ValidationErrorKind::LengthViolation {
                        reason: format!("string of length {} exceeds the maximum of {}", length, self.limit),
                    },
                    self.schema_pointer.clone(),
                    instance_path.to_pointer(),
                    owned(instance),
                ));
            }
        }
        no_error()
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        match instance {
            Value::String(string) => string.chars().count() as u64 <= self.limit,
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
    let limit = value.as_u64().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`maxLength` must be a non-negative integer".to_string(),
    })?;
    artifact.filters.push(Box::new(MaxLength { limit, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}
