//! `maxProperties`: an object's key count must not exceed the limit.
//!
//! Grounded in `jsonschema::keywords::max_properties`.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct MaxProperties {
    limit: u64,
    schema_pointer: Pointer,
}

impl Keyword for MaxProperties {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Object(object) = instance {
            let count = object.len() as u64;
            if count > self.limit {
                return error(ValidationError::new(
                    ValidationErrorKind::LengthViolation {
                        reason: format!("object with {} properties exceeds the maximum of {}", count, self.limit),
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
            Value::Object(object) => object.len() as u64 <= self.limit,
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
        reason: "`maxProperties` must be a non-negative integer".to_string(),
    })?;
    artifact
        .filters
        .push(Box::new(MaxProperties { limit, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}
