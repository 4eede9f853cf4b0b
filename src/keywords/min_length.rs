//! `minLength`: a string's Unicode scalar count must not fall below the
//! limit.
//!
//! Grounded in `jsonschema::keywords::min_length`; see `max_length` for the
//! character-counting rationale.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct MinLength {
    limit: u64,
    schema_pointer: Pointer,
}

impl Keyword for MinLength {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::String(string) = instance {
            let length = string.chars().count() as u64;
            if length < self.limit {
                return error(ValidationError::new(
                    ValidationErrorKind::LengthViolation {
                        reason: format!("string of length {} is shorter than the minimum of {}", length, self.limit),
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
            Value::String(string) => string.chars().count() as u64 >= self.limit,
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
        reason: "`minLength` must be a non-negative integer".to_string(),
    })?;
    artifact.filters.push(Box::new(MinLength { limit, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"minLength": 3}), json!("ab"))]
    #[test_case(json!({"minLength": 3}), json!("é"))]
    fn location(schema: serde_json::Value, instance: serde_json::Value) {
        tests_util::assert_schema_path(schema, instance, "#/minLength")
    }

    #[test]
    fn counts_scalars_not_bytes() {
        tests_util::is_valid(json!({"minLength": 2}), json!("日本"));
    }
}
