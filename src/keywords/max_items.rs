//! `maxItems`: an array's length must not exceed the limit.
//!
//! Grounded in `jsonschema::keywords::max_items`.
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct MaxItems {
    limit: u64,
    schema_pointer: Pointer,
}

impl Keyword for MaxItems {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if let Value::Array(items) = instance {
            let length = items.len() as u64;
            if length > self.limit {
                return error(ValidationError::new(
                    ValidationErrorKind::LengthViolation {
                        reason: format!("array of {} items exceeds the maximum of {}", length, self.limit),
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
            Value::Array(items) => items.len() as u64 <= self.limit,
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
        reason: "`maxItems` must be a non-negative integer".to_string(),
    })?;
    artifact.filters.push(Box::new(MaxItems { limit, schema_pointer: artifact.context.pointer.join(keyword) }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location() {
        tests_util::assert_schema_path(json!({"maxItems": 1}), json!([1, 2]), "#/maxItems")
    }
}
