//! `enum`: the instance must equal one of a fixed set of values.
//!
//! Grounded in `jsonschema::keywords::enum_`, which compares via an
//! epsilon-tolerant float equality; this uses `value_eq::eq` instead, for
//! the same recursive-numeric-equality reasoning as `uniqueItems` (see
//! `DESIGN.md`).
use crate::{
    compilation::JSONSchema,
    driver::Artifact,
    error::{error, no_error, owned, CompilationError, ErrorIterator, ValidationError, ValidationErrorKind},
    keyword::Keyword,
    paths::{InstancePath, Pointer},
    value_eq,
};
use serde_json::{Map, Value};

#[derive(Debug)]
struct Enum {
    options: Vec<Value>,
    schema_pointer: Pointer,
}

impl Keyword for Enum {
    fn validate<'a>(&self, _schema: &'a JSONSchema, instance: &'a Value, instance_path: &InstancePath) -> ErrorIterator<'a> {
        if !self.options.iter().any(|option| value_eq::eq(option, instance)) {
            return error(ValidationError::new(
                ValidationErrorKind::EnumMismatch { options: Value::Array(self.options.clone()) },
                self.schema_pointer.clone(),
                instance_path.to_pointer(),
                owned(instance),
            ));
        }
        no_error()
    }

    fn is_valid(&self, _schema: &JSONSchema, instance: &Value) -> bool {
        self.options.iter().any(|option| value_eq::eq(option, instance))
    }
}

pub(crate) fn parse<'a>(
    keyword: &str,
    value: &'a Value,
    _parent: &'a Map<String, Value>,
    artifact: &mut Artifact<'a>,
) -> Result<(), CompilationError> {
    let options = value.as_array().ok_or_else(|| CompilationError::SchemaError {
        schema_pointer: artifact.context.pointer.join(keyword),
        reason: "`enum` must be an array".to_string(),
    })?;
    artifact.filters.push(Box::new(Enum {
        options: options.clone(),
        schema_pointer: artifact.context.pointer.join(keyword),
    }));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn location() {
        tests_util::assert_schema_path(json!({"enum": [1, 2, 3]}), json!(4), "#/enum")
    }

    #[test]
    fn integer_and_float_forms_are_equal() {
        tests_util::is_valid(json!({"enum": [1.0]}), json!(1));
    }
}
